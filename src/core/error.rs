//! Error types.
//!
//! Only setup failures and integration mistakes are errors. Gameplay
//! rejections (out of fuel, not adjacent, ...) are ordinary outcome values,
//! see [`crate::movement::MoveOutcome`].

use thiserror::Error;

use super::BoardPosition;

/// Board construction and lookup failures.
///
/// Construction variants are fatal: a session is never created from a
/// configuration that produces one of them.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum BoardError {
    #[error("board dimensions must be non-zero, got {cols}x{rows}")]
    InvalidDimensions { cols: usize, rows: usize },

    #[error("board needs at least two cells to keep start and goal apart")]
    TooSmall,

    #[error("tile palette has no entries")]
    EmptyPalette,

    #[error("palette weight at index {index} must be finite and non-negative, got {weight}")]
    InvalidWeight { index: usize, weight: f32 },

    #[error("position {0} is not on the board")]
    NotFound(BoardPosition),

    #[error("layout row {row} has {found} columns, expected {expected}")]
    RaggedLayout { row: usize, expected: usize, found: usize },

    #[error("authored layout has no start tile")]
    MissingStart,

    #[error("authored layout has {0} start tiles, expected exactly one")]
    MultipleStarts(usize),

    #[error("quantum zone at {0} has no partner")]
    ZoneMissingPartner(BoardPosition),

    #[error("tile at {0} is not a quantum zone")]
    NotAZone(BoardPosition),

    #[error("quantum zone at {0} is linked to more than one pair")]
    ZoneAlreadyPaired(BoardPosition),

    #[error("quantum zone at {0} cannot be paired with itself")]
    SelfPairedZone(BoardPosition),

    #[error("tile at {0} already carries a pickup")]
    PickupOverlap(BoardPosition),

    #[error("pickup at {0} lies on a tile that cannot be entered")]
    UnreachablePickup(BoardPosition),

    #[error("board needs {0} zone pairs, more than a pair id can address")]
    TooManyZonePairs(usize),

    #[error("board needs {0} pickups, more than a pickup id can address")]
    TooManyPickups(usize),
}

/// Misuse of a quantum zone pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ZoneError {
    #[error("zone pair is already measured")]
    AlreadyMeasured,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_position() {
        let err = BoardError::ZoneMissingPartner(BoardPosition::new(3, 1));
        assert_eq!(err.to_string(), "quantum zone at (3, 1) has no partner");

        let err = BoardError::NotFound(BoardPosition::new(-1, 9));
        assert_eq!(err.to_string(), "position (-1, 9) is not on the board");
    }

    #[test]
    fn test_ragged_message() {
        let err = BoardError::RaggedLayout { row: 2, expected: 5, found: 4 };
        assert_eq!(err.to_string(), "layout row 2 has 4 columns, expected 5");
    }
}
