//! Board coordinates.
//!
//! A `BoardPosition` is a `(col, row)` pair into the rectangular storage of an
//! offset hex grid. Coordinates are signed so neighbour offsets can step off
//! the board and be rejected by a bounds check instead of wrapping.
//!
//! ```
//! use quantum_hex::core::BoardPosition;
//!
//! let pos = BoardPosition::new(2, 3);
//! assert_eq!(pos.offset(-1, 1), BoardPosition::new(1, 4));
//! assert!(pos.in_bounds(5, 5));
//! assert!(!pos.offset(-3, 0).in_bounds(5, 5));
//! ```

use serde::{Deserialize, Serialize};

/// Column/row coordinate on the board.
///
/// Only meaningful for a given board when `0 <= col < cols` and
/// `0 <= row < rows`; see [`BoardPosition::in_bounds`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardPosition {
    /// Column index (x).
    pub col: i32,
    /// Row index (y). Row 0 is the bottom of the board.
    pub row: i32,
}

impl BoardPosition {
    /// Create a new position.
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Position shifted by the given column and row deltas.
    #[must_use]
    pub const fn offset(self, dcol: i32, drow: i32) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
        }
    }

    /// Check whether this position lies on a `cols` x `rows` board.
    #[must_use]
    pub fn in_bounds(self, cols: usize, rows: usize) -> bool {
        self.col >= 0 && self.row >= 0 && (self.col as usize) < cols && (self.row as usize) < rows
    }

    /// Clamp into `[0, cols-1] x [0, rows-1]`.
    ///
    /// Both dimensions must be non-zero.
    #[must_use]
    pub fn clamped(self, cols: usize, rows: usize) -> Self {
        let max_col = cols.saturating_sub(1).min(i32::MAX as usize) as i32;
        let max_row = rows.saturating_sub(1).min(i32::MAX as usize) as i32;
        Self {
            col: self.col.clamp(0, max_col),
            row: self.row.clamp(0, max_row),
        }
    }

    /// Storage indices `(col, row)` if both coordinates are non-negative.
    #[must_use]
    pub fn indices(self) -> Option<(usize, usize)> {
        if self.col < 0 || self.row < 0 {
            None
        } else {
            Some((self.col as usize, self.row as usize))
        }
    }
}

impl std::fmt::Display for BoardPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl From<(i32, i32)> for BoardPosition {
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}
