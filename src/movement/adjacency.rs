//! Hex adjacency on the rectangular grid.
//!
//! ## Resolution order
//!
//! From `(c, r)`, first match wins:
//!
//! 1. `(c, r+1)` is `Up`, `(c, r-1)` is `Down`.
//! 2. Left column `c-1`: `(c-1, r+1)` is `UpLeft` and `(c-1, r-1)` is
//!    `DownLeft`, each only when the height values differ by at most 1.
//!    The same-row cell `(c-1, r)` is `UpLeft` when it sits lower than the
//!    origin, otherwise `DownLeft`.
//! 3. Right column `c+1`, mirrored, giving `UpRight` / `DownRight`.
//!
//! Anything else, anything off the grid, and any `Blank` endpoint is not
//! adjacent.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{HexGrid, TileKind};
use crate::core::BoardPosition;

/// Maximum height difference across a diagonal step.
pub const MAX_DIAGONAL_RISE: f32 = 1.0;

/// One of the six hex directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::Down,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// The direction of the reverse step.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
        }
    }
}

/// Stateless adjacency queries.
pub struct AdjacencyResolver;

impl AdjacencyResolver {
    /// Direction of the single step from `from` to `target`, if there is one.
    #[must_use]
    pub fn resolve(grid: &HexGrid, from: BoardPosition, target: BoardPosition) -> Option<Direction> {
        let origin = grid.get(from)?;
        let dest = grid.get(target)?;
        if origin.kind() == TileKind::Blank || dest.kind() == TileKind::Blank {
            return None;
        }

        if target == from.offset(0, 1) {
            return Some(Direction::Up);
        }
        if target == from.offset(0, -1) {
            return Some(Direction::Down);
        }

        let rise = (dest.height() - origin.height()).abs();
        let lower = dest.height() < origin.height();

        for (dcol, up, down) in [
            (-1, Direction::UpLeft, Direction::DownLeft),
            (1, Direction::UpRight, Direction::DownRight),
        ] {
            if target == from.offset(dcol, 1) {
                return (rise <= MAX_DIAGONAL_RISE).then_some(up);
            }
            if target == from.offset(dcol, -1) {
                return (rise <= MAX_DIAGONAL_RISE).then_some(down);
            }
            if target == from.offset(dcol, 0) {
                return Some(if lower { up } else { down });
            }
        }

        None
    }

    /// Every cell reachable from `from` in one step.
    ///
    /// Labels are not unique. From an even column the same-row cell and the
    /// cell below it on the same side both sit within one step, so they share
    /// `DownLeft` (or `DownRight`); from an odd column the pair above shares
    /// `UpLeft` (or `UpRight`). Key on the position, not the label.
    #[must_use]
    pub fn neighbors(grid: &HexGrid, from: BoardPosition) -> SmallVec<[(Direction, BoardPosition); 6]> {
        let mut found = SmallVec::new();
        for dcol in -1..=1 {
            for drow in -1..=1 {
                if dcol == 0 && drow == 0 {
                    continue;
                }
                let target = from.offset(dcol, drow);
                if let Some(direction) = Self::resolve(grid, from, target) {
                    found.push((direction, target));
                }
            }
        }
        found
    }
}
