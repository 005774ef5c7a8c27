//! The hex board: tiles, storage, palette sampling and construction.
//!
//! ## Coordinates
//!
//! Positions are `(col, row)` with row 0 at the bottom. Odd columns sit half
//! a row higher than even ones, which [`height_value`] encodes as a single
//! scalar per tile.
//!
//! ## Building
//!
//! ```
//! use quantum_hex::board::{BoardGenerator, TileKind};
//! use quantum_hex::core::{BoardPosition, GameConfig};
//!
//! let config = GameConfig::generated(5, 5)
//!     .with_palette_entry(3.0, TileKind::Empty)
//!     .with_palette_entry(1.0, TileKind::BlackHole)
//!     .with_goal(BoardPosition::new(4, 4))
//!     .with_seed(7);
//!
//! let board = BoardGenerator::generate(&config).unwrap();
//! assert_eq!(board.grid().get(BoardPosition::new(4, 4)).unwrap().kind(), TileKind::Goal);
//! ```

mod generator;
mod grid;
mod palette;
mod state;
mod tile;

pub use generator::{place_goal, BoardGenerator};
pub use grid::HexGrid;
pub use palette::{cumulative_thresholds, normalize, select_index, TilePalette, WEIGHT_EPSILON};
pub use state::Board;
pub use tile::{height_value, Tile, TileKind, BLANK_HEIGHT};
