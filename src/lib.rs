//! # quantum-hex
//!
//! Game core for a hex-board exploration game with quantum hazards.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven**: The core owns no threads and no frame loop. A host
//!    feeds it discrete actions (select, move, probe, rotate) and calls
//!    `tick()` once per frame.
//!
//! 2. **Outcomes, Not Errors**: Expected rejections (out of fuel, not
//!    adjacent, ...) are typed outcome values. Errors are reserved for bad
//!    configuration and lookups of cells that do not exist.
//!
//! 3. **Configuration Over Convention**: Boards are described by
//!    `GameConfig`, either as a weighted random palette or an authored
//!    layout.
//!
//! 4. **Deterministic**: One seed reproduces the board and every
//!    measurement.
//!
//! ## Modules
//!
//! - `core`: Positions, RNG, configuration, actions, errors
//! - `board`: Tiles, hex grid, palette sampling, board construction
//! - `movement`: Adjacency resolution and the movement engine
//! - `quantum`: Entangled zone pairs on a two-qubit register
//! - `player`: Player resources and pickups
//! - `session`: The host-facing `GameSession`
//!
//! ## Example
//!
//! ```
//! use quantum_hex::{BoardPosition, GameConfig, GameSession, SessionStatus, TileKind};
//!
//! let config = GameConfig::generated(3, 3)
//!     .with_palette_entry(1.0, TileKind::Empty)
//!     .with_goal(BoardPosition::new(0, 2))
//!     .with_seed(1);
//! let mut session = GameSession::new(&config).unwrap();
//!
//! for row in 1..=2 {
//!     session.select_tile(BoardPosition::new(0, row)).unwrap();
//!     assert!(session.confirm_move().is_moved());
//!     session.tick();
//! }
//! assert_eq!(session.status(), SessionStatus::Won);
//! ```

pub mod board;
pub mod core;
pub mod movement;
pub mod player;
pub mod quantum;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, BoardError, BoardPosition, BoardSource, GameConfig, GameRng, HostAction,
    PaletteEntry, PickupConfig, ResourceLimits, ZoneError, ZonePairConfig,
};

pub use crate::board::{Board, BoardGenerator, HexGrid, Tile, TileKind, TilePalette};

pub use crate::movement::{
    AdjacencyResolver, Direction, MoveOutcome, MoveRejection, MoveReport, MovementEngine,
    ProbeOutcome, ProbeRejection, RotateOutcome, RotateRejection,
};

pub use crate::quantum::{QuantumZonePair, ZoneArity, ZoneRef, ZoneSlot};

pub use crate::player::{Pickup, PickupKind, PickupResolver, PlayerState};

pub use crate::session::{GameSession, SessionStatus, TickEvent, ZoneProbabilities};
