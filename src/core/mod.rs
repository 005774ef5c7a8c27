//! Core engine types: positions, RNG, configuration, actions, errors.
//!
//! This module contains the building blocks every other module depends on.
//! Hosts configure a session via `GameConfig` rather than touching the board
//! directly.

pub mod action;
pub mod config;
pub mod error;
pub mod position;
pub mod rng;

pub use action::{ActionRecord, HostAction};
pub use config::{BoardSource, GameConfig, PaletteEntry, PickupConfig, ResourceLimits, ZonePairConfig};
pub use error::{BoardError, ZoneError};
pub use position::BoardPosition;
pub use rng::GameRng;
