//! Adjacency and player actions.
//!
//! [`AdjacencyResolver`] answers "is this one step away, and in which
//! direction". [`MovementEngine`] validates and applies moves, probes and
//! phase rotations, reporting each as a typed outcome.

mod adjacency;
mod engine;

pub use adjacency::{AdjacencyResolver, Direction, MAX_DIAGONAL_RISE};
pub use engine::{
    rotation_angle, MoveContext, MoveOutcome, MoveRejection, MoveReport, MovementEngine,
    ProbeOutcome, ProbeRejection, RotateOutcome, RotateRejection, ZoneMeasurement,
};
