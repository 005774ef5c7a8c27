//! Host-facing session and deferred effects.

mod effects;
mod game;

pub use effects::{PendingEffect, PendingEffects, TickEvent};
pub use game::{GameSession, SessionStatus, ZoneProbabilities, ZONE_DAMAGE};
