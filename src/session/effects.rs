//! Deferred effects.
//!
//! Some consequences settle one host tick after the action that caused
//! them: the safety check and damage after a zone measurement, and the
//! activation of pickups placed on an authored board. They wait here until
//! the session's next `tick()`.
//!
//! ## Behavior
//!
//! - `push()`: queue an effect
//! - `take()`: drain everything queued so far, oldest first
//!
//! Effects queued while a drained batch is being applied land in the next
//! batch.

use serde::{Deserialize, Serialize};

use crate::core::BoardPosition;
use crate::player::PickupId;
use crate::quantum::ZoneRef;

/// An effect waiting for the next tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingEffect {
    /// Reveal a measured zone; damage the player if it turned out unsafe
    /// and `damages_player` is set.
    ZoneFeedback {
        zone: ZoneRef,
        position: BoardPosition,
        damages_player: bool,
    },
    /// Make a dormant pickup collectable.
    ActivatePickup { pickup: PickupId },
}

/// FIFO queue of deferred effects.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PendingEffects {
    pending: Vec<PendingEffect>,
}

impl PendingEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, effect: PendingEffect) {
        self.pending.push(effect);
    }

    /// Get the number of pending effects.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return every queued effect in the order they were queued.
    pub fn take(&mut self) -> Vec<PendingEffect> {
        std::mem::take(&mut self.pending)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

/// Something the host should render after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickEvent {
    /// A measured zone's colour is now known.
    ZoneRevealed { position: BoardPosition, safe: bool },
    /// The player took zone damage; `health` is what remains.
    PlayerDamaged { position: BoardPosition, health: u32 },
    /// Health reached zero.
    PlayerDied,
    /// A pickup became collectable.
    PickupActivated { position: BoardPosition },
}
