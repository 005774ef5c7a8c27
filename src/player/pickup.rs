//! Collectable items and their resolution.
//!
//! `PickupResolver` applies items to the player in a game-agnostic way:
//! fuel and probe cells refill the matching resource, repair kits heal.
//! Every item applies at most once.

use serde::{Deserialize, Serialize};

use super::PlayerState;
use crate::core::BoardPosition;

/// What an item restores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    RepairKit,
    Fuel,
    Probe,
}

/// Index of an item in the board's pickup arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PickupId(pub u32);

impl PickupId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// An item lying on a tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pickup {
    kind: PickupKind,
    amount: u32,
    position: BoardPosition,
    consumed: bool,
    active: bool,
}

impl Pickup {
    /// Create an item that can be collected right away.
    #[must_use]
    pub fn new(kind: PickupKind, amount: u32, position: BoardPosition) -> Self {
        Self {
            kind,
            amount,
            position,
            consumed: false,
            active: true,
        }
    }

    /// Create an item that stays hidden until [`Pickup::activate`] is called.
    #[must_use]
    pub fn dormant(kind: PickupKind, amount: u32, position: BoardPosition) -> Self {
        Self {
            active: false,
            ..Self::new(kind, amount, position)
        }
    }

    #[must_use]
    pub fn kind(&self) -> PickupKind {
        self.kind
    }

    #[must_use]
    pub fn amount(&self) -> u32 {
        self.amount
    }

    #[must_use]
    pub fn position(&self) -> BoardPosition {
        self.position
    }

    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Make the item collectable. Returns `true` if it was dormant.
    pub fn activate(&mut self) -> bool {
        !std::mem::replace(&mut self.active, true)
    }
}

/// Report of an applied item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupApplied {
    pub kind: PickupKind,
    /// Nominal amount carried by the item.
    pub amount: u32,
    /// Amount actually added after clamping to the cap.
    pub gained: u32,
}

/// Applies items to the player.
pub struct PickupResolver;

impl PickupResolver {
    /// Apply `pickup` to `player` and mark it consumed.
    ///
    /// Returns `None` and changes nothing if the item is already consumed or
    /// still dormant.
    pub fn apply(pickup: &mut Pickup, player: &mut PlayerState) -> Option<PickupApplied> {
        if pickup.consumed || !pickup.active {
            return None;
        }

        let gained = match pickup.kind {
            PickupKind::RepairKit => player.heal(pickup.amount),
            PickupKind::Fuel => player.refuel(pickup.amount),
            PickupKind::Probe => player.add_probes(pickup.amount),
        };
        pickup.consumed = true;

        Some(PickupApplied {
            kind: pickup.kind,
            amount: pickup.amount,
            gained,
        })
    }
}
