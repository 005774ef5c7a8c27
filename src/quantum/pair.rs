//! Entangled zone pairs.
//!
//! ## State machine
//!
//! `Unmeasured -> Measured`, terminal. The transition fires only through
//! [`QuantumZonePair::measure`]; a second call is a no-op. Measurement of
//! either zone fixes the outcome of both.
//!
//! ## Arity
//!
//! A zone reads its safety from a probability distribution whose shape
//! depends on how many qubits contribute to it:
//!
//! | Arity    | Outcomes | Index                | Safe slot | Start state |
//! |----------|----------|----------------------|-----------|-------------|
//! | `Single` | 2        | own value            | 0         | both `0`    |
//! | `Joint`  | 4        | `own * 2 + partner`  | 2         | both `1`    |
//!
//! The danger slot is 1 in both shapes. Without phase rotation a `Single`
//! pair resolves to two zones that agree, a `Joint` pair to exactly one safe
//! zone.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use super::register::QubitRegister;
use crate::core::{BoardPosition, GameRng, ZoneError};

/// Tolerance for reading a probability as certain.
pub const PROBABILITY_EPSILON: f64 = 1e-4;

/// How many qubits feed a zone's distribution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneArity {
    /// One qubit: the zone's own value.
    #[default]
    Single,
    /// Two qubits: the zone's own value and its partner's.
    Joint,
}

impl ZoneArity {
    /// Number of outcomes in the zone's distribution.
    #[must_use]
    pub const fn outcome_count(self) -> usize {
        match self {
            ZoneArity::Single => 2,
            ZoneArity::Joint => 4,
        }
    }

    /// Distribution slot holding the "safe" probability.
    #[must_use]
    pub const fn safe_slot(self) -> usize {
        match self {
            ZoneArity::Single => 0,
            ZoneArity::Joint => 2,
        }
    }

    /// Distribution slot holding the "danger" probability.
    #[must_use]
    pub const fn danger_slot(self) -> usize {
        1
    }

    const fn initial_value(self) -> u8 {
        match self {
            ZoneArity::Single => 0,
            ZoneArity::Joint => 1,
        }
    }
}

/// Which half of a pair a zone is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneSlot {
    First,
    Second,
}

impl ZoneSlot {
    /// Qubit index owned by this slot.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            ZoneSlot::First => 0,
            ZoneSlot::Second => 1,
        }
    }

    /// The other half of the pair.
    #[must_use]
    pub const fn partner(self) -> Self {
        match self {
            ZoneSlot::First => ZoneSlot::Second,
            ZoneSlot::Second => ZoneSlot::First,
        }
    }
}

/// Index of a pair in the board's zone arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairId(pub u32);

impl PairId {
    /// Create a new pair ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// A tile's link into the zone arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneRef {
    pub pair: PairId,
    pub slot: ZoneSlot,
}

impl ZoneRef {
    /// Create a zone reference.
    #[must_use]
    pub const fn new(pair: PairId, slot: ZoneSlot) -> Self {
        Self { pair, slot }
    }
}

/// Two linked quantum zones sharing one entangled register.
#[derive(Clone, Debug)]
pub struct QuantumZonePair {
    register: QubitRegister,
    arity: ZoneArity,
    measured: bool,
    positions: [BoardPosition; 2],
}

impl QuantumZonePair {
    /// Create an unmeasured pair linking the zones at `first` and `second`.
    #[must_use]
    pub fn new(arity: ZoneArity, first: BoardPosition, second: BoardPosition) -> Self {
        let value = arity.initial_value();
        Self {
            register: QubitRegister::from_basis([value, value]),
            arity,
            measured: false,
            positions: [first, second],
        }
    }

    /// Distribution shape of both zones.
    #[must_use]
    pub fn arity(&self) -> ZoneArity {
        self.arity
    }

    /// Whether the pair has collapsed. Never reverts to false.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.measured
    }

    /// Board position of one half of the pair.
    #[must_use]
    pub fn position(&self, slot: ZoneSlot) -> BoardPosition {
        self.positions[slot.index()]
    }

    /// Measure the pair from the zone in `slot`.
    ///
    /// Mixes the partner, couples partner into self, collapses self, then
    /// collapses the partner. Returns `true` if this call performed the
    /// measurement, `false` if the pair was already measured.
    pub fn measure(&mut self, slot: ZoneSlot, rng: &mut GameRng) -> bool {
        if self.measured {
            return false;
        }

        let own = slot.index();
        let partner = slot.partner().index();

        self.register.hadamard(partner);
        self.register.controlled_cycle(partner, own);
        let own_value = self.register.measure(own, rng);
        let partner_value = self.register.measure(partner, rng);
        self.measured = true;

        trace!(?slot, own_value, partner_value, "zone pair measured");
        true
    }

    /// Phase-rotate the pair from the zone in `slot` by `angle` radians.
    ///
    /// Only valid before measurement; a measured pair is left untouched.
    pub fn phase_all(&mut self, slot: ZoneSlot, angle: f64) -> Result<(), ZoneError> {
        if self.measured {
            return Err(ZoneError::AlreadyMeasured);
        }

        let own = slot.index();
        let partner = slot.partner().index();

        self.register.hadamard(own);
        self.register.hadamard(partner);
        self.register.phase_rotate(own, angle);
        self.register.hadamard(own);
        self.register.hadamard(partner);
        self.register.controlled_cycle(own, partner);

        trace!(?slot, angle, "zone pair phase rotated");
        Ok(())
    }

    /// Probability distribution seen by the zone in `slot`.
    ///
    /// Two entries for `Single` (indexed by own value), four for `Joint`
    /// (indexed `own * 2 + partner`).
    #[must_use]
    pub fn distribution(&self, slot: ZoneSlot) -> SmallVec<[f64; 4]> {
        let own = slot.index();
        match self.arity {
            ZoneArity::Single => (0..2u8).map(|v| self.register.probability(own, v)).collect(),
            ZoneArity::Joint => (0..4u8)
                .map(|index| {
                    let own_value = index >> 1;
                    let partner_value = index & 1;
                    let mut values = [0u8; 2];
                    values[own] = own_value;
                    values[slot.partner().index()] = partner_value;
                    self.register.basis_probability(values)
                })
                .collect(),
        }
    }

    /// Probability that the zone in `slot` resolves safe.
    #[must_use]
    pub fn safe_probability(&self, slot: ZoneSlot) -> f64 {
        self.distribution(slot)[self.arity.safe_slot()]
    }

    /// Probability that the zone in `slot` resolves dangerous.
    #[must_use]
    pub fn danger_probability(&self, slot: ZoneSlot) -> f64 {
        self.distribution(slot)[self.arity.danger_slot()]
    }

    /// Whether the zone in `slot` is certainly safe.
    #[must_use]
    pub fn is_safe(&self, slot: ZoneSlot) -> bool {
        (self.safe_probability(slot) - 1.0).abs() < PROBABILITY_EPSILON
    }
}
