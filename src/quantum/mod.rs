//! Quantum hazard zones.
//!
//! A quantum zone is a tile whose danger is undetermined until measured.
//! Zones always come in entangled pairs sharing one two-qubit register;
//! measuring either zone collapses both.
//!
//! Pairs live in an arena on the board and tiles point at them through a
//! [`ZoneRef`] (pair index + slot), so there are no back-pointers between
//! the two halves.
//!
//! ```
//! use quantum_hex::core::{BoardPosition, GameRng};
//! use quantum_hex::quantum::{QuantumZonePair, ZoneArity, ZoneSlot};
//!
//! let mut rng = GameRng::new(42);
//! let mut pair = QuantumZonePair::new(
//!     ZoneArity::Joint,
//!     BoardPosition::new(1, 1),
//!     BoardPosition::new(3, 1),
//! );
//!
//! assert!(pair.measure(ZoneSlot::First, &mut rng));
//! assert!(pair.is_measured());
//! // A joint pair without phase rotation always has exactly one safe zone.
//! assert_ne!(pair.is_safe(ZoneSlot::First), pair.is_safe(ZoneSlot::Second));
//! ```

mod amplitude;
mod pair;
mod register;

pub use amplitude::Amplitude;
pub use pair::{PairId, QuantumZonePair, ZoneArity, ZoneRef, ZoneSlot, PROBABILITY_EPSILON};
pub use register::{QubitRegister, QUBITS};
