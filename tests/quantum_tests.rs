//! Quantum zone pair tests.
//!
//! - The measured flag is monotonic under any operation sequence
//! - Both arities resolve to a definite outcome
//! - Measurement outcomes are reproducible from the seed

use proptest::prelude::*;
use std::f64::consts::PI;

use quantum_hex::core::{BoardPosition, GameRng, ZoneError};
use quantum_hex::quantum::{QuantumZonePair, ZoneArity, ZoneSlot, PROBABILITY_EPSILON};

#[derive(Clone, Debug)]
enum Op {
    Measure(ZoneSlot),
    Phase(ZoneSlot, f64),
    Query(ZoneSlot),
}

fn slot() -> impl Strategy<Value = ZoneSlot> {
    prop_oneof![Just(ZoneSlot::First), Just(ZoneSlot::Second)]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        slot().prop_map(Op::Measure),
        (slot(), 0.0f64..PI).prop_map(|(s, a)| Op::Phase(s, a)),
        slot().prop_map(Op::Query),
    ]
}

fn arity() -> impl Strategy<Value = ZoneArity> {
    prop_oneof![Just(ZoneArity::Single), Just(ZoneArity::Joint)]
}

fn pair(arity: ZoneArity) -> QuantumZonePair {
    QuantumZonePair::new(arity, BoardPosition::new(0, 1), BoardPosition::new(4, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_measured_is_monotonic(
        seed in any::<u64>(),
        arity in arity(),
        ops in prop::collection::vec(op(), 1..20),
    ) {
        let mut rng = GameRng::new(seed);
        let mut p = pair(arity);
        let mut seen_measured = false;

        for op in ops {
            match op {
                Op::Measure(slot) => {
                    let newly = p.measure(slot, &mut rng);
                    prop_assert_eq!(newly, !seen_measured);
                }
                Op::Phase(slot, angle) => {
                    let result = p.phase_all(slot, angle);
                    if seen_measured {
                        prop_assert_eq!(result, Err(ZoneError::AlreadyMeasured));
                    } else {
                        prop_assert!(result.is_ok());
                    }
                }
                Op::Query(slot) => {
                    let total: f64 = p.distribution(slot).iter().sum();
                    prop_assert!((total - 1.0).abs() < 1e-6);
                    let _ = p.is_safe(slot);
                }
            }
            seen_measured |= p.is_measured();
            prop_assert_eq!(p.is_measured(), seen_measured);
        }
    }

    #[test]
    fn prop_measurement_is_definite(
        seed in any::<u64>(),
        arity in arity(),
        angle in 0.0f64..PI,
        from in slot(),
    ) {
        let mut rng = GameRng::new(seed);
        let mut p = pair(arity);
        p.phase_all(from, angle).unwrap();
        p.measure(from, &mut rng);

        for slot in [ZoneSlot::First, ZoneSlot::Second] {
            let dist = p.distribution(slot);
            prop_assert_eq!(dist.len(), arity.outcome_count());
            let certain = dist.iter().filter(|&&x| (x - 1.0).abs() < PROBABILITY_EPSILON).count();
            prop_assert_eq!(certain, 1);
            prop_assert_eq!(
                p.is_safe(slot),
                (dist[arity.safe_slot()] - 1.0).abs() < PROBABILITY_EPSILON
            );
        }
    }
}

#[test]
fn test_measurement_reproducible_from_seed() {
    for arity in [ZoneArity::Single, ZoneArity::Joint] {
        for seed in 0..8 {
            let mut a = pair(arity);
            let mut b = pair(arity);
            a.measure(ZoneSlot::Second, &mut GameRng::new(seed));
            b.measure(ZoneSlot::Second, &mut GameRng::new(seed));
            assert_eq!(a.distribution(ZoneSlot::First), b.distribution(ZoneSlot::First));
        }
    }
}

#[test]
fn test_probabilities_before_measurement() {
    let p = pair(ZoneArity::Single);
    assert!((p.safe_probability(ZoneSlot::First) - 1.0).abs() < PROBABILITY_EPSILON);
    assert!(p.danger_probability(ZoneSlot::Second).abs() < PROBABILITY_EPSILON);

    let mut p = pair(ZoneArity::Single);
    p.phase_all(ZoneSlot::Second, PI / 2.0).unwrap();
    let safe = p.safe_probability(ZoneSlot::Second);
    let danger = p.danger_probability(ZoneSlot::Second);
    assert!((safe + danger - 1.0).abs() < PROBABILITY_EPSILON);
    assert!(!p.is_safe(ZoneSlot::Second));
}
