//! End-to-end session tests.
//!
//! These tests drive a `GameSession` the way a host would:
//! - Select, confirm, tick
//! - Zone damage settles one tick after the move
//! - Pickups apply once
//! - Probes and phase rotation through the host surface

use quantum_hex::core::{BoardPosition, GameConfig, HostAction, ResourceLimits, ZonePairConfig};
use quantum_hex::movement::{MoveOutcome, ProbeOutcome, RotateOutcome, RotateRejection};
use quantum_hex::player::PickupKind;
use quantum_hex::session::{GameSession, SessionStatus, TickEvent};
use quantum_hex::TileKind;
use tracing_subscriber::filter::LevelFilter;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(LevelFilter::DEBUG)
        .try_init();
}

fn pos(col: i32, row: i32) -> BoardPosition {
    BoardPosition::new(col, row)
}

fn step(session: &mut GameSession, target: BoardPosition) -> MoveOutcome {
    session.select_tile(target).unwrap();
    session.confirm_move()
}

/// Start, then a linked pair of zones to the right.
fn zone_row(seed: u64, limits: ResourceLimits) -> GameConfig {
    GameConfig::authored(vec![vec![TileKind::Start, TileKind::QuantumZone, TileKind::QuantumZone]])
        .with_zone_pair(ZonePairConfig::new(pos(1, 0), pos(2, 0)))
        .with_limits(limits)
        .with_seed(seed)
}

// =============================================================================
// Full Runs
// =============================================================================

#[test]
fn test_walk_to_goal() {
    init_logging();
    let config = GameConfig::generated(5, 5)
        .with_palette_entry(1.0, TileKind::Empty)
        .with_goal(pos(0, 4))
        .with_seed(3);
    let mut session = GameSession::new(&config).unwrap();

    for row in 1..=4 {
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert!(step(&mut session, pos(0, row)).is_moved());
        session.tick();
    }

    assert_eq!(session.status(), SessionStatus::Won);
    assert_eq!(session.current_player_state().fuel(), 16);
    assert_eq!(session.history().len(), 8);
    assert_eq!(session.tick_count(), 4);
}

#[test]
fn test_same_seed_same_game() {
    let run = |seed| {
        let mut session = GameSession::new(&zone_row(seed, ResourceLimits::default())).unwrap();
        step(&mut session, pos(1, 0));
        session.tick();
        session.is_zone_safe(pos(2, 0)).unwrap()
    };
    for seed in 0..8 {
        assert_eq!(run(seed), run(seed));
    }
}

// =============================================================================
// Deferred Zone Damage
// =============================================================================

#[test]
fn test_zone_damage_settles_on_next_tick() {
    init_logging();
    let mut damaged = 0;

    for seed in 0..32 {
        let mut session = GameSession::new(&zone_row(seed, ResourceLimits::new(5, 1, 1))).unwrap();
        let outcome = step(&mut session, pos(1, 0));
        let MoveOutcome::Moved(report) = outcome else {
            panic!("expected a move, got {outcome:?}");
        };
        assert!(report.zone.unwrap().newly_measured);

        // Measured now, consequences not applied yet.
        assert_eq!(session.is_zone_measured(pos(2, 0)), Ok(true));
        assert_eq!(session.current_player_state().health(), 1);
        assert_eq!(session.pending_count(), 1);

        let safe = session.is_zone_safe(pos(1, 0)).unwrap();
        let events = session.tick();
        assert_eq!(events[0], TickEvent::ZoneRevealed { position: pos(1, 0), safe });

        if safe {
            assert_eq!(events.len(), 1);
            assert_eq!(session.status(), SessionStatus::InProgress);
        } else {
            damaged += 1;
            assert_eq!(
                &events[1..],
                &[
                    TickEvent::PlayerDamaged { position: pos(1, 0), health: 0 },
                    TickEvent::PlayerDied,
                ]
            );
            assert_eq!(session.status(), SessionStatus::Dead);
        }
    }

    assert!(damaged > 0 && damaged < 32, "damaged in {damaged} of 32 runs");
}

#[test]
fn test_probe_reveals_without_damage() {
    init_logging();
    for seed in 0..8 {
        let mut session = GameSession::new(&zone_row(seed, ResourceLimits::new(5, 2, 3))).unwrap();

        session.select_tile(pos(2, 0)).unwrap();
        let outcome = session.activate_probe();
        assert!(matches!(outcome, ProbeOutcome::Probed { position, .. } if position == pos(2, 0)));
        assert_eq!(session.selection(), None);
        assert_eq!(session.current_player_state().probes(), 1);

        let events = session.tick();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], TickEvent::ZoneRevealed { .. }));
        assert_eq!(session.current_player_state().health(), 3);

        // A second probe on the collapsed pair still costs a charge.
        session.select_tile(pos(1, 0)).unwrap();
        let outcome = session.activate_probe();
        assert!(matches!(
            outcome,
            ProbeOutcome::Probed { measurement, .. } if !measurement.newly_measured
        ));
        assert_eq!(session.current_player_state().probes(), 0);
    }
}

// =============================================================================
// Phase Rotation
// =============================================================================

#[test]
fn test_phase_rotation_keeps_selection() {
    let mut session = GameSession::new(&zone_row(4, ResourceLimits::default())).unwrap();

    assert_eq!(
        session.request_phase_rotate(0.5),
        RotateOutcome::Rejected(RotateRejection::NoSelection)
    );

    session.select_tile(pos(1, 0)).unwrap();
    assert!(matches!(session.request_phase_rotate(0.5), RotateOutcome::Rotated { .. }));
    assert_eq!(session.selection(), Some(pos(1, 0)));

    let probs = session.zone_probabilities(pos(1, 0)).unwrap();
    assert!((probs.safe - 0.5).abs() < 1e-4);
    assert!((probs.danger - 0.5).abs() < 1e-4);

    session.activate_probe();
    session.select_tile(pos(2, 0)).unwrap();
    assert_eq!(
        session.request_phase_rotate(0.5),
        RotateOutcome::Rejected(RotateRejection::AlreadyMeasured)
    );
    assert!(matches!(
        session.history().back().map(|r| r.action),
        Some(HostAction::PhaseRotate { .. })
    ));
}

// =============================================================================
// Pickups
// =============================================================================

#[test]
fn test_pickup_applies_once() {
    let config = GameConfig::generated(3, 3)
        .with_palette_entry(1.0, TileKind::Empty)
        .with_pickup(pos(0, 1), PickupKind::Fuel, 5)
        .with_limits(ResourceLimits::new(10, 1, 3));
    let mut session = GameSession::new(&config).unwrap();

    let MoveOutcome::Moved(report) = step(&mut session, pos(0, 1)) else {
        panic!("expected a move");
    };
    assert_eq!(report.pickup.map(|p| p.gained), Some(1));
    assert_eq!(session.current_player_state().fuel(), 10);

    step(&mut session, pos(0, 0));
    let MoveOutcome::Moved(report) = step(&mut session, pos(0, 1)) else {
        panic!("expected a move");
    };
    assert_eq!(report.pickup, None);
    assert_eq!(session.current_player_state().fuel(), 8);
}

#[test]
fn test_authored_pickup_waits_for_first_tick() {
    let config = GameConfig::authored(vec![vec![TileKind::Start, TileKind::Empty]])
        .with_pickup(pos(1, 0), PickupKind::Fuel, 2)
        .with_limits(ResourceLimits::new(5, 1, 3));
    let mut session = GameSession::new(&config).unwrap();

    let MoveOutcome::Moved(report) = step(&mut session, pos(1, 0)) else {
        panic!("expected a move");
    };
    assert_eq!(report.pickup, None);
    assert_eq!(session.current_player_state().fuel(), 4);

    let events = session.tick();
    assert_eq!(events.as_slice(), &[TickEvent::PickupActivated { position: pos(1, 0) }]);

    step(&mut session, pos(0, 0));
    let MoveOutcome::Moved(report) = step(&mut session, pos(1, 0)) else {
        panic!("expected a move");
    };
    assert_eq!(report.pickup.map(|p| p.gained), Some(2));
    assert_eq!(session.current_player_state().fuel(), 4);
}

#[test]
fn test_reachable_from_start() {
    let config = GameConfig::generated(3, 3).with_palette_entry(1.0, TileKind::Empty);
    let session = GameSession::new(&config).unwrap();
    let targets: Vec<_> = session.reachable().into_iter().map(|(_, p)| p).collect();
    assert_eq!(targets, vec![pos(0, 1), pos(1, 0)]);
}
