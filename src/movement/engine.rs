//! Movement, probing and phase rotation.
//!
//! Each operation validates its preconditions in a fixed order and returns
//! a typed outcome. A rejection never changes any state; these are expected
//! and frequent, so they are values rather than errors.
//!
//! The engine holds no state of its own. The caller passes the board, the
//! player and the measurement stream explicitly, and owns the selection.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AdjacencyResolver, Direction};
use crate::board::{Board, TileKind};
use crate::core::{BoardPosition, GameRng};
use crate::player::{PickupApplied, PickupResolver, PlayerState};
use crate::quantum::ZoneRef;

/// Why a move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRejection {
    NoSelection,
    /// The target is a terminal hazard.
    Blocked,
    OutOfFuel,
    NotAdjacent,
}

/// A zone measured by an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneMeasurement {
    pub zone: ZoneRef,
    /// False when the pair had already collapsed.
    pub newly_measured: bool,
}

/// What happened on a completed move.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveReport {
    pub direction: Direction,
    pub from: BoardPosition,
    pub to: BoardPosition,
    pub reached_goal: bool,
    /// Zone entered, measured on arrival. Its safety is settled later.
    pub zone: Option<ZoneMeasurement>,
    pub pickup: Option<PickupApplied>,
}

/// Result of [`MovementEngine::attempt_move`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Moved(MoveReport),
    Rejected(MoveRejection),
}

impl MoveOutcome {
    #[must_use]
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved(_))
    }
}

/// Why a probe was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeRejection {
    NoSelection,
    OutOfProbes,
    NotAZone,
}

/// Result of [`MovementEngine::activate_probe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeOutcome {
    Probed {
        position: BoardPosition,
        measurement: ZoneMeasurement,
    },
    Rejected(ProbeRejection),
}

/// Why a phase rotation did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotateRejection {
    NoSelection,
    NotAZone,
    AlreadyMeasured,
}

/// Result of [`MovementEngine::request_phase_rotate`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum RotateOutcome {
    Rotated { position: BoardPosition, angle: f64 },
    Rejected(RotateRejection),
}

/// Mutable state an action operates on.
pub struct MoveContext<'a> {
    pub board: &'a mut Board,
    pub player: &'a mut PlayerState,
    pub rng: &'a mut GameRng,
}

impl<'a> MoveContext<'a> {
    pub fn new(board: &'a mut Board, player: &'a mut PlayerState, rng: &'a mut GameRng) -> Self {
        Self { board, player, rng }
    }
}

/// Applies player actions to a board.
pub struct MovementEngine;

impl MovementEngine {
    /// Move the player onto `target`.
    ///
    /// Checks, in order: a target is selected, it is not a terminal hazard,
    /// the player has fuel, and it is adjacent. On success one unit of fuel
    /// is spent, the player moves, and arrival effects run: goal, zone
    /// measurement, then pickup.
    pub fn attempt_move(ctx: &mut MoveContext<'_>, target: Option<BoardPosition>) -> MoveOutcome {
        let outcome = Self::try_move(ctx, target);
        debug!(?target, ?outcome, "move resolved");
        outcome
    }

    fn try_move(ctx: &mut MoveContext<'_>, target: Option<BoardPosition>) -> MoveOutcome {
        let Some(target) = target else {
            return MoveOutcome::Rejected(MoveRejection::NoSelection);
        };
        let kind = ctx.board.grid().get(target).map(|t| t.kind());
        if kind.is_some_and(TileKind::is_terminal_hazard) {
            return MoveOutcome::Rejected(MoveRejection::Blocked);
        }
        if ctx.player.fuel() == 0 {
            return MoveOutcome::Rejected(MoveRejection::OutOfFuel);
        }
        let from = ctx.player.position();
        let Some(direction) = AdjacencyResolver::resolve(ctx.board.grid(), from, target) else {
            return MoveOutcome::Rejected(MoveRejection::NotAdjacent);
        };

        if !ctx.player.spend_fuel() {
            return MoveOutcome::Rejected(MoveRejection::OutOfFuel);
        }
        ctx.player.move_to(target);

        let reached_goal = kind == Some(TileKind::Goal);
        let zone = Self::measure_at(ctx, target);
        let pickup = Self::collect_at(ctx, target);

        MoveOutcome::Moved(MoveReport {
            direction,
            from,
            to: target,
            reached_goal,
            zone,
            pickup,
        })
    }

    /// Spend a probe to measure the zone at `target` without moving.
    ///
    /// A tile that is not a quantum zone is refused without spending a
    /// charge. Probing an already collapsed zone still spends one.
    pub fn activate_probe(ctx: &mut MoveContext<'_>, target: Option<BoardPosition>) -> ProbeOutcome {
        let outcome = Self::try_probe(ctx, target);
        debug!(?target, ?outcome, "probe resolved");
        outcome
    }

    fn try_probe(ctx: &mut MoveContext<'_>, target: Option<BoardPosition>) -> ProbeOutcome {
        let Some(target) = target else {
            return ProbeOutcome::Rejected(ProbeRejection::NoSelection);
        };
        if ctx.player.probes() == 0 {
            return ProbeOutcome::Rejected(ProbeRejection::OutOfProbes);
        }
        if ctx.board.zone_at(target).is_none() {
            return ProbeOutcome::Rejected(ProbeRejection::NotAZone);
        }
        if !ctx.player.spend_probe() {
            return ProbeOutcome::Rejected(ProbeRejection::OutOfProbes);
        }

        match Self::measure_at(ctx, target) {
            Some(measurement) => ProbeOutcome::Probed {
                position: target,
                measurement,
            },
            None => ProbeOutcome::Rejected(ProbeRejection::NotAZone),
        }
    }

    /// Phase-rotate the pair of the zone at `target` by `percent * π`.
    ///
    /// `percent` is clamped to `[0, 1]`; NaN counts as 0.
    pub fn request_phase_rotate(board: &mut Board, target: Option<BoardPosition>, percent: f32) -> RotateOutcome {
        let outcome = Self::try_rotate(board, target, percent);
        debug!(?target, percent, ?outcome, "phase rotation resolved");
        outcome
    }

    fn try_rotate(board: &mut Board, target: Option<BoardPosition>, percent: f32) -> RotateOutcome {
        let Some(target) = target else {
            return RotateOutcome::Rejected(RotateRejection::NoSelection);
        };
        let Some(zone) = board.zone_at(target) else {
            return RotateOutcome::Rejected(RotateRejection::NotAZone);
        };
        let Some(pair) = board.zone_pair_mut(zone.pair) else {
            return RotateOutcome::Rejected(RotateRejection::NotAZone);
        };

        let angle = rotation_angle(percent);
        match pair.phase_all(zone.slot, angle) {
            Ok(()) => RotateOutcome::Rotated {
                position: target,
                angle,
            },
            Err(_) => RotateOutcome::Rejected(RotateRejection::AlreadyMeasured),
        }
    }

    fn measure_at(ctx: &mut MoveContext<'_>, pos: BoardPosition) -> Option<ZoneMeasurement> {
        let zone = ctx.board.zone_at(pos)?;
        let pair = ctx.board.zone_pair_mut(zone.pair)?;
        let newly_measured = pair.measure(zone.slot, ctx.rng);
        Some(ZoneMeasurement { zone, newly_measured })
    }

    fn collect_at(ctx: &mut MoveContext<'_>, pos: BoardPosition) -> Option<PickupApplied> {
        let id = ctx.board.grid().get(pos)?.pickup()?;
        let pickup = ctx.board.pickup_mut(id)?;
        PickupResolver::apply(pickup, ctx.player)
    }
}

/// Rotation angle for a host-supplied fraction of a half turn.
#[must_use]
pub fn rotation_angle(percent: f32) -> f64 {
    let percent = if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 1.0) };
    f64::from(percent) * PI
}
