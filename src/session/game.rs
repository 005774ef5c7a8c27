//! The host-facing game session.
//!
//! ## GameSession
//!
//! One session per game instance, owning:
//! - The board (grid, zone pairs, pickups)
//! - Player state and the current selection
//! - The measurement RNG stream
//! - Deferred effects and the action history
//!
//! Hosts drive it with discrete calls (`select_tile`, `confirm_move`,
//! `activate_probe`, `request_phase_rotate`) and call `tick()` once per
//! frame to settle deferred effects. Terminal conditions are reported by
//! `status()`; ending the game is up to the host.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use super::effects::{PendingEffect, PendingEffects, TickEvent};
use crate::board::{Board, BoardGenerator, Tile, TileKind};
use crate::core::{ActionRecord, BoardError, BoardPosition, GameConfig, GameRng, HostAction};
use crate::movement::{
    AdjacencyResolver, Direction, MoveContext, MoveOutcome, MovementEngine, ProbeOutcome,
    RotateOutcome,
};
use crate::player::PlayerState;
use crate::quantum::{QuantumZonePair, ZoneRef};

/// Health lost when the player stands on a zone that resolves unsafe.
pub const ZONE_DAMAGE: u32 = 1;

/// Whether the game is still running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    InProgress,
    /// The player stands on a goal tile.
    Won,
    /// Health reached zero.
    Dead,
}

impl SessionStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionStatus::InProgress)
    }
}

/// Live outcome probabilities of a zone.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneProbabilities {
    pub safe: f64,
    pub danger: f64,
    pub measured: bool,
}

/// A running game.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    player: PlayerState,
    selection: Option<BoardPosition>,
    rng: GameRng,
    pending: PendingEffects,
    history: Vector<ActionRecord>,
    tick: u64,
    sequence: u64,
}

impl GameSession {
    /// Build the board and place the player on its start tile.
    ///
    /// Pickups of an authored layout become collectable on the first tick.
    pub fn new(config: &GameConfig) -> Result<Self, BoardError> {
        let board = BoardGenerator::generate(config)?;
        let player = PlayerState::new(board.start(), config.limits);

        let mut pending = PendingEffects::new();
        for pickup in board.dormant_pickups() {
            pending.push(PendingEffect::ActivatePickup { pickup });
        }

        Ok(Self {
            board,
            player,
            selection: None,
            rng: GameRng::new(config.seed).for_context(GameRng::MEASURE_STREAM),
            pending,
            history: Vector::new(),
            tick: 0,
            sequence: 0,
        })
    }

    // === Host actions ===

    /// Select a tile, replacing any previous selection.
    ///
    /// An off-board position is an integration error; the previous selection
    /// is kept.
    pub fn select_tile(&mut self, pos: BoardPosition) -> Result<(), BoardError> {
        self.record(HostAction::SelectTile(pos));
        self.board.tile(pos)?;
        self.selection = Some(pos);
        debug!(%pos, "tile selected");
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Move onto the selected tile.
    pub fn confirm_move(&mut self) -> MoveOutcome {
        self.record(HostAction::ConfirmMove);
        let mut ctx = MoveContext::new(&mut self.board, &mut self.player, &mut self.rng);
        let outcome = MovementEngine::attempt_move(&mut ctx, self.selection);

        if let MoveOutcome::Moved(report) = outcome {
            self.selection = None;
            if let Some(measurement) = report.zone {
                self.pending.push(PendingEffect::ZoneFeedback {
                    zone: measurement.zone,
                    position: report.to,
                    damages_player: true,
                });
            }
            if report.reached_goal {
                info!(position = %report.to, fuel = self.player.fuel(), "goal reached");
            }
        }
        outcome
    }

    /// Spend a probe on the selected zone.
    pub fn activate_probe(&mut self) -> ProbeOutcome {
        self.record(HostAction::ActivateProbe);
        let mut ctx = MoveContext::new(&mut self.board, &mut self.player, &mut self.rng);
        let outcome = MovementEngine::activate_probe(&mut ctx, self.selection);

        if let ProbeOutcome::Probed { position, measurement } = outcome {
            self.selection = None;
            self.pending.push(PendingEffect::ZoneFeedback {
                zone: measurement.zone,
                position,
                damages_player: false,
            });
        }
        outcome
    }

    /// Phase-rotate the selected zone by `percent * π`. Keeps the selection.
    pub fn request_phase_rotate(&mut self, percent: f32) -> RotateOutcome {
        self.record(HostAction::PhaseRotate { percent });
        MovementEngine::request_phase_rotate(&mut self.board, self.selection, percent)
    }

    /// Advance one host frame and settle everything deferred so far.
    pub fn tick(&mut self) -> SmallVec<[TickEvent; 4]> {
        self.tick += 1;
        let mut events = SmallVec::new();

        for effect in self.pending.take() {
            match effect {
                PendingEffect::ZoneFeedback {
                    zone,
                    position,
                    damages_player,
                } => self.settle_zone(zone, position, damages_player, &mut events),
                PendingEffect::ActivatePickup { pickup } => {
                    if let Some(item) = self.board.pickup_mut(pickup) {
                        if item.activate() {
                            events.push(TickEvent::PickupActivated {
                                position: item.position(),
                            });
                        }
                    }
                }
            }
        }

        if !events.is_empty() {
            debug!(tick = self.tick, ?events, "tick settled");
        }
        events
    }

    fn settle_zone(
        &mut self,
        zone: ZoneRef,
        position: BoardPosition,
        damages_player: bool,
        events: &mut SmallVec<[TickEvent; 4]>,
    ) {
        let Some(pair) = self.board.zone_pair(zone.pair) else {
            return;
        };
        let safe = pair.is_safe(zone.slot);
        events.push(TickEvent::ZoneRevealed { position, safe });

        if safe || !damages_player || self.player.is_dead() {
            return;
        }
        self.player.damage(ZONE_DAMAGE);
        events.push(TickEvent::PlayerDamaged {
            position,
            health: self.player.health(),
        });
        if self.player.is_dead() {
            info!(%position, "player died");
            events.push(TickEvent::PlayerDied);
        }
    }

    fn record(&mut self, action: HostAction) {
        self.history
            .push_back(ActionRecord::new(action, self.tick, self.sequence));
        self.sequence += 1;
    }

    // === Queries ===

    #[must_use]
    pub fn current_player_state(&self) -> &PlayerState {
        &self.player
    }

    #[must_use]
    pub fn selection(&self) -> Option<BoardPosition> {
        self.selection
    }

    pub fn tile_at(&self, pos: BoardPosition) -> Result<&Tile, BoardError> {
        self.board.tile(pos)
    }

    /// Whether the zone at `pos` has collapsed.
    pub fn is_zone_measured(&self, pos: BoardPosition) -> Result<bool, BoardError> {
        Ok(self.zone(pos)?.1.is_measured())
    }

    /// Whether the zone at `pos` is certainly safe.
    pub fn is_zone_safe(&self, pos: BoardPosition) -> Result<bool, BoardError> {
        let (zone, pair) = self.zone(pos)?;
        Ok(pair.is_safe(zone.slot))
    }

    pub fn zone_probabilities(&self, pos: BoardPosition) -> Result<ZoneProbabilities, BoardError> {
        let (zone, pair) = self.zone(pos)?;
        Ok(ZoneProbabilities {
            safe: pair.safe_probability(zone.slot),
            danger: pair.danger_probability(zone.slot),
            measured: pair.is_measured(),
        })
    }

    fn zone(&self, pos: BoardPosition) -> Result<(ZoneRef, &QuantumZonePair), BoardError> {
        let zone = self.board.tile(pos)?.zone().ok_or(BoardError::NotAZone(pos))?;
        let pair = self
            .board
            .zone_pair(zone.pair)
            .ok_or(BoardError::ZoneMissingPartner(pos))?;
        Ok((zone, pair))
    }

    /// Cells the player can step to right now, ignoring fuel and hazards.
    #[must_use]
    pub fn reachable(&self) -> SmallVec<[(Direction, BoardPosition); 6]> {
        AdjacencyResolver::neighbors(self.board.grid(), self.player.position())
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        if self.player.is_dead() {
            return SessionStatus::Dead;
        }
        match self.board.grid().get(self.player.position()) {
            Some(tile) if tile.kind() == TileKind::Goal => SessionStatus::Won,
            _ => SessionStatus::InProgress,
        }
    }

    /// Every host action received, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Ticks elapsed.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.pending_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ZonePairConfig;
    use crate::player::PickupKind;

    fn pos(col: i32, row: i32) -> BoardPosition {
        BoardPosition::new(col, row)
    }

    fn open_config() -> GameConfig {
        GameConfig::generated(4, 4)
            .with_palette_entry(1.0, TileKind::Empty)
            .with_seed(9)
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new(&open_config()).unwrap();
        let player = session.current_player_state();

        assert_eq!(player.position(), pos(0, 0));
        assert_eq!(player.fuel(), 20);
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.selection(), None);
        assert_eq!(session.pending_count(), 0);
    }

    #[test]
    fn test_select_off_board_keeps_selection() {
        let mut session = GameSession::new(&open_config()).unwrap();
        session.select_tile(pos(0, 1)).unwrap();

        assert_eq!(session.select_tile(pos(9, 9)), Err(BoardError::NotFound(pos(9, 9))));
        assert_eq!(session.selection(), Some(pos(0, 1)));
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_selection_lifecycle() {
        let mut session = GameSession::new(&open_config()).unwrap();

        session.select_tile(pos(3, 3)).unwrap();
        assert!(!session.confirm_move().is_moved());
        assert_eq!(session.selection(), Some(pos(3, 3)));

        session.select_tile(pos(0, 1)).unwrap();
        assert!(session.confirm_move().is_moved());
        assert_eq!(session.selection(), None);
        assert_eq!(session.current_player_state().position(), pos(0, 1));
    }

    #[test]
    fn test_history_sequence() {
        let mut session = GameSession::new(&open_config()).unwrap();
        session.select_tile(pos(0, 1)).unwrap();
        session.tick();
        session.confirm_move();

        let records: Vec<_> = session.history().iter().copied().collect();
        assert_eq!(records[0], ActionRecord::new(HostAction::SelectTile(pos(0, 1)), 0, 0));
        assert_eq!(records[1], ActionRecord::new(HostAction::ConfirmMove, 1, 1));
    }

    #[test]
    fn test_authored_pickup_activates_on_first_tick() {
        use TileKind::*;
        let config = GameConfig::authored(vec![vec![Start, Empty, Goal]])
            .with_pickup(pos(1, 0), PickupKind::Probe, 1);
        let mut session = GameSession::new(&config).unwrap();
        assert_eq!(session.pending_count(), 1);

        let events = session.tick();
        assert_eq!(events.as_slice(), &[TickEvent::PickupActivated { position: pos(1, 0) }]);
        assert!(session.tick().is_empty());
    }

    #[test]
    fn test_zone_queries() {
        use TileKind::*;
        let config = GameConfig::authored(vec![vec![Start, QuantumZone, QuantumZone]])
            .with_zone_pair(ZonePairConfig::new(pos(1, 0), pos(2, 0)));
        let session = GameSession::new(&config).unwrap();

        assert_eq!(session.is_zone_measured(pos(1, 0)), Ok(false));
        assert_eq!(session.is_zone_safe(pos(2, 0)), Ok(true));
        assert_eq!(session.is_zone_measured(pos(0, 0)), Err(BoardError::NotAZone(pos(0, 0))));
        assert_eq!(session.is_zone_safe(pos(5, 0)), Err(BoardError::NotFound(pos(5, 0))));

        let probs = session.zone_probabilities(pos(1, 0)).unwrap();
        assert!((probs.safe - 1.0).abs() < 1e-9);
        assert!(!probs.measured);
    }

    #[test]
    fn test_status_won() {
        use TileKind::*;
        let mut session = GameSession::new(&GameConfig::authored(vec![vec![Start, Goal]])).unwrap();
        session.select_tile(pos(1, 0)).unwrap();
        assert!(session.confirm_move().is_moved());
        assert_eq!(session.status(), SessionStatus::Won);
        assert!(session.status().is_terminal());
    }
}
