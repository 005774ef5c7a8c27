//! Board construction.
//!
//! Two modes, selected by [`BoardSource`]:
//!
//! - **Generated**: every cell is drawn from the weighted palette, the
//!   start cell becomes `Start`, and the goal is clamped onto the board and
//!   kept off the start. Quantum zones the palette produces are paired in
//!   row-major order; an odd one out is demoted to `Empty`.
//! - **Authored**: dimensions and kinds come from the layout. `Blank` cells
//!   get the sentinel height, the single `Start` tile is the start, and
//!   every zone must be linked by the configuration.
//!
//! Pickups on authored boards start dormant; the session activates them on
//! its first tick.

use tracing::{debug, error, info, warn};

use super::{height_value, Board, HexGrid, Tile, TileKind, TilePalette, BLANK_HEIGHT};
use crate::core::{
    BoardError, BoardPosition, BoardSource, GameConfig, GameRng, PickupConfig, ZonePairConfig,
};
use crate::player::{Pickup, PickupId};
use crate::quantum::{PairId, QuantumZonePair, ZoneArity, ZoneRef, ZoneSlot};

/// Builds boards from configuration.
pub struct BoardGenerator;

impl BoardGenerator {
    /// Build the board described by `config`.
    ///
    /// Every failure is a fatal configuration error and is logged.
    pub fn generate(config: &GameConfig) -> Result<Board, BoardError> {
        let result = match &config.source {
            BoardSource::Generated { cols, rows } => Self::generate_random(config, *cols, *rows),
            BoardSource::Authored { rows } => Self::import_layout(config, rows),
        };

        match &result {
            Ok(board) => info!(
                cols = board.grid().cols(),
                rows = board.grid().rows(),
                zone_pairs = board.zone_pairs().len(),
                pickups = board.pickups().len(),
                "board built"
            ),
            Err(err) => error!(%err, "board configuration rejected"),
        }
        result
    }

    fn generate_random(config: &GameConfig, cols: usize, rows: usize) -> Result<Board, BoardError> {
        if cols == 0 || rows == 0 {
            return Err(BoardError::InvalidDimensions { cols, rows });
        }
        if cols.saturating_mul(rows) < 2 {
            return Err(BoardError::TooSmall);
        }
        let start = config.start;
        if !start.in_bounds(cols, rows) {
            return Err(BoardError::NotFound(start));
        }

        let palette = TilePalette::new(&config.palette)?;
        let mut rng = GameRng::new(config.seed).for_context(GameRng::BOARD_STREAM);

        let mut tiles = Vec::with_capacity(rows);
        for row in 0..rows {
            let mut line = Vec::with_capacity(cols);
            for col in 0..cols {
                line.push(Tile::new(palette.sample(&mut rng), height_value(col, row)));
            }
            tiles.push(line);
        }
        let mut grid = HexGrid::from_rows(tiles)?;
        log_proportions(&grid);

        grid.replace_kind(start, TileKind::Start)?;
        let goal = place_goal(config.goal, start, cols, rows)?;
        grid.replace_kind(goal, TileKind::Goal)?;

        let mut zones = Vec::new();
        link_configured_pairs(&mut grid, &mut zones, &config.zone_pairs)?;
        pair_sampled_zones(&mut grid, &mut zones)?;

        let pickups = place_pickups(&mut grid, &config.pickups, false)?;
        Ok(Board::new(grid, zones, pickups, start, Some(goal)))
    }

    fn import_layout(config: &GameConfig, layout: &[Vec<TileKind>]) -> Result<Board, BoardError> {
        let tiles: Vec<Vec<Tile>> = layout
            .iter()
            .enumerate()
            .map(|(row, kinds)| {
                kinds
                    .iter()
                    .enumerate()
                    .map(|(col, &kind)| {
                        let height = if kind == TileKind::Blank {
                            BLANK_HEIGHT
                        } else {
                            height_value(col, row)
                        };
                        Tile::new(kind, height)
                    })
                    .collect()
            })
            .collect();
        let mut grid = HexGrid::from_rows(tiles)?;

        let starts: Vec<BoardPosition> = grid
            .iter()
            .filter(|(_, t)| t.kind() == TileKind::Start)
            .map(|(p, _)| p)
            .collect();
        let start = match starts.as_slice() {
            [only] => *only,
            [] => return Err(BoardError::MissingStart),
            many => return Err(BoardError::MultipleStarts(many.len())),
        };
        let goal = grid
            .iter()
            .find(|(_, t)| t.kind() == TileKind::Goal)
            .map(|(p, _)| p);

        let mut zones = Vec::new();
        link_configured_pairs(&mut grid, &mut zones, &config.zone_pairs)?;
        if let Some((pos, _)) = grid
            .iter()
            .find(|(_, t)| t.kind() == TileKind::QuantumZone && t.zone().is_none())
        {
            return Err(BoardError::ZoneMissingPartner(pos));
        }

        let pickups = place_pickups(&mut grid, &config.pickups, true)?;
        Ok(Board::new(grid, zones, pickups, start, goal))
    }
}

/// Resolve the goal cell for a generated board.
///
/// The requested goal is clamped onto the board. If it lands on the start it
/// moves to the far corner, or to `(0, 0)` when the start is the far corner.
pub fn place_goal(
    requested: BoardPosition,
    start: BoardPosition,
    cols: usize,
    rows: usize,
) -> Result<BoardPosition, BoardError> {
    let mut goal = requested.clamped(cols, rows);
    if goal == start {
        let far = BoardPosition::new(cols as i32 - 1, rows as i32 - 1);
        goal = if far == start { BoardPosition::new(0, 0) } else { far };
    }

    if !goal.in_bounds(cols, rows) {
        return Err(BoardError::NotFound(goal));
    }
    if goal == start {
        return Err(BoardError::TooSmall);
    }
    Ok(goal)
}

fn link(
    grid: &mut HexGrid,
    zones: &mut Vec<QuantumZonePair>,
    first: BoardPosition,
    second: BoardPosition,
    arity: ZoneArity,
) -> Result<(), BoardError> {
    let id = u32::try_from(zones.len())
        .map(PairId::new)
        .map_err(|_| BoardError::TooManyZonePairs(zones.len() + 1))?;
    zones.push(QuantumZonePair::new(arity, first, second));
    for (pos, slot) in [(first, ZoneSlot::First), (second, ZoneSlot::Second)] {
        if let Some(tile) = grid.get_mut(pos) {
            tile.set_zone(ZoneRef::new(id, slot));
        }
    }
    Ok(())
}

fn link_configured_pairs(
    grid: &mut HexGrid,
    zones: &mut Vec<QuantumZonePair>,
    pairs: &[ZonePairConfig],
) -> Result<(), BoardError> {
    for pair in pairs {
        if pair.first == pair.second {
            return Err(BoardError::SelfPairedZone(pair.first));
        }
        for pos in [pair.first, pair.second] {
            let tile = grid.get(pos).ok_or(BoardError::NotFound(pos))?;
            if tile.kind() != TileKind::QuantumZone {
                return Err(BoardError::NotAZone(pos));
            }
            if tile.zone().is_some() {
                return Err(BoardError::ZoneAlreadyPaired(pos));
            }
        }
        link(grid, zones, pair.first, pair.second, pair.arity)?;
    }
    Ok(())
}

fn pair_sampled_zones(grid: &mut HexGrid, zones: &mut Vec<QuantumZonePair>) -> Result<(), BoardError> {
    let unpaired: Vec<BoardPosition> = grid
        .iter()
        .filter(|(_, t)| t.kind() == TileKind::QuantumZone && t.zone().is_none())
        .map(|(p, _)| p)
        .collect();

    let mut chunks = unpaired.chunks_exact(2);
    for chunk in &mut chunks {
        link(grid, zones, chunk[0], chunk[1], ZoneArity::Single)?;
    }
    if let [leftover] = chunks.remainder() {
        warn!(position = %leftover, "odd sampled quantum zone demoted to empty");
        grid.replace_kind(*leftover, TileKind::Empty)?;
    }
    Ok(())
}

/// Place configured items.
///
/// A generated board clears a `BlackHole` under an item to `Empty`, the same
/// way the start and goal overwrite sampled tiles. An authored layout must
/// not put an item on a `BlackHole` or `Blank` tile. Authored items start
/// dormant.
fn place_pickups(
    grid: &mut HexGrid,
    configs: &[PickupConfig],
    authored: bool,
) -> Result<Vec<Pickup>, BoardError> {
    let mut pickups = Vec::with_capacity(configs.len());
    for config in configs {
        let pos = config.position;
        let tile = grid.get_mut(pos).ok_or(BoardError::NotFound(pos))?;
        if tile.pickup().is_some() {
            return Err(BoardError::PickupOverlap(pos));
        }
        if matches!(tile.kind(), TileKind::BlackHole | TileKind::Blank) {
            if authored {
                return Err(BoardError::UnreachablePickup(pos));
            }
            debug!(position = %pos, "hazard under pickup cleared");
            tile.set_kind(TileKind::Empty);
        }

        let id = u32::try_from(pickups.len())
            .map(PickupId::new)
            .map_err(|_| BoardError::TooManyPickups(configs.len()))?;
        tile.set_pickup(id);
        pickups.push(if authored {
            Pickup::dormant(config.kind, config.amount, pos)
        } else {
            Pickup::new(config.kind, config.amount, pos)
        });
    }
    Ok(pickups)
}

fn log_proportions(grid: &HexGrid) {
    let total = (grid.cols() * grid.rows()) as f32;
    let mut counts: Vec<_> = grid.kind_counts().into_iter().collect();
    counts.sort();
    for (kind, count) in counts {
        debug!(%kind, count, proportion = count as f32 / total, "sampled tile proportion");
    }
}
