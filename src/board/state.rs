//! The built board: grid plus the zone and pickup arenas.

use rustc_hash::FxHashMap;

use super::{HexGrid, Tile, TileKind};
use crate::core::{BoardError, BoardPosition};
use crate::player::{Pickup, PickupId};
use crate::quantum::{PairId, QuantumZonePair, ZoneRef};

/// A fully constructed board.
///
/// Tiles reference zone pairs and pickups by index; the board owns the
/// arenas those indices point into.
#[derive(Clone, Debug)]
pub struct Board {
    grid: HexGrid,
    zones: Vec<QuantumZonePair>,
    pickups: Vec<Pickup>,
    start: BoardPosition,
    goal: Option<BoardPosition>,
}

impl Board {
    pub(crate) fn new(
        grid: HexGrid,
        zones: Vec<QuantumZonePair>,
        pickups: Vec<Pickup>,
        start: BoardPosition,
        goal: Option<BoardPosition>,
    ) -> Self {
        Self {
            grid,
            zones,
            pickups,
            start,
            goal,
        }
    }

    /// Tile storage.
    #[must_use]
    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    /// Player starting position.
    #[must_use]
    pub fn start(&self) -> BoardPosition {
        self.start
    }

    /// Goal position, if the board has a goal tile.
    #[must_use]
    pub fn goal(&self) -> Option<BoardPosition> {
        self.goal
    }

    /// Tile at `pos`, or `NotFound` off the board.
    pub fn tile(&self, pos: BoardPosition) -> Result<&Tile, BoardError> {
        self.grid.tile(pos)
    }

    /// Zone link of the tile at `pos`, if it is a quantum zone.
    #[must_use]
    pub fn zone_at(&self, pos: BoardPosition) -> Option<ZoneRef> {
        self.grid.get(pos).and_then(Tile::zone)
    }

    /// All zone pairs, indexed by `PairId`.
    #[must_use]
    pub fn zone_pairs(&self) -> &[QuantumZonePair] {
        &self.zones
    }

    #[must_use]
    pub fn zone_pair(&self, id: PairId) -> Option<&QuantumZonePair> {
        self.zones.get(id.index())
    }

    pub fn zone_pair_mut(&mut self, id: PairId) -> Option<&mut QuantumZonePair> {
        self.zones.get_mut(id.index())
    }

    /// All pickups, indexed by `PickupId`.
    #[must_use]
    pub fn pickups(&self) -> &[Pickup] {
        &self.pickups
    }

    #[must_use]
    pub fn pickup(&self, id: PickupId) -> Option<&Pickup> {
        self.pickups.get(id.index())
    }

    pub fn pickup_mut(&mut self, id: PickupId) -> Option<&mut Pickup> {
        self.pickups.get_mut(id.index())
    }

    /// Pickups still waiting for activation.
    pub fn dormant_pickups(&self) -> impl Iterator<Item = PickupId> + '_ {
        self.pickups
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_active())
            .filter_map(|(i, _)| u32::try_from(i).ok().map(PickupId::new))
    }

    /// Number of tiles of each kind.
    #[must_use]
    pub fn kind_counts(&self) -> FxHashMap<TileKind, usize> {
        self.grid.kind_counts()
    }
}
