//! Tiles.
//!
//! A tile is a tagged variant: its `kind` says what it is, and the optional
//! payloads link it into the board's zone and pickup arenas. Behaviour is
//! chosen by matching on `kind`, never by probing for attached components.

use serde::{Deserialize, Serialize};

use crate::player::PickupId;
use crate::quantum::ZoneRef;

/// Height assigned to `Blank` placeholders in authored layouts.
///
/// Never matched by adjacency.
pub const BLANK_HEIGHT: f32 = -1.0;

/// What a tile is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TileKind {
    /// Open space.
    Empty,
    /// The player's starting tile.
    Start,
    /// A hole in an authored layout. Cannot be entered.
    Blank,
    /// Terminal hazard. Moves onto it are refused.
    BlackHole,
    /// Entangled hazard resolved by measurement.
    QuantumZone,
    /// The destination. Reaching it wins.
    Goal,
}

impl TileKind {
    /// Every kind, in declaration order.
    pub const ALL: [TileKind; 6] = [
        TileKind::Empty,
        TileKind::Start,
        TileKind::Blank,
        TileKind::BlackHole,
        TileKind::QuantumZone,
        TileKind::Goal,
    ];

    /// Tiles the player is never allowed to move onto.
    #[must_use]
    pub const fn is_terminal_hazard(self) -> bool {
        matches!(self, TileKind::BlackHole)
    }
}

impl std::fmt::Display for TileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TileKind::Empty => "Empty",
            TileKind::Start => "Start",
            TileKind::Blank => "Blank",
            TileKind::BlackHole => "BlackHole",
            TileKind::QuantumZone => "QuantumZone",
            TileKind::Goal => "Goal",
        };
        f.write_str(name)
    }
}

/// Height value of a generated cell: its row, plus half a row on odd columns.
///
/// Odd columns of the offset hex grid sit half a row higher than even ones;
/// this scalar is all adjacency needs to tell upper from lower diagonals.
#[must_use]
pub fn height_value(col: usize, row: usize) -> f32 {
    row as f32 + if col % 2 == 0 { 0.0 } else { 0.5 }
}

/// One cell of the board.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    kind: TileKind,
    height: f32,
    zone: Option<ZoneRef>,
    pickup: Option<PickupId>,
}

impl Tile {
    /// Create a tile with no payloads.
    #[must_use]
    pub fn new(kind: TileKind, height: f32) -> Self {
        Self {
            kind,
            height,
            zone: None,
            pickup: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TileKind {
        self.kind
    }

    /// Adjacency height value.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Zone pair link, present on every `QuantumZone` of a built board.
    #[must_use]
    pub fn zone(&self) -> Option<ZoneRef> {
        self.zone
    }

    /// Item lying on this tile, if any.
    #[must_use]
    pub fn pickup(&self) -> Option<PickupId> {
        self.pickup
    }

    pub(crate) fn set_kind(&mut self, kind: TileKind) {
        self.kind = kind;
        if kind != TileKind::QuantumZone {
            self.zone = None;
        }
    }

    pub(crate) fn set_zone(&mut self, zone: ZoneRef) {
        self.zone = Some(zone);
    }

    pub(crate) fn set_pickup(&mut self, pickup: PickupId) {
        self.pickup = Some(pickup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_value() {
        assert_eq!(height_value(0, 0), 0.0);
        assert_eq!(height_value(1, 0), 0.5);
        assert_eq!(height_value(2, 3), 3.0);
        assert_eq!(height_value(3, 2), 2.5);
    }

    #[test]
    fn test_terminal_hazard() {
        for kind in TileKind::ALL {
            assert_eq!(kind.is_terminal_hazard(), kind == TileKind::BlackHole);
        }
    }

    #[test]
    fn test_set_kind_drops_zone_link() {
        use crate::quantum::{PairId, ZoneSlot};

        let mut tile = Tile::new(TileKind::QuantumZone, 1.5);
        tile.set_zone(ZoneRef::new(PairId::new(0), ZoneSlot::First));
        assert!(tile.zone().is_some());

        tile.set_kind(TileKind::Goal);
        assert_eq!(tile.kind(), TileKind::Goal);
        assert_eq!(tile.height(), 1.5);
        assert!(tile.zone().is_none());
    }

    #[test]
    fn test_kind_serde_names() {
        let json = serde_json::to_string(&TileKind::BlackHole).unwrap();
        assert_eq!(json, "\"BlackHole\"");
        assert_eq!(TileKind::QuantumZone.to_string(), "QuantumZone");
    }
}
