//! Game configuration types.
//!
//! Hosts configure a session at startup by providing a `GameConfig`:
//! - `BoardSource`: generate a random board or import an authored layout
//! - `PaletteEntry`: weighted tile kinds for random generation
//! - `ZonePairConfig`: which two quantum zones are entangled
//! - `PickupConfig`: items lying on tiles
//! - `ResourceLimits`: fuel, probe and health caps
//!
//! Everything derives serde so a host can load levels from whatever format
//! it likes. The engine itself never touches files.

use serde::{Deserialize, Serialize};

use super::BoardPosition;
use crate::board::TileKind;
use crate::player::PickupKind;
use crate::quantum::ZoneArity;

/// One weighted entry in the random-generation palette.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Relative weight. Normalized against the whole palette before sampling.
    pub weight: f32,
    /// Tile kind produced when this entry is drawn.
    pub kind: TileKind,
}

impl PaletteEntry {
    /// Create a palette entry.
    #[must_use]
    pub const fn new(weight: f32, kind: TileKind) -> Self {
        Self { weight, kind }
    }
}

/// Where the board layout comes from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BoardSource {
    /// Weighted-random generation of a `cols` x `rows` board.
    Generated { cols: usize, rows: usize },

    /// Import an existing layout, indexed `rows[row][col]` with row 0 at the
    /// bottom. Must contain exactly one `Start` tile.
    Authored { rows: Vec<Vec<TileKind>> },
}

/// Entanglement link between two quantum zone tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZonePairConfig {
    pub first: BoardPosition,
    pub second: BoardPosition,
    pub arity: ZoneArity,
}

impl ZonePairConfig {
    /// Link two zones with the default single-qubit arity.
    #[must_use]
    pub fn new(first: BoardPosition, second: BoardPosition) -> Self {
        Self {
            first,
            second,
            arity: ZoneArity::Single,
        }
    }

    /// Set the arity of the pair.
    #[must_use]
    pub fn with_arity(mut self, arity: ZoneArity) -> Self {
        self.arity = arity;
        self
    }
}

/// An item placed on a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupConfig {
    pub position: BoardPosition,
    pub kind: PickupKind,
    pub amount: u32,
}

/// Upper bounds for the player's resources.
///
/// The player starts every session with fuel, probes and health at these caps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLimits {
    pub max_fuel: u32,
    pub max_probes: u32,
    pub max_health: u32,
}

impl ResourceLimits {
    /// Create resource limits.
    #[must_use]
    pub const fn new(max_fuel: u32, max_probes: u32, max_health: u32) -> Self {
        Self {
            max_fuel,
            max_probes,
            max_health,
        }
    }
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self::new(20, 3, 3)
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board layout source.
    pub source: BoardSource,

    /// Weighted palette for `BoardSource::Generated`. Ignored for authored boards.
    #[serde(default)]
    pub palette: Vec<PaletteEntry>,

    /// Goal position for generated boards. Clamped onto the board.
    pub goal: BoardPosition,

    /// Player start for generated boards. Authored boards use their `Start` tile.
    #[serde(default)]
    pub start: BoardPosition,

    /// Entangled zone links.
    #[serde(default)]
    pub zone_pairs: Vec<ZonePairConfig>,

    /// Items placed on tiles.
    #[serde(default)]
    pub pickups: Vec<PickupConfig>,

    /// Resource caps.
    #[serde(default)]
    pub limits: ResourceLimits,

    /// Root seed for every random stream of the session.
    #[serde(default)]
    pub seed: u64,
}

impl GameConfig {
    /// Configure a randomly generated `cols` x `rows` board.
    ///
    /// The goal defaults to the far corner and the start to `(0, 0)`.
    #[must_use]
    pub fn generated(cols: usize, rows: usize) -> Self {
        Self::with_source(BoardSource::Generated { cols, rows })
    }

    /// Configure an authored layout, indexed `rows[row][col]`.
    #[must_use]
    pub fn authored(rows: Vec<Vec<TileKind>>) -> Self {
        Self::with_source(BoardSource::Authored { rows })
    }

    fn with_source(source: BoardSource) -> Self {
        Self {
            source,
            palette: Vec::new(),
            goal: BoardPosition::new(i32::MAX, i32::MAX),
            start: BoardPosition::default(),
            zone_pairs: Vec::new(),
            pickups: Vec::new(),
            limits: ResourceLimits::default(),
            seed: 0,
        }
    }

    /// Add a weighted palette entry.
    #[must_use]
    pub fn with_palette_entry(mut self, weight: f32, kind: TileKind) -> Self {
        self.palette.push(PaletteEntry::new(weight, kind));
        self
    }

    /// Set the goal position.
    #[must_use]
    pub fn with_goal(mut self, goal: BoardPosition) -> Self {
        self.goal = goal;
        self
    }

    /// Set the start position.
    #[must_use]
    pub fn with_start(mut self, start: BoardPosition) -> Self {
        self.start = start;
        self
    }

    /// Link two quantum zones.
    #[must_use]
    pub fn with_zone_pair(mut self, pair: ZonePairConfig) -> Self {
        self.zone_pairs.push(pair);
        self
    }

    /// Place an item on a tile.
    #[must_use]
    pub fn with_pickup(mut self, position: BoardPosition, kind: PickupKind, amount: u32) -> Self {
        self.pickups.push(PickupConfig { position, kind, amount });
        self
    }

    /// Set resource caps.
    #[must_use]
    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the root seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Whether this configuration imports an authored layout.
    #[must_use]
    pub fn is_authored(&self) -> bool {
        matches!(self.source, BoardSource::Authored { .. })
    }
}
