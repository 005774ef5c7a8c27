//! Hex grid storage.
//!
//! The grid is a rectangular `rows[row][col]` matrix of tiles representing
//! an offset hex tiling. It is fixed-size once built and every row has the
//! same number of columns.

use rustc_hash::FxHashMap;
use tracing::error;

use super::{Tile, TileKind};
use crate::core::{BoardError, BoardPosition};

/// Rectangular tile matrix of an offset hex board.
#[derive(Clone, Debug, PartialEq)]
pub struct HexGrid {
    rows: Vec<Vec<Tile>>,
    cols: usize,
}

impl HexGrid {
    /// Build a grid from rows of tiles, row 0 at the bottom.
    ///
    /// Fails on an empty grid or rows of unequal length.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, BoardError> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || cols == 0 {
            return Err(BoardError::InvalidDimensions {
                cols,
                rows: rows.len(),
            });
        }

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(BoardError::RaggedLayout {
                row,
                expected: cols,
                found,
            });
        }

        Ok(Self { rows, cols })
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Whether `pos` lies on the grid.
    #[must_use]
    pub fn contains(&self, pos: BoardPosition) -> bool {
        pos.in_bounds(self.cols, self.rows.len())
    }

    /// Tile at `pos`, or `None` off the grid.
    #[must_use]
    pub fn get(&self, pos: BoardPosition) -> Option<&Tile> {
        let (col, row) = pos.indices()?;
        self.rows.get(row)?.get(col)
    }

    pub(crate) fn get_mut(&mut self, pos: BoardPosition) -> Option<&mut Tile> {
        let (col, row) = pos.indices()?;
        self.rows.get_mut(row)?.get_mut(col)
    }

    /// Tile at `pos`, failing loudly when the host asks for a cell that
    /// does not exist.
    pub fn tile(&self, pos: BoardPosition) -> Result<&Tile, BoardError> {
        self.get(pos).ok_or_else(|| {
            error!(%pos, cols = self.cols, rows = self.rows.len(), "tile lookup off the board");
            BoardError::NotFound(pos)
        })
    }

    /// Height value at `pos`.
    #[must_use]
    pub fn height(&self, pos: BoardPosition) -> Option<f32> {
        self.get(pos).map(Tile::height)
    }

    /// Change the kind of the tile at `pos`, keeping its height value.
    pub(crate) fn replace_kind(&mut self, pos: BoardPosition, kind: TileKind) -> Result<(), BoardError> {
        let tile = self.get_mut(pos).ok_or(BoardError::NotFound(pos))?;
        tile.set_kind(kind);
        Ok(())
    }

    /// All positions in row-major order, bottom row first.
    pub fn positions(&self) -> impl Iterator<Item = BoardPosition> + '_ {
        let cols = self.cols;
        (0..self.rows.len()).flat_map(move |row| {
            (0..cols).map(move |col| BoardPosition::new(col as i32, row as i32))
        })
    }

    /// `(position, tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (BoardPosition, &Tile)> {
        self.rows.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .map(move |(col, tile)| (BoardPosition::new(col as i32, row as i32), tile))
        })
    }

    /// Number of tiles of each kind present on the grid.
    #[must_use]
    pub fn kind_counts(&self) -> FxHashMap<TileKind, usize> {
        let mut counts = FxHashMap::default();
        for (_, tile) in self.iter() {
            *counts.entry(tile.kind()).or_insert(0) += 1;
        }
        counts
    }
}
