//! Weighted tile palette.
//!
//! ## Normalization
//!
//! If the weights sum to (about) zero every entry gets `1/n`; otherwise
//! each weight is divided by the sum. A palette already summing to 1 within
//! [`WEIGHT_EPSILON`] is left as is, so normalizing twice changes nothing.
//!
//! ## Sampling
//!
//! A cumulative table `T[0] = 0, T[i] = T[i-1] + w[i-1]` is built once. A
//! uniform draw `r` in `[0, 1)` selects the largest `k` with `r >= T[k]`,
//! scanning from the end. `T[0] = 0` makes the scan total.

use smallvec::SmallVec;

use super::TileKind;
use crate::core::{BoardError, GameRng, PaletteEntry};

/// Tolerance for "weights sum to 0" and "weights sum to 1".
pub const WEIGHT_EPSILON: f32 = 1e-4;

/// A validated, normalized palette with its cumulative threshold table.
#[derive(Clone, Debug, PartialEq)]
pub struct TilePalette {
    entries: Vec<PaletteEntry>,
    thresholds: SmallVec<[f32; 8]>,
}

impl TilePalette {
    /// Validate and normalize palette entries.
    ///
    /// Fails on an empty palette or a negative / non-finite weight.
    pub fn new(entries: &[PaletteEntry]) -> Result<Self, BoardError> {
        if entries.is_empty() {
            return Err(BoardError::EmptyPalette);
        }
        if let Some((index, entry)) = entries
            .iter()
            .enumerate()
            .find(|(_, e)| !e.weight.is_finite() || e.weight < 0.0)
        {
            return Err(BoardError::InvalidWeight {
                index,
                weight: entry.weight,
            });
        }

        let mut entries = entries.to_vec();
        normalize(&mut entries);
        let thresholds = cumulative_thresholds(&entries);
        Ok(Self { entries, thresholds })
    }

    /// Normalized entries.
    #[must_use]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Cumulative threshold table, one entry per palette entry.
    #[must_use]
    pub fn thresholds(&self) -> &[f32] {
        &self.thresholds
    }

    /// Palette index selected by the draw `r`.
    #[must_use]
    pub fn select_index(&self, r: f32) -> usize {
        select_index(&self.thresholds, r)
    }

    /// Draw a tile kind.
    pub fn sample(&self, rng: &mut GameRng) -> TileKind {
        self.entries[self.select_index(rng.gen_unit_f32())].kind
    }
}

/// Normalize weights in place so they sum to 1.
pub fn normalize(entries: &mut [PaletteEntry]) {
    if entries.is_empty() {
        return;
    }

    let total: f32 = entries.iter().map(|e| e.weight).sum();
    if total.abs() < WEIGHT_EPSILON {
        let even = 1.0 / entries.len() as f32;
        for entry in entries.iter_mut() {
            entry.weight = even;
        }
    } else if (total - 1.0).abs() >= WEIGHT_EPSILON {
        for entry in entries.iter_mut() {
            entry.weight /= total;
        }
    }
}

/// Build `T[0] = 0, T[i] = T[i-1] + w[i-1]`.
#[must_use]
pub fn cumulative_thresholds(entries: &[PaletteEntry]) -> SmallVec<[f32; 8]> {
    let mut table = SmallVec::with_capacity(entries.len());
    let mut acc = 0.0;
    for entry in entries {
        table.push(acc);
        acc += entry.weight;
    }
    table
}

/// Largest `k` with `r >= thresholds[k]`, or 0 if none matches.
#[must_use]
pub fn select_index(thresholds: &[f32], r: f32) -> usize {
    thresholds.iter().rposition(|&t| r >= t).unwrap_or(0)
}
