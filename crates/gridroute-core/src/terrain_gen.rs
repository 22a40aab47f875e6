//! Random terrain generation.
//!
//! [`TerrainGen`] scatters obstacles over an existing [`Grid`], independently
//! per cell, with a separate probability for each obstacle kind. The origin
//! and target cells are never touched.

use rand::Rng;

use crate::grid::Grid;
use crate::terrain::CellType;

/// Per-cell probabilities for each obstacle kind. Their sum should not exceed
/// 1.0; anything beyond is never reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainMix {
    pub building: f64,
    pub water: f64,
    pub blocked: f64,
}

impl TerrainMix {
    /// Total probability that a cell receives an obstacle.
    pub fn total(&self) -> f64 {
        self.building + self.water + self.blocked
    }

    /// Pick the obstacle for a uniform roll in `[0, 1)`.
    fn pick(&self, roll: f64) -> Option<CellType> {
        if roll < self.building {
            Some(CellType::Building)
        } else if roll < self.building + self.water {
            Some(CellType::Water)
        } else if roll < self.total() {
            Some(CellType::Blocked)
        } else {
            None
        }
    }
}

impl Default for TerrainMix {
    fn default() -> Self {
        Self {
            building: 0.10,
            water: 0.15,
            blocked: 0.05,
        }
    }
}

/// Obstacle scatterer driven by a caller-provided RNG.
pub struct TerrainGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> TerrainGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Roll every non-endpoint cell against `mix`, overwriting the cells
    /// that come up with an obstacle. Cells that roll nothing keep their
    /// current terrain.
    ///
    /// Returns the number of cells that received an obstacle.
    pub fn scatter(&mut self, grid: &mut Grid, mix: &TerrainMix) -> usize {
        let bounds = grid.bounds();
        let mut placed = 0usize;
        for (i, c) in bounds.iter().enumerate() {
            // Roll even for endpoints so a seed gives the same layout
            // regardless of where the endpoints are.
            let roll: f64 = self.rng.random();
            if grid.endpoint_at(c).is_some() {
                continue;
            }
            if let Some(kind) = mix.pick(roll) {
                grid.set_unchecked(i, kind);
                placed += 1;
            }
        }
        log::debug!("scattered {placed} obstacles over {bounds} grid");
        placed
    }
}
