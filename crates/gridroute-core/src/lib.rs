//! **gridroute-core** is the terrain grid model for minimum-cost routing.
//!
//! This crate provides the data side of *gridroute*: coordinates, terrain
//! types with their entry costs, the [`Grid`] with its origin and target
//! cells, text rendering through a configurable [`Glyphs`] table, and a
//! random obstacle scatterer.
//!
//! Every mutation on a [`Grid`] returns a [`Result`]; a rejected mutation
//! leaves the grid exactly as it was.

pub mod error;
pub mod geom;
pub mod glyphs;
pub mod grid;
pub mod terrain;
pub mod terrain_gen;

pub use error::{GridError, Result};
pub use geom::{Bounds, BoundsIter, Coord};
pub use glyphs::Glyphs;
pub use grid::{DEFAULT_SIZE, Endpoint, Grid, MAX_CELLS};
pub use terrain::CellType;
pub use terrain_gen::{TerrainGen, TerrainMix};
