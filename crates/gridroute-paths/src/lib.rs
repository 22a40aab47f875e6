//! Minimum-cost routing over *gridroute* terrain grids.
//!
//! - [`ShortestPathEngine`] runs Dijkstra from a grid's origin to its target
//!   over the 4-connected graph whose edges cost whatever entering the
//!   destination cell costs.
//! - [`Path`] is the immutable result.
//! - [`RouteCoordinator`] turns a grid into a displayable [`RouteReport`].
//!
//! The engine reuses its internal node arrays between queries, so repeated
//! queries incur no allocations after warm-up.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | [`ShortestPathEngine::shortest_path`] |
//!
//! [`gridroute_core::Grid`] implements both.

mod coordinator;
mod distance;
mod engine;
mod error;
mod path;
mod traits;

pub use coordinator::{RouteCoordinator, RouteReport};
pub use distance::manhattan;
pub use engine::{SearchStats, ShortestPathEngine, UNREACHABLE};
pub use error::{Missing, Result, RouteError};
pub use path::Path;
pub use traits::{Pather, WeightedPather};
