//! [`RouteCoordinator`]: one call from a grid to a displayable answer.

use std::fmt;

use gridroute_core::{Glyphs, Grid};

use crate::engine::ShortestPathEngine;
use crate::error::RouteError;
use crate::path::Path;

/// Outcome of a single route query, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteReport {
    /// A route exists. `rendered` is the grid with the route overlaid.
    Found { path: Path, rendered: String },
    /// No route: either an endpoint was missing or the target is cut off.
    NoRoute { reason: RouteError },
}

impl RouteReport {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, RouteReport::Found { .. })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            RouteReport::Found { path, .. } => Some(path),
            RouteReport::NoRoute { .. } => None,
        }
    }

    pub fn total_cost(&self) -> Option<u32> {
        self.path().map(Path::total_cost)
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteReport::Found { path, rendered } => {
                writeln!(f, "route found with total cost {}:", path.total_cost())?;
                f.write_str(rendered)
            }
            RouteReport::NoRoute { reason } => write!(f, "no route found: {reason}"),
        }
    }
}

/// Runs the engine against a grid and packages the result.
pub struct RouteCoordinator {
    engine: ShortestPathEngine,
    glyphs: Glyphs,
}

impl Default for RouteCoordinator {
    fn default() -> Self {
        Self::new(ShortestPathEngine::new(), Glyphs::default())
    }
}

impl RouteCoordinator {
    pub fn new(engine: ShortestPathEngine, glyphs: Glyphs) -> Self {
        Self { engine, glyphs }
    }

    #[inline]
    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    pub fn set_glyphs(&mut self, glyphs: Glyphs) {
        self.glyphs = glyphs;
    }

    #[inline]
    pub fn engine(&self) -> &ShortestPathEngine {
        &self.engine
    }

    /// Query the grid's current origin and target once.
    ///
    /// There are no retries: calling again after mutating the grid simply
    /// repeats the query against the new state.
    pub fn compute_and_describe(&mut self, grid: &Grid) -> RouteReport {
        match self.engine.compute_route(grid) {
            Ok(path) => {
                let rendered = grid.render(Some(path.steps()), &self.glyphs);
                RouteReport::Found { path, rendered }
            }
            Err(reason) => RouteReport::NoRoute { reason },
        }
    }
}
