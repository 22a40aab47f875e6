use std::collections::BinaryHeap;

use gridroute_core::{Bounds, Coord, Grid, MAX_CELLS};

use crate::error::{Missing, Result, RouteError};
use crate::path::Path;
use crate::traits::WeightedPather;

/// Sentinel cost meaning "not reached yet".
pub const UNREACHABLE: u32 = u32::MAX;

// ---------------------------------------------------------------------------
// Internal search state
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: u32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: usize::MAX,
            generation: 0,
            closed: false,
        }
    }
}

/// Frontier entry, ordered so that `BinaryHeap` (a max-heap) pops the lowest
/// cost first and, among equal costs, the earliest pushed.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct FrontierEntry {
    pub(crate) idx: usize,
    pub(crate) g: u32,
    pub(crate) seq: u64,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.g.cmp(&self.g).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Counters from the most recent search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells popped and expanded (finalised).
    pub expanded: usize,
    /// Frontier pushes, the origin included.
    pub pushed: usize,
    /// Popped entries discarded because a cheaper cost was already known.
    pub stale: usize,
}

// ---------------------------------------------------------------------------
// ShortestPathEngine
// ---------------------------------------------------------------------------

/// Dijkstra search from one origin to one target.
///
/// The engine keeps a dense, row-major node array sized to the largest grid
/// it has searched. Nodes are invalidated lazily with a generation counter,
/// so repeated queries on grids of the same size allocate nothing after the
/// first one.
///
/// Frontier ties are broken by insertion order: among entries with equal
/// tentative cost, the one pushed first is expanded first. Together with the
/// fixed neighbour order (up, down, left, right) this makes the returned
/// path deterministic for a given grid.
pub struct ShortestPathEngine {
    bounds: Bounds,
    nodes: Vec<Node>,
    generation: u32,
    frontier: BinaryHeap<FrontierEntry>,
    nbuf: Vec<Coord>,
    stats: SearchStats,
}

impl Default for ShortestPathEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortestPathEngine {
    /// Create an engine with no preallocated state.
    pub fn new() -> Self {
        Self {
            bounds: Bounds::default(),
            nodes: Vec::new(),
            generation: 0,
            frontier: BinaryHeap::new(),
            nbuf: Vec::with_capacity(4),
            stats: SearchStats::default(),
        }
    }

    /// Create an engine with state preallocated for `bounds`. Bounds larger
    /// than any [`Grid`] may be ([`MAX_CELLS`]) are not preallocated.
    pub fn with_bounds(bounds: Bounds) -> Self {
        let mut engine = Self::new();
        if bounds.len() <= MAX_CELLS {
            engine.set_bounds(bounds);
        }
        engine
    }

    /// Counters from the last search.
    #[inline]
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Compute the cheapest route between the grid's origin and target.
    ///
    /// Fails with [`RouteError::PreconditionUnmet`] if either endpoint is
    /// unset, and with [`RouteError::NoRouteFound`] if the target cannot be
    /// reached. The grid is only read.
    pub fn compute_route(&mut self, grid: &Grid) -> Result<Path> {
        let (origin, target) = match (grid.origin(), grid.target()) {
            (Some(origin), Some(target)) => (origin, target),
            (None, Some(_)) => {
                return Err(RouteError::PreconditionUnmet {
                    missing: Missing::Origin,
                });
            }
            (Some(_), None) => {
                return Err(RouteError::PreconditionUnmet {
                    missing: Missing::Target,
                });
            }
            (None, None) => {
                return Err(RouteError::PreconditionUnmet {
                    missing: Missing::Both,
                });
            }
        };

        match self.shortest_path(grid, origin, target) {
            Some(path) => {
                log::debug!("{path} from {origin} to {target}");
                Ok(path)
            }
            None => {
                log::debug!("no route from {origin} to {target}");
                Err(RouteError::NoRouteFound { origin, target })
            }
        }
    }

    /// Compute the cheapest path from `from` to `to` over any weighted
    /// pather.
    ///
    /// Returns the full path (both endpoints included) or `None` if `to`
    /// cannot be reached or either endpoint is outside the pather's bounds.
    /// The search stops as soon as `to` is taken off the frontier.
    pub fn shortest_path<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Coord,
        to: Coord,
    ) -> Option<Path> {
        self.set_bounds(pather.bounds());
        self.stats = SearchStats::default();

        let start_idx = self.bounds.index(from)?;
        let goal_idx = self.bounds.index(to)?;

        if start_idx == goal_idx {
            return Some(Path::new(vec![from], 0));
        }

        let cur_gen = self.generation;
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.closed = false;
        }

        self.frontier.clear();
        let mut seq: u64 = 0;
        self.frontier.push(FrontierEntry {
            idx: start_idx,
            g: 0,
            seq,
        });
        self.stats.pushed = 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = self.frontier.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            let cn = &self.nodes[ci];
            if cn.closed || current.g > cn.g {
                self.stats.stale += 1;
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].closed = true;
            self.stats.expanded += 1;
            let current_g = current.g;
            let cp = self.bounds.coord(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.bounds.index(np) else {
                    continue;
                };
                let tentative = current_g.saturating_add(pather.cost(cp, np));

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if n.closed || tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.closed = false;
                    n.g = UNREACHABLE;
                }
                if tentative == UNREACHABLE {
                    continue;
                }

                n.g = tentative;
                n.parent = ci;

                seq += 1;
                self.frontier.push(FrontierEntry {
                    idx: ni,
                    g: tentative,
                    seq,
                });
                self.stats.pushed += 1;
            }
        };

        self.nbuf = nbuf;
        log::trace!(
            "search {from} -> {to}: expanded {}, pushed {}, stale {}",
            self.stats.expanded,
            self.stats.pushed,
            self.stats.stale
        );

        if !found {
            return None;
        }

        // Reconstruct path.
        let mut steps = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            steps.push(self.bounds.coord(ci));
            ci = self.nodes[ci].parent;
        }
        steps.reverse();
        Some(Path::new(steps, self.nodes[goal_idx].g))
    }

    /// Cost recorded for `c` by the last search, or [`UNREACHABLE`] if the
    /// search never reached it.
    pub fn cost_at(&self, c: Coord) -> u32 {
        match self.bounds.index(c) {
            Some(i) if self.nodes[i].generation == self.generation => self.nodes[i].g,
            _ => UNREACHABLE,
        }
    }

    /// Prepare the node array for a search over `bounds` and start a new
    /// generation.
    ///
    /// If the new size fits within the existing capacity the nodes are kept
    /// and only the generation is bumped; otherwise they are reallocated.
    fn set_bounds(&mut self, bounds: Bounds) {
        let new_len = bounds.len();
        self.bounds = bounds;

        if new_len > self.nodes.len() {
            self.nodes.clear();
            self.nodes.resize(new_len, Node::default());
            self.generation = 0;
        }

        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: old stamps could collide with the new generation.
            for n in self.nodes.iter_mut() {
                *n = Node::default();
            }
            self.generation = 1;
        }
    }
}
