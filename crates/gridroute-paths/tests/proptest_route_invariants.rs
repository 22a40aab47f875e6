//! Property-based invariant tests for route computation.
//!
//! 1. On open grids the route cost is the Manhattan distance.
//! 2. A target walled in by buildings or blocked cells is unreachable.
//! 3. Reversing a path twice gives the same path.
//! 4. On random terrain the route is a valid 4-connected walk whose cost is
//!    the sum of entry costs and matches an exhaustive relaxation.

use gridroute_core::{CellType, Coord, Grid};
use gridroute_paths::{Path, RouteError, ShortestPathEngine, manhattan};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn cell_strategy() -> impl Strategy<Value = CellType> {
    prop_oneof![
        6 => Just(CellType::Open),
        2 => Just(CellType::Water),
        1 => Just(CellType::Building),
        1 => Just(CellType::Blocked),
    ]
}

fn wall_strategy() -> impl Strategy<Value = CellType> {
    prop_oneof![Just(CellType::Building), Just(CellType::Blocked)]
}

/// A random grid plus its origin and target. Obstacles rolled onto either
/// endpoint are dropped so both stay open.
fn terrain_strategy() -> impl Strategy<Value = (Grid, Coord, Coord)> {
    (1i32..=9, 1i32..=9).prop_flat_map(|(h, w)| {
        let n = (h * w) as usize;
        (
            proptest::collection::vec(cell_strategy(), n),
            0..h,
            0..w,
            0..h,
            0..w,
        )
            .prop_map(move |(cells, or, oc, tr, tc)| {
                let mut grid = Grid::new(h, w).unwrap();
                let origin = Coord::new(or, oc);
                let target = Coord::new(tr, tc);
                for (i, kind) in cells.into_iter().enumerate() {
                    let c = grid.bounds().coord(i);
                    if kind != CellType::Open && c != origin && c != target {
                        grid.place_obstacle(kind, c.row, c.col).unwrap();
                    }
                }
                grid.set_origin(or, oc).unwrap();
                grid.set_target(tr, tc).unwrap();
                (grid, origin, target)
            })
    })
}

/// Exhaustive Bellman-Ford style relaxation from `origin`.
fn reference_cost(grid: &Grid, origin: Coord, target: Coord) -> Option<u32> {
    let bounds = grid.bounds();
    let mut dist = vec![u32::MAX; bounds.len()];
    dist[bounds.index(origin)?] = 0;
    let mut changed = true;
    while changed {
        changed = false;
        for c in bounds {
            let ci = bounds.index(c)?;
            if dist[ci] == u32::MAX {
                continue;
            }
            for n in c.neighbors_4() {
                let Some(cost) = grid.cost_at(n) else {
                    continue;
                };
                let ni = bounds.index(n)?;
                if dist[ci] + cost < dist[ni] {
                    dist[ni] = dist[ci] + cost;
                    changed = true;
                }
            }
        }
    }
    let d = dist[bounds.index(target)?];
    (d != u32::MAX).then_some(d)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Open grids cost the Manhattan distance
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn open_grid_cost_is_manhattan(
        (h, w, or, oc, tr, tc) in (1i32..=15, 1i32..=15)
            .prop_flat_map(|(h, w)| (Just(h), Just(w), 0..h, 0..w, 0..h, 0..w)),
    ) {
        let mut grid = Grid::new(h, w).unwrap();
        grid.set_origin(or, oc).unwrap();
        grid.set_target(tr, tc).unwrap();
        let path = ShortestPathEngine::new().compute_route(&grid).unwrap();
        let d = manhattan(Coord::new(or, oc), Coord::new(tr, tc));
        prop_assert_eq!(path.total_cost(), d);
        prop_assert_eq!(path.len(), d as usize + 1);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Enclosed targets are unreachable
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn enclosed_target_has_no_route(
        (h, w, tr, tc, or, oc) in (2i32..=10, 2i32..=10)
            .prop_flat_map(|(h, w)| (Just(h), Just(w), 0..h, 0..w, 0..h, 0..w)),
        walls in proptest::collection::vec(wall_strategy(), 4),
    ) {
        let target = Coord::new(tr, tc);
        let origin = Coord::new(or, oc);
        let ring = target.neighbors_4();
        prop_assume!(origin != target && !ring.contains(&origin));

        let mut grid = Grid::new(h, w).unwrap();
        for (n, kind) in ring.iter().zip(walls) {
            if grid.contains(*n) {
                grid.place_obstacle(kind, n.row, n.col).unwrap();
            }
        }
        grid.set_origin(or, oc).unwrap();
        grid.set_target(tr, tc).unwrap();

        let result = ShortestPathEngine::new().compute_route(&grid);
        prop_assert_eq!(result, Err(RouteError::NoRouteFound { origin, target }));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Reversal is an involution
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reversed_twice_is_identity(
        steps in proptest::collection::vec((-20i32..20, -20i32..20), 0..30),
        cost in any::<u32>(),
    ) {
        let p = Path::new(steps.into_iter().map(Coord::from).collect(), cost);
        let r = p.reversed();
        prop_assert_eq!(r.total_cost(), p.total_cost());
        prop_assert_eq!(r.len(), p.len());
        prop_assert_eq!(r.reversed(), p);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Random terrain: valid and optimal
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn route_is_valid_and_optimal((grid, origin, target) in terrain_strategy()) {
        let mut engine = ShortestPathEngine::new();
        let expected = reference_cost(&grid, origin, target);
        match engine.compute_route(&grid) {
            Ok(path) => {
                prop_assert_eq!(Some(path.total_cost()), expected);
                prop_assert_eq!(path.first(), Some(origin));
                prop_assert_eq!(path.last(), Some(target));

                let mut sum = 0;
                for pair in path.steps().windows(2) {
                    prop_assert_eq!(manhattan(pair[0], pair[1]), 1);
                    sum += grid.cost_at(pair[1]).unwrap();
                }
                prop_assert_eq!(sum, path.total_cost());
                prop_assert!(engine.last_stats().expanded <= grid.len());
            }
            Err(err) => {
                prop_assert_eq!(expected, None);
                prop_assert_eq!(err, RouteError::NoRouteFound { origin, target });
            }
        }
    }

    #[test]
    fn reused_engine_matches_fresh_engine(
        cases in proptest::collection::vec(terrain_strategy(), 1..6),
    ) {
        let mut shared = ShortestPathEngine::new();
        for (grid, _, _) in &cases {
            let fresh = ShortestPathEngine::new().compute_route(grid);
            prop_assert_eq!(shared.compute_route(grid), fresh);
        }
    }
}
