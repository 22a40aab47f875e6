use gridroute_core::{Bounds, Coord, Grid};

/// Minimal search interface: the searched extent and neighbour enumeration.
pub trait Pather {
    /// The rectangle the search may visit. Neighbours outside it are ignored.
    fn bounds(&self) -> Bounds;

    /// Append the neighbours reachable from `c` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}

/// Pather with weighted (non-negative) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to the adjacent `to`.
    fn cost(&self, from: Coord, to: Coord) -> u32;
}

// A grid is a 4-connected graph whose edges lead into passable cells and
// cost whatever entering the destination cell costs.

impl Pather for Grid {
    #[inline]
    fn bounds(&self) -> Bounds {
        Grid::bounds(self)
    }

    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        buf.extend(
            c.neighbors_4()
                .into_iter()
                .filter(|&n| self.cost_at(n).is_some()),
        );
    }
}

impl WeightedPather for Grid {
    #[inline]
    fn cost(&self, _from: Coord, to: Coord) -> u32 {
        self.cost_at(to).unwrap_or(crate::UNREACHABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridroute_core::CellType;

    #[test]
    fn grid_neighbors_skip_impassable_and_out_of_bounds() {
        let mut g = Grid::new(3, 3).unwrap();
        g.place_obstacle(CellType::Building, 0, 1).unwrap();
        g.place_obstacle(CellType::Water, 1, 0).unwrap();
        let mut buf = Vec::new();
        g.neighbors(Coord::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Coord::new(1, 0)]);

        buf.clear();
        g.neighbors(Coord::new(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![Coord::new(2, 1), Coord::new(1, 0), Coord::new(1, 2)]
        );
    }

    #[test]
    fn grid_cost_is_charged_on_entry() {
        let mut g = Grid::new(1, 3).unwrap();
        g.place_obstacle(CellType::Water, 0, 1).unwrap();
        assert_eq!(g.cost(Coord::new(0, 0), Coord::new(0, 1)), 3);
        assert_eq!(g.cost(Coord::new(0, 1), Coord::new(0, 2)), 1);
        assert_eq!(g.cost(Coord::new(0, 1), Coord::new(0, 0)), 1);
    }
}
