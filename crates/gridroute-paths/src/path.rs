//! The [`Path`] result type.

use std::fmt;
use std::slice;

use gridroute_core::Coord;

/// An immutable route: the visited coordinates from origin to target, and
/// the total cost of entering every step after the first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    steps: Vec<Coord>,
    total_cost: u32,
}

impl Path {
    pub fn new(steps: Vec<Coord>, total_cost: u32) -> Self {
        Self { steps, total_cost }
    }

    /// Number of steps, origin included.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[inline]
    pub fn total_cost(&self) -> u32 {
        self.total_cost
    }

    #[inline]
    pub fn steps(&self) -> &[Coord] {
        &self.steps
    }

    #[inline]
    pub fn first(&self) -> Option<Coord> {
        self.steps.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Coord> {
        self.steps.last().copied()
    }

    /// Iterate over the steps in stored order.
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<slice::Iter<'_, Coord>> {
        self.steps.iter().copied()
    }

    /// The same route walked backwards. The cost is copied, not recomputed.
    pub fn reversed(&self) -> Path {
        let mut steps = self.steps.clone();
        steps.reverse();
        Path {
            steps,
            total_cost: self.total_cost,
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = Coord;
    type IntoIter = std::iter::Copied<slice::Iter<'a, Coord>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "route of {} steps, total cost {}",
            self.len(),
            self.total_cost
        )
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let p = Path::new(vec![Coord::new(2, 3), Coord::new(2, 4)], 3);
        let json = serde_json::to_string(&p).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
