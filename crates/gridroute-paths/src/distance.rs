use gridroute_core::Coord;

/// Manhattan (L1) distance between two coordinates.
///
/// On an all-open grid this is the cost of the cheapest route.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    a.row.abs_diff(b.row).saturating_add(a.col.abs_diff(b.col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_and_zero_on_self() {
        let a = Coord::new(1, 5);
        let b = Coord::new(4, 2);
        assert_eq!(manhattan(a, b), 6);
        assert_eq!(manhattan(b, a), 6);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn extreme_coordinates_saturate() {
        let a = Coord::new(i32::MIN, i32::MIN);
        let b = Coord::new(i32::MAX, i32::MAX);
        assert_eq!(manhattan(a, b), u32::MAX);
        assert_eq!(manhattan(Coord::new(i32::MIN, 0), Coord::new(i32::MAX, 0)), u32::MAX);
    }
}
