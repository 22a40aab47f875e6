//! Geometry primitives: [`Coord`] and [`Bounds`].
//!
//! Coordinates are `(row, col)` pairs with rows growing downwards. They are
//! signed so that callers can hand in whatever integers they parsed; anything
//! negative is simply outside every [`Bounds`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid position, `row` first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Top-left corner (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Unit steps in the fixed expansion order: up, down, left, right.
    pub const CARDINALS: [Coord; 4] = [
        Coord::new(-1, 0),
        Coord::new(1, 0),
        Coord::new(0, -1),
        Coord::new(0, 1),
    ];

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four cardinal neighbours in [`Coord::CARDINALS`] order.
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        Self::CARDINALS.map(|d| self + d)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The extent of a grid anchored at (0, 0): rows `[0, height)`, columns
/// `[0, width)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub height: i32,
    pub width: i32,
}

impl Bounds {
    #[inline]
    pub const fn new(height: i32, width: i32) -> Self {
        Self { height, width }
    }

    /// Total number of cells. Zero if either side is non-positive.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.height as usize).saturating_mul(self.width as usize)
    }

    /// Whether the bounds have zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.height <= 0 || self.width <= 0
    }

    /// Whether `c` lies inside the bounds.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.height && c.col >= 0 && c.col < self.width
    }

    /// Flat row-major index of `c`, or `None` when out of bounds.
    #[inline]
    pub fn index(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.width as usize + c.col as usize)
    }

    /// Inverse of [`index`](Bounds::index). The caller guarantees
    /// `idx < self.len()`.
    #[inline]
    pub fn coord(self, idx: usize) -> Coord {
        let w = self.width as usize;
        Coord::new((idx / w) as i32, (idx % w) as i32)
    }

    /// Row-major iterator over every coordinate.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: Coord::ZERO,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Coord;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the coordinates of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    cur: Coord,
}

impl Iterator for BoundsIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.bounds.is_empty() || self.cur.row >= self.bounds.height {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.bounds.width {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bounds.is_empty() || self.cur.row >= self.bounds.height {
            return (0, Some(0));
        }
        let w = self.bounds.width as usize;
        let remaining_in_row = (self.bounds.width - self.cur.col) as usize;
        let remaining_rows = (self.bounds.height - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoundsIter {}
