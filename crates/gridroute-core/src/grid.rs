//! The [`Grid`] type: a terrain matrix with an optional origin and target.
//!
//! A `Grid` is the single owner of its cells. Every mutation is validated
//! and either applied in full or rejected with a [`GridError`], leaving the
//! grid untouched.

use std::fmt;

use crate::error::{GridError, Result};
use crate::geom::{Bounds, Coord};
use crate::glyphs::Glyphs;
use crate::terrain::CellType;

/// Side length used when a grid is requested with unusable dimensions.
pub const DEFAULT_SIZE: i32 = 10;

/// Largest number of cells a grid may hold.
pub const MAX_CELLS: usize = 1 << 22;

/// One of the two designated cells of a route query.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Origin,
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::Origin => "origin",
            Endpoint::Target => "target",
        })
    }
}

/// A rectangular terrain grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: Bounds,
    cells: Vec<CellType>,
    origin: Option<Coord>,
    target: Option<Coord>,
}

impl Grid {
    /// Create an all-open grid. Fails if either dimension is not positive,
    /// or if the grid would hold more than [`MAX_CELLS`] cells.
    pub fn new(height: i32, width: i32) -> Result<Self> {
        let bounds = Bounds::new(height, width);
        if bounds.is_empty() {
            return Err(GridError::InvalidDimensions { height, width });
        }
        if bounds.len() > MAX_CELLS {
            return Err(GridError::TooLarge { height, width });
        }
        Ok(Self {
            bounds,
            cells: vec![CellType::Open; bounds.len()],
            origin: None,
            target: None,
        })
    }

    /// Create an all-open grid, substituting the default 10x10 grid when
    /// either dimension is not positive or the grid would be too large.
    ///
    /// The substitution is not an error: the grid is always returned, and
    /// the second element tells the caller whether a fallback happened.
    pub fn new_or_default(height: i32, width: i32) -> (Self, Option<GridError>) {
        match Self::new(height, width) {
            Ok(grid) => (grid, None),
            Err(err) => {
                log::warn!("{err}");
                (Self::default(), Some(err))
            }
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        self.bounds.contains(Coord::new(row, col))
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.bounds.contains(c)
    }

    /// The cell type at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<CellType> {
        self.bounds.index(c).map(|i| self.cells[i])
    }

    /// Entry cost of `c`, or `None` if `c` is out of bounds or impassable.
    #[inline]
    pub fn cost_at(&self, c: Coord) -> Option<u32> {
        self.at(c).and_then(CellType::cost)
    }

    #[inline]
    pub fn origin(&self) -> Option<Coord> {
        self.origin
    }

    #[inline]
    pub fn target(&self) -> Option<Coord> {
        self.target
    }

    /// The stored coordinate of an endpoint.
    #[inline]
    pub fn endpoint(&self, which: Endpoint) -> Option<Coord> {
        match which {
            Endpoint::Origin => self.origin,
            Endpoint::Target => self.target,
        }
    }

    /// Designate the origin. The cell must be in bounds and open.
    pub fn set_origin(&mut self, row: i32, col: i32) -> Result<()> {
        self.set_endpoint(Endpoint::Origin, row, col)
    }

    /// Designate the target. The cell must be in bounds and open.
    pub fn set_target(&mut self, row: i32, col: i32) -> Result<()> {
        self.set_endpoint(Endpoint::Target, row, col)
    }

    fn set_endpoint(&mut self, which: Endpoint, row: i32, col: i32) -> Result<()> {
        let c = Coord::new(row, col);
        let i = self.checked_index(c)?;
        let cell = self.cells[i];
        if cell != CellType::Open {
            return Err(GridError::Occupied {
                row,
                col,
                cell,
                endpoint: which,
            });
        }
        match which {
            Endpoint::Origin => self.origin = Some(c),
            Endpoint::Target => self.target = Some(c),
        }
        log::debug!("{which} set to {c}");
        Ok(())
    }

    /// Put an obstacle of type `kind` at `(row, col)`.
    ///
    /// Any previous terrain is overwritten, but the current origin and target
    /// cells are protected.
    pub fn place_obstacle(&mut self, kind: CellType, row: i32, col: i32) -> Result<()> {
        if !kind.is_obstacle() {
            return Err(GridError::InvalidObstacleType(kind.to_string()));
        }
        let c = Coord::new(row, col);
        let i = self.checked_index(c)?;
        if let Some(endpoint) = self.endpoint_at(c) {
            return Err(GridError::ReservedEndpoint { row, col, endpoint });
        }
        self.cells[i] = kind;
        log::debug!("{kind} placed at {c}");
        Ok(())
    }

    /// Reset `(row, col)` to open terrain.
    ///
    /// The origin and target are left alone even when they sit on the
    /// cleared cell.
    pub fn clear_cell(&mut self, row: i32, col: i32) -> Result<()> {
        let c = Coord::new(row, col);
        let i = self.checked_index(c)?;
        self.cells[i] = CellType::Open;
        log::debug!("cleared {c}");
        Ok(())
    }

    /// Which endpoint, if any, is stored at `c`. The origin is reported when
    /// both are.
    pub fn endpoint_at(&self, c: Coord) -> Option<Endpoint> {
        if self.origin == Some(c) {
            Some(Endpoint::Origin)
        } else if self.target == Some(c) {
            Some(Endpoint::Target)
        } else {
            None
        }
    }

    /// Row-major iterator over `(Coord, CellType)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Coord, CellType)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Render the grid as text: one line per row, one glyph per column,
    /// no trailing newline.
    ///
    /// Cells listed in `overlay` show the path marker. The origin marker is
    /// drawn over that, and the target marker over everything.
    pub fn render(&self, overlay: Option<&[Coord]>, glyphs: &Glyphs) -> String {
        let mut marks = vec![false; self.cells.len()];
        for &c in overlay.unwrap_or_default() {
            if let Some(i) = self.bounds.index(c) {
                marks[i] = true;
            }
        }

        let width = self.bounds.width as usize;
        let mut out = String::with_capacity(self.cells.len() * 4 + self.bounds.height as usize);
        for (i, (c, cell)) in self.iter().enumerate() {
            if i > 0 && i % width == 0 {
                out.push('\n');
            }
            let mut glyph = glyphs.for_cell(cell);
            if marks[i] {
                glyph = glyphs.path;
            }
            if self.origin == Some(c) {
                glyph = glyphs.origin;
            }
            if self.target == Some(c) {
                glyph = glyphs.target;
            }
            out.push(glyph);
        }
        out
    }

    /// Overwrite terrain without endpoint checks. Used by generators that
    /// have already excluded the endpoints.
    pub(crate) fn set_unchecked(&mut self, i: usize, kind: CellType) {
        self.cells[i] = kind;
    }

    fn checked_index(&self, c: Coord) -> Result<usize> {
        self.bounds.index(c).ok_or(GridError::OutOfBounds {
            row: c.row,
            col: c.col,
            height: self.bounds.height,
            width: self.bounds.width,
        })
    }
}

impl Default for Grid {
    /// The 10x10 all-open grid.
    fn default() -> Self {
        let bounds = Bounds::new(DEFAULT_SIZE, DEFAULT_SIZE);
        Self {
            bounds,
            cells: vec![CellType::Open; bounds.len()],
            origin: None,
            target: None,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None, &Glyphs::default()))
    }
}

// ---------------------------------------------------------------------------
// serde
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawGrid {
    height: i32,
    width: i32,
    cells: Vec<CellType>,
    origin: Option<Coord>,
    target: Option<Coord>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        RawGrid {
            height: self.bounds.height,
            width: self.bounds.width,
            cells: self.cells.clone(),
            origin: self.origin,
            target: self.target,
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        use serde::de::Error as _;

        let raw = RawGrid::deserialize(deserializer)?;
        let mut grid = Grid::new(raw.height, raw.width).map_err(D::Error::custom)?;
        if raw.cells.len() != grid.len() {
            return Err(D::Error::custom(format!(
                "expected {} cells, found {}",
                grid.len(),
                raw.cells.len()
            )));
        }
        grid.cells = raw.cells;
        for (which, c) in [(Endpoint::Origin, raw.origin), (Endpoint::Target, raw.target)] {
            if let Some(c) = c {
                grid.set_endpoint(which, c.row, c.col).map_err(D::Error::custom)?;
            }
        }
        Ok(grid)
    }
}
