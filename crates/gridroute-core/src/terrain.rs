//! Terrain types and their traversal costs.

use std::fmt;

use crate::error::GridError;

/// What occupies a grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellType {
    #[default]
    Open,
    Building,
    Water,
    Blocked,
}

impl CellType {
    /// Every obstacle kind, in selector order.
    pub const OBSTACLES: [CellType; 3] = [CellType::Building, CellType::Water, CellType::Blocked];

    /// Cost charged for entering a cell of this type, or `None` if the cell
    /// can never be entered.
    #[inline]
    pub const fn cost(self) -> Option<u32> {
        match self {
            CellType::Open => Some(1),
            CellType::Water => Some(3),
            CellType::Building | CellType::Blocked => None,
        }
    }

    /// Whether a route may enter this cell.
    #[inline]
    pub const fn passable(self) -> bool {
        self.cost().is_some()
    }

    /// Whether this type may be placed with
    /// [`Grid::place_obstacle`](crate::Grid::place_obstacle).
    #[inline]
    pub const fn is_obstacle(self) -> bool {
        !matches!(self, CellType::Open)
    }

    /// Parse the numeric obstacle selector used by interactive front-ends:
    /// 1 = building, 2 = water, 3 = blocked.
    pub fn from_selector(selector: i32) -> Result<Self, GridError> {
        match selector {
            1 => Ok(CellType::Building),
            2 => Ok(CellType::Water),
            3 => Ok(CellType::Blocked),
            other => Err(GridError::InvalidObstacleType(other.to_string())),
        }
    }

    /// Inverse of [`from_selector`](CellType::from_selector). `Open` has no
    /// selector.
    pub const fn selector(self) -> Option<i32> {
        match self {
            CellType::Open => None,
            CellType::Building => Some(1),
            CellType::Water => Some(2),
            CellType::Blocked => Some(3),
        }
    }

    /// Lower-case name, used in messages.
    pub const fn name(self) -> &'static str {
        match self {
            CellType::Open => "open",
            CellType::Building => "building",
            CellType::Water => "water",
            CellType::Blocked => "blocked",
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
