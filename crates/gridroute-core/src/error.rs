//! Error types for grid construction and mutation.

use thiserror::Error;

use crate::grid::Endpoint;
use crate::terrain::CellType;

/// Why a grid operation was rejected. A rejected operation never changes the
/// grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid size {height}x{width}, using the default 10x10")]
    InvalidDimensions { height: i32, width: i32 },

    #[error("grid size {height}x{width} is too large, using the default 10x10")]
    TooLarge { height: i32, width: i32 },

    #[error("({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: i32,
        col: i32,
        height: i32,
        width: i32,
    },

    #[error("the {endpoint} cannot be placed on a {cell} cell at ({row}, {col})")]
    Occupied {
        row: i32,
        col: i32,
        cell: CellType,
        endpoint: Endpoint,
    },

    #[error("({row}, {col}) is the {endpoint} and cannot hold an obstacle")]
    ReservedEndpoint {
        row: i32,
        col: i32,
        endpoint: Endpoint,
    },

    #[error("invalid obstacle type {0} (use 1=building, 2=water, 3=blocked)")]
    InvalidObstacleType(String),
}

pub type Result<T> = std::result::Result<T, GridError>;
