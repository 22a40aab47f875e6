//! Error types for route queries.

use std::fmt;

use gridroute_core::Coord;
use thiserror::Error;

/// Which endpoints a route query was missing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Missing {
    Origin,
    Target,
    Both,
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Missing::Origin => "origin",
            Missing::Target => "target",
            Missing::Both => "origin and target",
        })
    }
}

/// Why a route query produced no path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("set the {missing} first")]
    PreconditionUnmet { missing: Missing },

    #[error("no route from {origin} to {target}")]
    NoRouteFound { origin: Coord, target: Coord },
}

pub type Result<T> = std::result::Result<T, RouteError>;
