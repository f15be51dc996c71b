//! Errors from collection aggregation.

use std::error::Error;
use std::fmt;

use mgrid_core::GridError;

/// Errors raised by [`SpatialCollection`](crate::SpatialCollection)
/// queries.
#[derive(Clone, Debug, PartialEq)]
pub enum AggError {
    /// The query has no answer for an empty collection.
    EmptyCollection {
        /// Name of the query, e.g. `"northernmost"`.
        operation: &'static str,
    },
    /// Building or navigating a grid failed.
    Grid(GridError),
}

impl fmt::Display for AggError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCollection { operation } => {
                write!(f, "{operation} is undefined for an empty collection")
            }
            Self::Grid(e) => write!(f, "grid error: {e}"),
        }
    }
}

impl Error for AggError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::EmptyCollection { .. } => None,
        }
    }
}

impl From<GridError> for AggError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
