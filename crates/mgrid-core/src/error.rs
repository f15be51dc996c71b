//! Error types for grid construction, codec boundaries, and configuration.

use std::error::Error;
use std::fmt;

/// Errors raised at the grid-codec boundary.
///
/// `Malformed` is the only way a bad grid identifier surfaces; it is
/// propagated unchanged through every layer above the codec.
#[derive(Clone, Debug, PartialEq)]
pub enum CodecError {
    /// The string does not parse as an MGRS grid reference.
    Malformed {
        /// The offending input, as given.
        input: String,
        /// What went wrong.
        reason: String,
    },
    /// The codec cannot represent the coordinate.
    OutOfRange {
        /// Latitude in decimal degrees.
        latitude: f64,
        /// Longitude in decimal degrees.
        longitude: f64,
    },
}

impl CodecError {
    /// Shorthand for a [`CodecError::Malformed`] carrying `input`.
    pub fn malformed(input: &str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { input, reason } => {
                write!(f, "malformed grid reference '{input}': {reason}")
            }
            Self::OutOfRange {
                latitude,
                longitude,
            } => write!(
                f,
                "coordinate ({latitude}, {longitude}) cannot be expressed as a grid reference"
            ),
        }
    }
}

impl Error for CodecError {}

/// Errors from grid construction and navigation.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// Precision above 5 digits.
    InvalidPrecision {
        /// The rejected digit count.
        value: u8,
    },
    /// Latitude/longitude not finite or outside the WGS84 domain.
    InvalidCoordinate {
        /// Latitude in decimal degrees.
        latitude: f64,
        /// Longitude in decimal degrees.
        longitude: f64,
    },
    /// The grid codec rejected the input.
    Codec(CodecError),
    /// An area enumeration would visit more cells than allowed.
    AreaTooLarge {
        /// Cells requested, or `None` if the count overflows.
        cells: Option<u64>,
        /// The largest count accepted.
        limit: u64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPrecision { value } => {
                write!(f, "precision must be in [0, 5], got {value}")
            }
            Self::InvalidCoordinate {
                latitude,
                longitude,
            } => write!(f, "invalid coordinate ({latitude}, {longitude})"),
            Self::Codec(e) => write!(f, "codec: {e}"),
            Self::AreaTooLarge {
                cells: Some(cells),
                limit,
            } => write!(f, "area spans {cells} cells, limit is {limit}"),
            Self::AreaTooLarge { cells: None, limit } => {
                write!(f, "area cell count overflows, limit is {limit}")
            }
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Codec(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CodecError> for GridError {
    fn from(e: CodecError) -> Self {
        Self::Codec(e)
    }
}

/// Errors detected while validating provider configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Convergence tolerance is NaN, infinite, zero, or negative.
    InvalidTolerance {
        /// The invalid value.
        value: f64,
    },
    /// Iteration budget is zero.
    ZeroIterations,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTolerance { value } => {
                write!(f, "tolerance must be finite and positive, got {value}")
            }
            Self::ZeroIterations => write!(f, "max_iterations must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
