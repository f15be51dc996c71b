//! Coordinate and geometry value types.

use crate::error::GridError;
use std::fmt;

/// A WGS84 position in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon {
    /// Latitude, positive north.
    pub latitude: f64,
    /// Longitude, positive east.
    pub longitude: f64,
}

impl LatLon {
    /// Validate and build a coordinate.
    ///
    /// Returns `Err(GridError::InvalidCoordinate)` if either component is
    /// not finite, latitude is outside `[-90, 90]`, or longitude is outside
    /// `[-180, 180]`.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GridError> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        if !valid {
            return Err(GridError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// A corner or reference point.
pub type Point = LatLon;

/// Axis-aligned box given by its four corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// South-east corner.
    pub southeast: Point,
    /// South-west corner.
    pub southwest: Point,
    /// North-east corner.
    pub northeast: Point,
    /// North-west corner.
    pub northwest: Point,
}

impl Rect {
    /// Build the box spanned by the given latitude and longitude extremes.
    pub fn from_extremes(north: f64, south: f64, east: f64, west: f64) -> Self {
        let p = |latitude, longitude| Point {
            latitude,
            longitude,
        };
        Self {
            southeast: p(south, east),
            southwest: p(south, west),
            northeast: p(north, east),
            northwest: p(north, west),
        }
    }
}

/// Result of an inverse geodesic computation between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inverse {
    /// Ellipsoidal distance in metres.
    pub distance_m: f64,
    /// Forward azimuth at the first point, degrees clockwise from north.
    pub azimuth_fwd: f64,
    /// Azimuth at the second point looking back towards the first.
    pub azimuth_back: f64,
}
