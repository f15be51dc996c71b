//! Provider traits for the grid codec and ellipsoidal geodesy.
//!
//! Grid navigation never talks to a concrete projection or geodesic
//! solver directly; it goes through these two traits so that either can
//! be substituted (for instance with call-counting doubles in tests).

use crate::error::CodecError;
use crate::geometry::{Inverse, LatLon};
use crate::precision::Precision;

/// Which point of a cell a [`GridCodec`] decodes to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellAnchor {
    /// The middle of the cell.
    #[default]
    Centre,
    /// The south-west corner (minimum easting and northing).
    SouthWest,
}

/// Conversion between coordinates and MGRS grid identifiers.
pub trait GridCodec: Send + Sync {
    /// Encode a coordinate as the identifier of the cell containing it.
    ///
    /// Easting and northing are truncated, never rounded, to `precision`
    /// digits.
    fn encode(&self, point: LatLon, precision: Precision) -> Result<String, CodecError>;

    /// Decode an identifier to the reference point of the cell it names.
    ///
    /// Returns `Err(CodecError::Malformed)` for input that does not parse.
    fn decode(&self, grid_id: &str) -> Result<LatLon, CodecError>;

    /// Decode an identifier to the centre of the cell it names, whatever
    /// the [`anchor`](GridCodec::anchor).
    fn centre(&self, grid_id: &str) -> Result<LatLon, CodecError>;

    /// The point of each cell that [`decode`](GridCodec::decode) returns.
    fn anchor(&self) -> CellAnchor;
}

/// Direct and inverse geodesic problems on an ellipsoid.
pub trait GeodesyProvider: Send + Sync {
    /// Travel `distance_m` metres from `origin` along initial azimuth
    /// `azimuth_deg` (degrees clockwise from north).
    fn project(&self, origin: LatLon, distance_m: f64, azimuth_deg: f64) -> LatLon;

    /// Distance and azimuths between two points.
    fn inverse(&self, from: LatLon, to: LatLon) -> Inverse;
}
