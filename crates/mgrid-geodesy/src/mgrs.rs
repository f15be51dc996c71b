//! MGRS codec over UTM zones and the polar UPS regions.
//!
//! Projection and 100 km lettering are delegated to [`geoconvert`], which
//! honours the Norway and Svalbard zone exceptions and switches to UPS
//! north of 84° and south of 80°S. This module adapts it to the
//! [`GridCodec`] seam: textual validation goes through [`GridRef`], zone
//! numbers are written without padding, and decoding honours the
//! configured [`CellAnchor`].

use geoconvert::{Mgrs, UtmUps};
use mgrid_core::{CellAnchor, CodecError, GridCodec, GridRef, LatLon, Precision};

/// MGRS encoder/decoder on WGS84.
///
/// # Examples
///
/// ```
/// use mgrid_core::{GridCodec, LatLon, Precision};
/// use mgrid_geodesy::{CellAnchor, MgrsCodec};
///
/// let codec = MgrsCodec::new(CellAnchor::SouthWest);
/// let corner = codec.decode("4QGH94933312").unwrap();
/// assert!((corner.latitude - 20.172_895_857).abs() < 1e-8);
/// assert!((corner.longitude + 156.178_323_458).abs() < 1e-8);
///
/// let centre = codec.centre("4QGH94933312").unwrap();
/// assert_eq!(codec.encode(centre, Precision::M10).unwrap(), "4QGH94933312");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MgrsCodec {
    anchor: CellAnchor,
}

impl MgrsCodec {
    /// A codec decoding to the given anchor.
    pub fn new(anchor: CellAnchor) -> Self {
        Self { anchor }
    }

    fn parse(grid_id: &str) -> Result<(GridRef, Mgrs), CodecError> {
        let gridref = GridRef::parse(grid_id)?;
        let mgrs = Mgrs::parse_str(&gridref.to_string())
            .map_err(|e| CodecError::malformed(grid_id, e.to_string()))?;
        Ok((gridref, mgrs))
    }
}

/// Map longitudes to `[-180, 180)`.
fn normalise_longitude(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

fn from_geo(point: geoconvert::LatLon) -> LatLon {
    LatLon {
        latitude: point.latitude(),
        longitude: normalise_longitude(point.longitude()),
    }
}

/// `"04QGH…"` becomes `"4QGH…"`; polar references have no zone to trim.
fn trim_zone_padding(id: String) -> String {
    match id.strip_prefix('0') {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => rest.to_string(),
        _ => id,
    }
}

impl GridCodec for MgrsCodec {
    fn encode(&self, point: LatLon, precision: Precision) -> Result<String, CodecError> {
        let LatLon {
            latitude,
            longitude,
        } = point;
        let position = geoconvert::LatLon::create(latitude, normalise_longitude(longitude))
            .map_err(|_| CodecError::OutOfRange {
                latitude,
                longitude,
            })?;
        let mgrs = Mgrs::from_latlon(&position, i32::from(precision.digits()));
        Ok(trim_zone_padding(mgrs.to_string()))
    }

    fn decode(&self, grid_id: &str) -> Result<LatLon, CodecError> {
        match self.anchor {
            CellAnchor::Centre => self.centre(grid_id),
            CellAnchor::SouthWest => {
                let (gridref, mgrs) = Self::parse(grid_id)?;
                let half = f64::from(gridref.precision().size_m()) / 2.0;
                let centre = mgrs.to_utmups();
                let corner = UtmUps::create(
                    centre.zone(),
                    centre.is_north(),
                    centre.easting() - half,
                    centre.northing() - half,
                )
                .map_err(|e| CodecError::malformed(grid_id, e.to_string()))?;
                Ok(from_geo(corner.to_latlon()))
            }
        }
    }

    fn centre(&self, grid_id: &str) -> Result<LatLon, CodecError> {
        let (_, mgrs) = Self::parse(grid_id)?;
        Ok(from_geo(mgrs.to_latlon()))
    }

    fn anchor(&self) -> CellAnchor {
        self.anchor
    }
}
