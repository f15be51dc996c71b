//! The [`Grid`] cell value type.

use std::fmt;
use std::hash::{Hash, Hasher};

use mgrid_core::{GridRef, LatLon, Precision};

/// How a [`Grid`] came to exist. Informational only; never part of
/// identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Source {
    /// Built from a latitude/longitude pair.
    LatLon,
    /// Parsed from a grid identifier.
    GridId,
    /// Produced by translating another grid.
    Translation,
    /// Produced by coarsening another grid (a larger cell).
    Upsize,
    /// Produced by refining another grid (a smaller cell).
    Downsize,
}

impl Source {
    /// Short tag for this provenance.
    pub fn tag(self) -> &'static str {
        match self {
            Self::LatLon => "lat/lon",
            Self::GridId => "grid_id",
            Self::Translation => "translation",
            Self::Upsize => "upsize",
            Self::Downsize => "downsize",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One square cell of the MGRS tiling.
///
/// A `Grid` pairs a parsed identifier with the reference point the codec
/// decoded it to. Both are fixed at construction; every navigation
/// operation on [`MgrsSpace`](crate::MgrsSpace) returns a new `Grid`.
///
/// Equality and hashing use the identifier with leading zeros stripped,
/// so `"04QGH12"` and `"4QGH12"` are the same cell. Cells of different
/// precision are never equal.
#[derive(Clone, Debug)]
pub struct Grid {
    id: String,
    gridref: GridRef,
    point: LatLon,
    source: Source,
}

impl Grid {
    pub(crate) fn new(gridref: GridRef, point: LatLon, source: Source) -> Self {
        Self {
            id: gridref.to_string(),
            gridref,
            point,
            source,
        }
    }

    /// Canonical identifier: uppercase, no whitespace.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Parsed form of the identifier.
    pub fn gridref(&self) -> &GridRef {
        &self.gridref
    }

    /// Grid zone designator, e.g. `"4Q"`.
    pub fn gzd(&self) -> &str {
        self.gridref.gzd()
    }

    /// Two-letter 100 km square, e.g. `"GH"`.
    pub fn grid_square(&self) -> &str {
        self.gridref.square()
    }

    /// Easting within the 100 km square, in cell units.
    pub fn easting(&self) -> u32 {
        self.gridref.easting()
    }

    /// Northing within the 100 km square, in cell units.
    pub fn northing(&self) -> u32 {
        self.gridref.northing()
    }

    /// Digits per component.
    pub fn precision(&self) -> Precision {
        self.gridref.precision()
    }

    /// Cell edge length in metres.
    pub fn size(&self) -> u32 {
        self.precision().size_m()
    }

    /// Latitude of the reference point.
    pub fn latitude(&self) -> f64 {
        self.point.latitude
    }

    /// Longitude of the reference point.
    pub fn longitude(&self) -> f64 {
        self.point.longitude
    }

    /// The reference point.
    pub fn point(&self) -> LatLon {
        self.point
    }

    /// Provenance tag.
    pub fn source(&self) -> Source {
        self.source
    }

    /// Identifier of the enclosing cell at a coarser `precision`.
    ///
    /// Requests at or finer than this grid's precision return the
    /// grid's own identifier.
    pub fn truncated_id(&self, precision: Precision) -> String {
        self.gridref.truncate(precision).to_string()
    }

    /// `true` if `other` is a strictly smaller cell lying inside `self`.
    ///
    /// Purely textual: no provider is consulted.
    pub fn contains(&self, other: &Grid) -> bool {
        self.precision() < other.precision()
            && strip_zeros(&other.truncated_id(self.precision())) == self.key()
    }

    /// `true` if `self` is a strictly smaller cell lying inside `other`.
    pub fn is_contained_by(&self, other: &Grid) -> bool {
        other.contains(self)
    }

    fn key(&self) -> &str {
        strip_zeros(&self.id)
    }
}

fn strip_zeros(id: &str) -> &str {
    id.trim_start_matches('0')
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Grid {}

impl Hash for Grid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
