//! mgrid: geodetic analysis in MGRS grid space.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all mgrid sub-crates. For most users, adding `mgrid` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use mgrid::prelude::*;
//!
//! let space = MgrsSpace::wgs84();
//! let g = space.grid("4QGH94933312").unwrap();
//! assert_eq!(g.gzd(), "4Q");
//! assert_eq!(g.size(), 10);
//!
//! // Four cells in a row: every one is on the boundary.
//! let mut line = GridList::new();
//! let mut cell = g.clone();
//! for _ in 0..4 {
//!     line.push(cell.clone());
//!     cell = space.east(&cell).unwrap();
//! }
//! assert_eq!(line.exterior(&space).unwrap().len(), 4);
//! assert!(line.interior(&space).unwrap().is_empty());
//!
//! // A radial buffer always contains at least its seed.
//! let disk = space.buffer(&g, 25.0).unwrap();
//! assert!(disk.contains(&g));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `mgrid-core` | Precision, coordinates, compass rose, provider traits, errors |
//! | [`geodesy`] | `mgrid-geodesy` | WGS84 Vincenty geodesy and the MGRS codec |
//! | [`space`] | `mgrid-space` | `Grid`, `MgrsSpace` navigation, buffers |
//! | [`agg`] | `mgrid-agg` | `GridList`, `GridSet` and aggregate queries |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and provider traits (`mgrid-core`).
///
/// Contains [`types::Precision`], [`types::LatLon`], the compass rose
/// ([`types::Compass`]), and the [`types::GridCodec`] and
/// [`types::GeodesyProvider`] traits.
pub use mgrid_core as types;

/// Built-in WGS84 providers (`mgrid-geodesy`).
pub use mgrid_geodesy as geodesy;

/// Grid cells and navigation (`mgrid-space`).
pub use mgrid_space as space;

/// Collections and aggregate queries (`mgrid-agg`).
pub use mgrid_agg as agg;

/// Common imports for typical mgrid usage.
///
/// ```rust
/// use mgrid::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use mgrid_core::{
        Cardinal, CellAnchor, Compass, Heading, HeadingOrder, LatLon, Point, Precision, Rect,
    };

    // Errors
    pub use mgrid_core::{CodecError, ConfigError, GridError};
    pub use mgrid_agg::AggError;

    // Providers
    pub use mgrid_core::{GeodesyProvider, GridCodec};
    pub use mgrid_geodesy::{MgrsCodec, Vincenty, VincentyConfig};

    // Space
    pub use mgrid_space::{DirectionMode, Grid, MgrsSpace, Source, SpaceConfig};

    // Collections
    pub use mgrid_agg::{GridList, GridSet, SpatialCollection};
}
