//! Core types and traits for MGRS grid analysis.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! fundamental abstractions used throughout the workspace: grid precision,
//! coordinate and geometry value types, the compass rose used to classify
//! azimuths, grid-reference parsing, error types, and the two provider
//! traits ([`GridCodec`], [`GeodesyProvider`]) that every geodetic
//! computation is routed through.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compass;
pub mod error;
pub mod geometry;
pub mod gridref;
pub mod precision;
pub mod traits;

pub use compass::{Cardinal, Compass, Heading, HeadingOrder};
pub use error::{CodecError, ConfigError, GridError};
pub use geometry::{Inverse, LatLon, Point, Rect};
pub use gridref::GridRef;
pub use precision::Precision;
pub use traits::{CellAnchor, GeodesyProvider, GridCodec};
