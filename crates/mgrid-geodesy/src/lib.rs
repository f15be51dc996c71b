//! WGS84 providers for mgrid.
//!
//! This crate supplies the two geodetic collaborators every grid operation
//! is routed through:
//!
//! - [`Vincenty`]: a [`GeodesyProvider`](mgrid_core::GeodesyProvider)
//!   solving the direct and inverse geodesic problems with Vincenty's
//!   formulae.
//! - [`MgrsCodec`]: a [`GridCodec`](mgrid_core::GridCodec) converting
//!   between coordinates and MGRS identifiers over UTM zones and the
//!   polar UPS regions, backed by the `geoconvert` crate.
//!
//! Both assume the WGS84 ellipsoid ([`ellipsoid::WGS84`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod ellipsoid;
pub mod mgrs;
pub mod vincenty;

pub use ellipsoid::Ellipsoid;
pub use mgrid_core::CellAnchor;
pub use mgrs::MgrsCodec;
pub use vincenty::{Vincenty, VincentyConfig};
