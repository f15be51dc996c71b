//! Spatial aggregation over collections of MGRS grids.
//!
//! Two containers implement [`SpatialCollection`]:
//!
//! - [`GridList`]: ordered, duplicates allowed.
//! - [`GridSet`]: unique members in insertion order.
//!
//! The trait provides the aggregate queries: pseudo-centres
//! ([`center_easting`](SpatialCollection::center_easting),
//! [`center_northing`](SpatialCollection::center_northing),
//! [`centeroid`](SpatialCollection::centeroid)), coordinate extremes,
//! nearest member, bounding box, and the boundary scans
//! ([`exterior`](SpatialCollection::exterior),
//! [`interior`](SpatialCollection::interior),
//! [`is_contiguous`](SpatialCollection::is_contiguous)).
//! Adjacency is strictly four-way; diagonals never count.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod collection;
pub mod error;
pub mod list;
pub mod set;

pub use collection::SpatialCollection;
pub use error::AggError;
pub use list::GridList;
pub use set::GridSet;
