//! MGRS grid cells and geodesic navigation between them.
//!
//! A [`Grid`] is an immutable cell value: a parsed MGRS identifier plus
//! the reference point its codec decoded it to. [`MgrsSpace`] holds the
//! injected [`GridCodec`](mgrid_core::GridCodec) and
//! [`GeodesyProvider`](mgrid_core::GeodesyProvider) and exposes every
//! operation that needs them:
//!
//! - construction from identifiers or coordinates
//! - resizing between precisions
//! - translation and cardinal neighbours
//! - distance, bearing and compass heading
//! - directional predicates ([`DirectionMode`])
//! - adjacency and per-cell bounds
//! - rectangular and radial buffers
//!
//! Containment needs no provider and lives on [`Grid`] itself.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod direction;
pub mod grid;
pub mod space;

pub use config::SpaceConfig;
pub use direction::DirectionMode;
pub use grid::{Grid, Source};
pub use space::MgrsSpace;
