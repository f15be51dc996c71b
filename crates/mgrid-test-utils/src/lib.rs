//! Test doubles and fixtures for mgrid development.
//!
//! Provides call-counting wrappers around the provider traits
//! ([`GridCodec`], [`GeodesyProvider`]) so tests can assert which
//! operations reach which provider, plus fixture builders for common
//! grid layouts.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use mgrid_core::{CellAnchor, CodecError, GeodesyProvider, GridCodec, Inverse, LatLon, Precision};

pub use fixtures::{block, grids, line_east};

#[derive(Debug, Default)]
struct Counters {
    encodes: AtomicUsize,
    decodes: AtomicUsize,
    projects: AtomicUsize,
    inverses: AtomicUsize,
}

/// Shared call tallies for [`CountingCodec`] and [`CountingGeodesy`].
///
/// Clones share the same counters, so keep one handle in the test and
/// give clones to the wrappers.
#[derive(Clone, Debug, Default)]
pub struct CallCounts {
    inner: Arc<Counters>,
}

impl CallCounts {
    pub fn encodes(&self) -> usize {
        self.inner.encodes.load(Ordering::Relaxed)
    }

    pub fn decodes(&self) -> usize {
        self.inner.decodes.load(Ordering::Relaxed)
    }

    pub fn projects(&self) -> usize {
        self.inner.projects.load(Ordering::Relaxed)
    }

    pub fn inverses(&self) -> usize {
        self.inner.inverses.load(Ordering::Relaxed)
    }

    /// Total geodesy calls (project + inverse).
    pub fn geodesy(&self) -> usize {
        self.projects() + self.inverses()
    }

    /// Zero every counter.
    pub fn reset(&self) {
        for c in [
            &self.inner.encodes,
            &self.inner.decodes,
            &self.inner.projects,
            &self.inner.inverses,
        ] {
            c.store(0, Ordering::Relaxed);
        }
    }
}

/// [`GridCodec`] wrapper that counts calls before delegating.
pub struct CountingCodec<C> {
    inner: C,
    counts: CallCounts,
}

impl<C: GridCodec> CountingCodec<C> {
    pub fn new(inner: C, counts: CallCounts) -> Self {
        Self { inner, counts }
    }
}

impl<C: GridCodec> GridCodec for CountingCodec<C> {
    fn encode(&self, point: LatLon, precision: Precision) -> Result<String, CodecError> {
        self.counts.inner.encodes.fetch_add(1, Ordering::Relaxed);
        self.inner.encode(point, precision)
    }

    fn decode(&self, grid_id: &str) -> Result<LatLon, CodecError> {
        self.counts.inner.decodes.fetch_add(1, Ordering::Relaxed);
        self.inner.decode(grid_id)
    }

    fn centre(&self, grid_id: &str) -> Result<LatLon, CodecError> {
        self.counts.inner.decodes.fetch_add(1, Ordering::Relaxed);
        self.inner.centre(grid_id)
    }

    fn anchor(&self) -> CellAnchor {
        self.inner.anchor()
    }
}

/// [`GeodesyProvider`] wrapper that counts calls before delegating.
pub struct CountingGeodesy<G> {
    inner: G,
    counts: CallCounts,
}

impl<G: GeodesyProvider> CountingGeodesy<G> {
    pub fn new(inner: G, counts: CallCounts) -> Self {
        Self { inner, counts }
    }
}

impl<G: GeodesyProvider> GeodesyProvider for CountingGeodesy<G> {
    fn project(&self, origin: LatLon, distance_m: f64, azimuth_deg: f64) -> LatLon {
        self.counts.inner.projects.fetch_add(1, Ordering::Relaxed);
        self.inner.project(origin, distance_m, azimuth_deg)
    }

    fn inverse(&self, from: LatLon, to: LatLon) -> Inverse {
        self.counts.inner.inverses.fetch_add(1, Ordering::Relaxed);
        self.inner.inverse(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mgrid_geodesy::{MgrsCodec, Vincenty};

    #[test]
    fn counters_are_shared_between_clones() {
        let counts = CallCounts::default();
        let codec = CountingCodec::new(MgrsCodec::default(), counts.clone());
        let geo = CountingGeodesy::new(Vincenty::wgs84(), counts.clone());

        let p = codec.decode("4QGH94933312").unwrap();
        codec.encode(p, Precision::M10).unwrap();
        geo.project(p, 10.0, 0.0);
        geo.inverse(p, p);

        assert_eq!(counts.encodes(), 1);
        assert_eq!(counts.decodes(), 1);
        assert_eq!(counts.geodesy(), 2);

        counts.reset();
        assert_eq!(counts.decodes() + counts.encodes() + counts.geodesy(), 0);
    }

    #[test]
    fn anchor_is_forwarded_and_centre_counts_as_decode() {
        let counts = CallCounts::default();
        let codec = CountingCodec::new(MgrsCodec::new(CellAnchor::SouthWest), counts.clone());
        assert_eq!(codec.anchor(), CellAnchor::SouthWest);

        let centre = codec.centre("4QGH94933312").unwrap();
        let corner = codec.decode("4QGH94933312").unwrap();
        assert_eq!(counts.decodes(), 2);
        assert!(centre.latitude > corner.latitude);
    }
}
