//! The [`SpatialCollection`] trait and the aggregate queries it provides.

use std::collections::HashSet;

use mgrid_core::{Precision, Rect};
use mgrid_space::{Grid, MgrsSpace};
use smallvec::SmallVec;
use tracing::debug;

use crate::error::AggError;

/// A container of [`Grid`]s that supports spatial aggregate queries.
///
/// Implementors supply storage and membership; every query is a provided
/// method. Queries that select a subset of members ("offspring") return
/// `Self`, so a list yields a list and a set yields a set. Offspring keep
/// the receiver's order.
///
/// Queries that need a projection or geodesic take the [`MgrsSpace`]
/// holding the providers. Queries with no answer for an empty collection
/// fail with [`AggError::EmptyCollection`].
pub trait SpatialCollection: Sized {
    /// Members in container order.
    fn grids(&self) -> impl Iterator<Item = &Grid>;

    /// A collection of the same kind holding `grids`.
    fn from_grids<I: IntoIterator<Item = Grid>>(grids: I) -> Self;

    /// Membership by grid equality.
    fn contains_grid(&self, grid: &Grid) -> bool;

    /// Number of members.
    fn len(&self) -> usize;

    /// `true` if there are no members.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ── Pseudo-centres ──────────────────────────────────────────

    /// The grid at (mean latitude, maximum longitude) of the members.
    fn center_easting(&self, space: &MgrsSpace) -> Result<Grid, AggError> {
        let s = Summary::of(self, "center_easting")?;
        Ok(space.grid_at(s.mean_latitude(), s.east, s.precision)?)
    }

    /// The grid at (maximum latitude, mean longitude) of the members.
    fn center_northing(&self, space: &MgrsSpace) -> Result<Grid, AggError> {
        let s = Summary::of(self, "center_northing")?;
        Ok(space.grid_at(s.north, s.mean_longitude(), s.precision)?)
    }

    /// Alias for [`center_easting`](Self::center_easting).
    fn center_x(&self, space: &MgrsSpace) -> Result<Grid, AggError> {
        self.center_easting(space)
    }

    /// Alias for [`center_northing`](Self::center_northing).
    fn center_y(&self, space: &MgrsSpace) -> Result<Grid, AggError> {
        self.center_northing(space)
    }

    /// The grid at [`center_northing`](Self::center_northing)'s latitude
    /// and [`center_easting`](Self::center_easting)'s longitude.
    ///
    /// This lands on the collection's north-east corner cell, not its
    /// mean position.
    fn centeroid(&self, space: &MgrsSpace) -> Result<Grid, AggError> {
        let s = Summary::of(self, "centeroid")?;
        let northing = self.center_northing(space)?;
        let easting = self.center_easting(space)?;
        Ok(space.grid_at(northing.latitude(), easting.longitude(), s.precision)?)
    }

    // ── Extremes ────────────────────────────────────────────────

    /// Every member sharing the greatest latitude.
    fn northernmost(&self) -> Result<Self, AggError> {
        extreme(self, "northernmost", Grid::latitude, f64::max)
    }

    /// Every member sharing the least latitude.
    fn southernmost(&self) -> Result<Self, AggError> {
        extreme(self, "southernmost", Grid::latitude, f64::min)
    }

    /// Every member sharing the greatest longitude.
    fn easternmost(&self) -> Result<Self, AggError> {
        extreme(self, "easternmost", Grid::longitude, f64::max)
    }

    /// Every member sharing the least longitude.
    fn westernmost(&self) -> Result<Self, AggError> {
        extreme(self, "westernmost", Grid::longitude, f64::min)
    }

    /// Axis-aligned box spanning the members' extreme coordinates.
    fn bounding_box(&self) -> Result<Rect, AggError> {
        let s = Summary::of(self, "bounding_box")?;
        Ok(Rect::from_extremes(s.north, s.south, s.east, s.west))
    }

    // ── Proximity ───────────────────────────────────────────────

    /// The member closest to `target`.
    ///
    /// A single closest member is returned unchanged. Members tied at
    /// exactly the same distance are collapsed to their
    /// [`center_easting`](Self::center_easting).
    fn nearest_to(&self, space: &MgrsSpace, target: &Grid) -> Result<Grid, AggError> {
        let mut best = f64::INFINITY;
        let mut tied: SmallVec<[&Grid; 4]> = SmallVec::new();
        for g in self.grids() {
            let d = space.distance(g, target);
            if tied.is_empty() || d < best {
                best = d;
                tied.clear();
                tied.push(g);
            } else if d == best {
                tied.push(g);
            }
        }
        match tied.as_slice() {
            [] => Err(AggError::EmptyCollection {
                operation: "nearest_to",
            }),
            [only] => Ok((*only).clone()),
            many => {
                debug!(grid = %target, ties = many.len(), distance_m = best, "nearest tie");
                Self::from_grids(many.iter().map(|g| (*g).clone())).center_easting(space)
            }
        }
    }

    // ── Boundary ────────────────────────────────────────────────

    /// Members with at least one cardinal neighbour outside the
    /// collection.
    fn exterior(&self, space: &MgrsSpace) -> Result<Self, AggError> {
        let members: HashSet<&Grid> = self.grids().collect();
        let mut boundary = Vec::new();
        for g in self.grids() {
            if space.neighbours(g)?.iter().any(|n| !members.contains(n)) {
                boundary.push(g.clone());
            }
        }
        debug!(members = self.len(), boundary = boundary.len(), "exterior scan");
        Ok(Self::from_grids(boundary))
    }

    /// Members whose four cardinal neighbours are all members.
    fn interior(&self, space: &MgrsSpace) -> Result<Self, AggError> {
        let exterior = self.exterior(space)?;
        Ok(Self::from_grids(
            self.grids().filter(|g| !exterior.contains_grid(g)).cloned(),
        ))
    }

    /// `true` if all four cardinal neighbours of `grid` share its
    /// membership status, whether or not `grid` is itself a member.
    fn is_contiguous(&self, space: &MgrsSpace, grid: &Grid) -> Result<bool, AggError> {
        let inside = self.contains_grid(grid);
        Ok(space.neighbours(grid)?.iter().all(|n| self.contains_grid(n) == inside))
    }

    /// Negation of [`is_contiguous`](Self::is_contiguous).
    fn is_isolated(&self, space: &MgrsSpace, grid: &Grid) -> Result<bool, AggError> {
        self.is_contiguous(space, grid).map(|c| !c)
    }
}

/// One-pass coordinate statistics over a non-empty collection.
struct Summary {
    count: usize,
    latitude_sum: f64,
    longitude_sum: f64,
    north: f64,
    south: f64,
    east: f64,
    west: f64,
    /// Finest precision among the members.
    precision: Precision,
}

impl Summary {
    fn of<C: SpatialCollection>(c: &C, operation: &'static str) -> Result<Self, AggError> {
        let mut s = Summary {
            count: 0,
            latitude_sum: 0.0,
            longitude_sum: 0.0,
            north: f64::NEG_INFINITY,
            south: f64::INFINITY,
            east: f64::NEG_INFINITY,
            west: f64::INFINITY,
            precision: Precision::MIN,
        };
        for g in c.grids() {
            s.count += 1;
            s.latitude_sum += g.latitude();
            s.longitude_sum += g.longitude();
            s.north = s.north.max(g.latitude());
            s.south = s.south.min(g.latitude());
            s.east = s.east.max(g.longitude());
            s.west = s.west.min(g.longitude());
            s.precision = s.precision.max(g.precision());
        }
        if s.count == 0 {
            return Err(AggError::EmptyCollection { operation });
        }
        Ok(s)
    }

    fn mean_latitude(&self) -> f64 {
        self.latitude_sum / self.count as f64
    }

    fn mean_longitude(&self) -> f64 {
        self.longitude_sum / self.count as f64
    }
}

fn extreme<C: SpatialCollection>(
    c: &C,
    operation: &'static str,
    coordinate: fn(&Grid) -> f64,
    pick: fn(f64, f64) -> f64,
) -> Result<C, AggError> {
    let target = c
        .grids()
        .map(coordinate)
        .reduce(pick)
        .ok_or(AggError::EmptyCollection { operation })?;
    Ok(C::from_grids(c.grids().filter(|g| coordinate(g) == target).cloned()))
}
