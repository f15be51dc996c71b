//! Directional predicates between grids.
//!
//! Each predicate reads "seen from `grid`, `other` lies towards X". In
//! spherical mode that means X appears in the compass heading from `grid`
//! to `other`; in cartesian mode it is a raw coordinate comparison. The
//! two disagree across the antimeridian, where the short geodesic heads
//! east while longitudes decrease.

use mgrid_core::{Cardinal, HeadingOrder};

use crate::grid::Grid;
use crate::space::MgrsSpace;

/// How directional predicates are evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirectionMode {
    /// Classify the geodesic heading at the given granularity and test
    /// for the cardinal letter.
    Spherical(HeadingOrder),
    /// Compare raw latitude or longitude.
    Cartesian,
}

impl Default for DirectionMode {
    fn default() -> Self {
        Self::Spherical(HeadingOrder::default())
    }
}

impl MgrsSpace {
    fn lies_towards(
        &self,
        grid: &Grid,
        other: &Grid,
        cardinal: Cardinal,
        mode: DirectionMode,
    ) -> bool {
        match mode {
            DirectionMode::Spherical(order) => {
                self.heading(grid, other, order).mentions(cardinal)
            }
            DirectionMode::Cartesian => match cardinal {
                Cardinal::North => grid.latitude() < other.latitude(),
                Cardinal::South => grid.latitude() > other.latitude(),
                Cardinal::East => grid.longitude() < other.longitude(),
                Cardinal::West => grid.longitude() > other.longitude(),
            },
        }
    }

    /// `other` lies to the north of `grid`.
    pub fn is_north_of(&self, grid: &Grid, other: &Grid, mode: DirectionMode) -> bool {
        self.lies_towards(grid, other, Cardinal::North, mode)
    }

    /// `other` lies to the south of `grid`.
    pub fn is_south_of(&self, grid: &Grid, other: &Grid, mode: DirectionMode) -> bool {
        self.lies_towards(grid, other, Cardinal::South, mode)
    }

    /// `other` lies to the east of `grid`.
    pub fn is_east_of(&self, grid: &Grid, other: &Grid, mode: DirectionMode) -> bool {
        self.lies_towards(grid, other, Cardinal::East, mode)
    }

    /// `other` lies to the west of `grid`.
    pub fn is_west_of(&self, grid: &Grid, other: &Grid, mode: DirectionMode) -> bool {
        self.lies_towards(grid, other, Cardinal::West, mode)
    }

    /// Both [`is_north_of`](Self::is_north_of) and
    /// [`is_east_of`](Self::is_east_of).
    pub fn is_northeast_of(&self, grid: &Grid, other: &Grid, mode: DirectionMode) -> bool {
        self.is_north_of(grid, other, mode) && self.is_east_of(grid, other, mode)
    }

    /// Both [`is_south_of`](Self::is_south_of) and
    /// [`is_west_of`](Self::is_west_of).
    pub fn is_southwest_of(&self, grid: &Grid, other: &Grid, mode: DirectionMode) -> bool {
        self.is_south_of(grid, other, mode) && self.is_west_of(grid, other, mode)
    }

    /// Negation of [`is_southwest_of`](Self::is_southwest_of).
    pub fn is_not_southwest_of(&self, grid: &Grid, other: &Grid, mode: DirectionMode) -> bool {
        !self.is_southwest_of(grid, other, mode)
    }

    /// Negation of [`is_northeast_of`](Self::is_northeast_of).
    pub fn is_not_northeast_of(&self, grid: &Grid, other: &Grid, mode: DirectionMode) -> bool {
        !self.is_northeast_of(grid, other, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mgrid_core::Precision;

    const SPHERICAL: DirectionMode = DirectionMode::Spherical(HeadingOrder::Quarter);

    fn pair(space: &MgrsSpace) -> (Grid, Grid) {
        let a = space.grid_at(0.0, 179.0, Precision::M1).unwrap();
        let b = space.grid_at(0.0, -179.0, Precision::M1).unwrap();
        (a, b)
    }

    // ── Antimeridian ────────────────────────────────────────────

    #[test]
    fn modes_disagree_across_antimeridian() {
        let s = MgrsSpace::wgs84();
        let (a, b) = pair(&s);

        assert!(s.is_east_of(&a, &b, SPHERICAL));
        assert!(!s.is_east_of(&a, &b, DirectionMode::Cartesian));

        assert!(s.is_west_of(&b, &a, SPHERICAL));
        assert!(!s.is_west_of(&b, &a, DirectionMode::Cartesian));

        assert!(!s.is_west_of(&a, &b, SPHERICAL));
        assert!(s.is_west_of(&a, &b, DirectionMode::Cartesian));
    }

    #[test]
    fn default_mode_is_finest_spherical() {
        assert_eq!(DirectionMode::default(), SPHERICAL);
    }

    // ── Cardinal predicates ─────────────────────────────────────

    #[test]
    fn neighbour_directions() {
        let s = MgrsSpace::wgs84();
        let g = s.grid("4QGH94933312").unwrap();
        let north = s.north(&g).unwrap();
        let east = s.east(&g).unwrap();

        for mode in [SPHERICAL, DirectionMode::Cartesian] {
            assert!(s.is_north_of(&g, &north, mode));
            assert!(!s.is_south_of(&g, &north, mode));
            assert!(s.is_south_of(&north, &g, mode));
            assert!(s.is_east_of(&g, &east, mode));
            assert!(s.is_west_of(&east, &g, mode));
        }
    }

    #[test]
    fn coarse_order_hides_minor_components() {
        let s = MgrsSpace::wgs84();
        let g = s.grid("4QGH94933312").unwrap();
        // A little east of due north.
        let other = s.grid("4QGH95303400").unwrap();
        let fine = DirectionMode::Spherical(HeadingOrder::Quarter);
        let coarse = DirectionMode::Spherical(HeadingOrder::Cardinal);
        assert!(s.is_north_of(&g, &other, fine));
        assert!(s.is_east_of(&g, &other, fine));
        assert!(s.is_north_of(&g, &other, coarse));
        assert!(!s.is_east_of(&g, &other, coarse));
    }

    // ── Ordering helpers ────────────────────────────────────────

    #[test]
    fn compound_directions() {
        let s = MgrsSpace::wgs84();
        let g = s.grid("4QGH94933312").unwrap();
        let ne = s.grid("4QGH95303400").unwrap();
        let sw = s.grid("4QGH94003200").unwrap();

        assert!(s.is_northeast_of(&g, &ne, SPHERICAL));
        assert!(!s.is_not_northeast_of(&g, &ne, SPHERICAL));
        assert!(s.is_southwest_of(&g, &sw, SPHERICAL));
        assert!(!s.is_not_southwest_of(&g, &sw, SPHERICAL));

        assert!(!s.is_southwest_of(&g, &ne, SPHERICAL));
        assert!(s.is_not_southwest_of(&g, &ne, SPHERICAL));
        assert!(s.is_not_northeast_of(&g, &sw, DirectionMode::Cartesian));
    }
}
