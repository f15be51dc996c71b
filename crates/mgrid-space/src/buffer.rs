//! Area enumeration around a grid.

use mgrid_core::{Cardinal, GridError};
use tracing::debug;

use crate::grid::Grid;
use crate::space::MgrsSpace;

/// Whole metres in `distance_m`; negative and non-finite inputs count
/// as zero.
fn whole_metres(distance_m: f64) -> u64 {
    if distance_m.is_finite() && distance_m > 0.0 {
        distance_m.trunc() as u64
    } else {
        0
    }
}

impl MgrsSpace {
    /// Most cells a single [`rect_buffer`](Self::rect_buffer) or
    /// [`buffer`](Self::buffer) call will enumerate.
    pub const MAX_AREA_CELLS: u64 = 1 << 20;

    /// Cells in a block of roughly `width_m` by `height_m` metres
    /// centred on `grid`, at `grid`'s precision.
    ///
    /// `height_m` defaults to `width_m`. The walk starts half the width
    /// west and half the height south of `grid`, then steps east along
    /// each row and north between rows. Each axis spans
    /// `max(floor(extent / size), 1)` cells. Cells are returned row by
    /// row from the south-west.
    ///
    /// Fails with [`GridError::AreaTooLarge`] before any navigation if
    /// the block would exceed [`MAX_AREA_CELLS`](Self::MAX_AREA_CELLS).
    pub fn rect_buffer(
        &self,
        grid: &Grid,
        width_m: f64,
        height_m: Option<f64>,
    ) -> Result<Vec<Grid>, GridError> {
        let width = whole_metres(width_m);
        let height = height_m
            .map(whole_metres)
            .filter(|h| *h > 0)
            .unwrap_or(width);
        let size = u64::from(grid.size());
        let columns = (width / size).max(1);
        let rows = (height / size).max(1);
        let cells = columns.checked_mul(rows);
        match cells {
            Some(n) if n <= Self::MAX_AREA_CELLS => {}
            _ => {
                return Err(GridError::AreaTooLarge {
                    cells,
                    limit: Self::MAX_AREA_CELLS,
                })
            }
        }

        let west = self.translate(grid, (width / 2) as f64, Cardinal::West.azimuth())?;
        let mut row = self.translate(&west, (height / 2) as f64, Cardinal::South.azimuth())?;

        let mut out = Vec::with_capacity(usize::try_from(rows * columns).unwrap_or_default());
        for r in 0..rows {
            if r > 0 {
                row = self.north(&row)?;
            }
            let mut cell = row.clone();
            for c in 0..columns {
                if c > 0 {
                    cell = self.east(&cell)?;
                }
                out.push(cell.clone());
            }
        }
        debug!(grid = %grid, rows, columns, "rect buffer enumerated");
        Ok(out)
    }

    /// Cells at `grid`'s precision whose reference points lie within
    /// `radius_m` metres of `grid`'s.
    ///
    /// Enumerates a `2 * radius_m` square with
    /// [`rect_buffer`](Self::rect_buffer) and keeps the cells inside the
    /// radius. Never empty: if nothing qualifies the result is `[grid]`.
    pub fn buffer(&self, grid: &Grid, radius_m: f64) -> Result<Vec<Grid>, GridError> {
        let square = self.rect_buffer(grid, radius_m * 2.0, None)?;
        let scanned = square.len();
        let within: Vec<Grid> = square
            .into_iter()
            .filter(|cell| self.distance(grid, cell) <= radius_m)
            .collect();
        debug!(grid = %grid, radius_m, scanned, kept = within.len(), "buffer filtered");
        if within.is_empty() {
            return Ok(vec![grid.clone()]);
        }
        Ok(within)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seed(space: &MgrsSpace) -> Grid {
        space.grid("4QGH94933312").unwrap()
    }

    // ── rect_buffer ─────────────────────────────────────────────

    #[test]
    fn square_block_covers_requested_extent() {
        let s = MgrsSpace::wgs84();
        let g = seed(&s);
        let block = s.rect_buffer(&g, 50.0, None).unwrap();
        assert_eq!(block.len(), 25);
        assert!(block.contains(&g));
        assert!(block.iter().all(|c| c.precision() == g.precision()));
        let unique: std::collections::HashSet<_> = block.iter().collect();
        assert_eq!(unique.len(), 25);
    }

    #[test]
    fn rectangular_block_uses_separate_height() {
        let s = MgrsSpace::wgs84();
        let g = seed(&s);
        let block = s.rect_buffer(&g, 30.0, Some(10.0)).unwrap();
        assert_eq!(block.len(), 3);
        // One row: all share a northing.
        assert!(block.iter().all(|c| c.northing() == block[0].northing()));
        assert!(block.windows(2).all(|w| w[1].easting() == w[0].easting() + 1));
    }

    #[test]
    fn zero_height_falls_back_to_width() {
        let s = MgrsSpace::wgs84();
        let g = seed(&s);
        let block = s.rect_buffer(&g, 20.0, Some(0.0)).unwrap();
        assert_eq!(block.len(), 4);
    }

    #[test]
    fn sub_cell_request_yields_one_cell() {
        let s = MgrsSpace::wgs84();
        let g = seed(&s);
        assert_eq!(s.rect_buffer(&g, 3.0, None).unwrap(), vec![g]);
    }

    #[test]
    fn oversized_block_is_rejected() {
        let s = MgrsSpace::wgs84();
        let g = s.grid("4QGH9493533125").unwrap();
        match s.rect_buffer(&g, 6.0e6, Some(1.0e6)) {
            Err(GridError::AreaTooLarge { cells, limit }) => {
                assert_eq!(cells, Some(6_000_000_000_000));
                assert_eq!(limit, MgrsSpace::MAX_AREA_CELLS);
            }
            other => panic!("expected AreaTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn overflowing_block_is_rejected() {
        let s = MgrsSpace::wgs84();
        let g = s.grid("4QGH9493533125").unwrap();
        assert!(matches!(
            s.rect_buffer(&g, f64::MAX, None),
            Err(GridError::AreaTooLarge { cells: None, .. })
        ));
    }

    #[test]
    fn one_row_over_limit_is_rejected() {
        let s = MgrsSpace::wgs84();
        // 1024 x 1024 cells of 100 km is the limit.
        let g = s.grid("4QGH").unwrap();
        assert!(matches!(
            s.rect_buffer(&g, 1024.0e5, Some(1025.0e5)),
            Err(GridError::AreaTooLarge { cells: Some(1_049_600), .. })
        ));
    }

    // ── buffer ──────────────────────────────────────────────────

    #[test]
    fn buffer_keeps_cells_within_radius() {
        let s = MgrsSpace::wgs84();
        let g = seed(&s);
        let disk = s.buffer(&g, 25.0).unwrap();
        assert!(disk.contains(&g));
        assert!(disk.len() > 9 && disk.len() < 25, "{} cells", disk.len());
        for cell in &disk {
            assert!(s.distance(&g, cell) <= 25.0);
        }
    }

    #[test]
    fn buffer_never_empty() {
        let s = MgrsSpace::wgs84();
        let g = seed(&s);
        assert_eq!(s.buffer(&g, -1.0).unwrap(), vec![g.clone()]);
        assert_eq!(s.buffer(&g, 0.0).unwrap(), vec![g]);
    }

    #[test]
    fn oversized_radius_is_rejected() {
        let s = MgrsSpace::wgs84();
        let g = s.grid("4QGH9493533125").unwrap();
        assert!(matches!(
            s.buffer(&g, 1.0e6),
            Err(GridError::AreaTooLarge { .. })
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn buffer_is_nonempty_and_bounded(
            lat in -60.0f64..60.0,
            lon in -170.0f64..170.0,
            radius in 0.0f64..400.0,
        ) {
            let s = MgrsSpace::wgs84();
            let g = s.grid_at(lat, lon, mgrid_core::Precision::M100).unwrap();
            let disk = s.buffer(&g, radius).unwrap();
            prop_assert!(!disk.is_empty());
            if disk.as_slice() != [g.clone()] {
                for cell in &disk {
                    prop_assert!(s.distance(&g, cell) <= radius + 1e-6);
                }
            }
        }
    }
}
