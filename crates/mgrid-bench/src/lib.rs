//! Benchmark profiles for mgrid navigation and aggregation.
//!
//! - [`square_block`]: a `side` by `side` block of 10 m cells on Maui
//! - [`scattered_targets`]: deterministic probe cells around the block

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use mgrid_agg::GridSet;
use mgrid_space::{Grid, MgrsSpace};

/// South-west corner of every benchmark block.
pub const ORIGIN: &str = "4QGH94933312";

/// A `side` by `side` block of cells starting at [`ORIGIN`].
///
/// Panics if navigation fails, which cannot happen for blocks that stay
/// inside the origin's 100 km square (`side <= 500`).
pub fn square_block(space: &MgrsSpace, side: usize) -> GridSet {
    let mut row = space.grid(ORIGIN).unwrap();
    let mut out = GridSet::new();
    for r in 0..side {
        if r > 0 {
            row = space.north(&row).unwrap();
        }
        let mut cell = row.clone();
        for c in 0..side {
            if c > 0 {
                cell = space.east(&cell).unwrap();
            }
            out.insert(cell.clone());
        }
    }
    out
}

/// `count` cells scattered deterministically within a few hundred metres
/// of [`ORIGIN`].
pub fn scattered_targets(space: &MgrsSpace, count: usize) -> Vec<Grid> {
    let origin = space.grid(ORIGIN).unwrap();
    (0..count as u64)
        .map(|i| {
            let distance = (i.wrapping_mul(6364136223846793007) % 400) as f64;
            let azimuth = (i.wrapping_mul(1442695040888963407) % 360) as f64;
            space.translate(&origin, distance, azimuth).unwrap()
        })
        .collect()
}
