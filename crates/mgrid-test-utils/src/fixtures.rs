//! Grid layouts for collection and navigation tests.
//!
//! Builders panic on provider errors; they are meant for known-good
//! coordinates well inside a UTM zone.

use mgrid_space::{Grid, MgrsSpace};

/// Parse each identifier.
pub fn grids(space: &MgrsSpace, ids: &[&str]) -> Vec<Grid> {
    ids.iter()
        .map(|id| space.grid(id).expect("fixture grid id should parse"))
        .collect()
}

/// `len` cells in a row, starting at `start` and stepping east.
pub fn line_east(space: &MgrsSpace, start: &str, len: usize) -> Vec<Grid> {
    let mut cell = space.grid(start).expect("fixture grid id should parse");
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        if i > 0 {
            cell = space.east(&cell).expect("east step should succeed");
        }
        out.push(cell.clone());
    }
    out
}

/// A `columns` by `rows` block with `south_west` at its south-west
/// corner, listed row by row from the south.
pub fn block(space: &MgrsSpace, south_west: &str, columns: usize, rows: usize) -> Vec<Grid> {
    let mut row_start = space.grid(south_west).expect("fixture grid id should parse");
    let mut out = Vec::with_capacity(columns * rows);
    for r in 0..rows {
        if r > 0 {
            row_start = space.north(&row_start).expect("north step should succeed");
        }
        out.extend(line_east(space, row_start.id(), columns));
    }
    out
}
