//! [`GridList`]: an ordered collection that allows duplicates.

use mgrid_space::Grid;

use crate::collection::SpatialCollection;
use crate::set::GridSet;

/// Ordered sequence of grids. Duplicates are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridList(Vec<Grid>);

impl GridList {
    /// An empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a grid.
    pub fn push(&mut self, grid: Grid) {
        self.0.push(grid);
    }

    /// Member at `index`.
    pub fn get(&self, index: usize) -> Option<&Grid> {
        self.0.get(index)
    }

    /// Iterate in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Grid> {
        self.0.iter()
    }

    /// The members as a slice.
    pub fn as_slice(&self) -> &[Grid] {
        &self.0
    }

    /// Unique members in first-seen order.
    pub fn to_set(&self) -> GridSet {
        self.0.iter().cloned().collect()
    }

    /// Unwrap into the underlying vector.
    pub fn into_vec(self) -> Vec<Grid> {
        self.0
    }
}

impl SpatialCollection for GridList {
    fn grids(&self) -> impl Iterator<Item = &Grid> {
        self.0.iter()
    }

    fn from_grids<I: IntoIterator<Item = Grid>>(grids: I) -> Self {
        grids.into_iter().collect()
    }

    fn contains_grid(&self, grid: &Grid) -> bool {
        self.0.contains(grid)
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<Grid>> for GridList {
    fn from(grids: Vec<Grid>) -> Self {
        Self(grids)
    }
}

impl FromIterator<Grid> for GridList {
    fn from_iter<I: IntoIterator<Item = Grid>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Grid> for GridList {
    fn extend<I: IntoIterator<Item = Grid>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for GridList {
    type Item = Grid;
    type IntoIter = std::vec::IntoIter<Grid>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a GridList {
    type Item = &'a Grid;
    type IntoIter = std::slice::Iter<'a, Grid>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mgrid_space::MgrsSpace;
    use mgrid_test_utils::grids;

    #[test]
    fn keeps_order_and_duplicates() {
        let s = MgrsSpace::wgs84();
        let mut list = GridList::from(grids(&s, &["4QGH9433", "4QGH9533"]));
        list.extend(grids(&s, &["4QGH9433"]));
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(2), list.get(0));
        assert!(list.contains_grid(&s.grid("04QGH9533").unwrap()));
    }

    #[test]
    fn to_set_dedups_in_first_seen_order() {
        let s = MgrsSpace::wgs84();
        let list = GridList::from(grids(&s, &["4QGH9533", "4QGH9433", "4QGH9533"]));
        let set = list.to_set();
        let ids: Vec<&str> = set.iter().map(Grid::id).collect();
        assert_eq!(ids, ["4QGH9533", "4QGH9433"]);
        assert_eq!(set.to_list().into_vec().len(), 2);
    }
}
