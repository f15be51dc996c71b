//! [`GridSet`]: a collection of unique grids in insertion order.

use indexmap::IndexSet;
use mgrid_space::Grid;

use crate::collection::SpatialCollection;
use crate::list::GridList;

/// Set of distinct grids.
///
/// Backed by an [`IndexSet`], so iteration follows first insertion and
/// aggregate queries that depend on member order are deterministic.
#[derive(Clone, Debug, Default)]
pub struct GridSet(IndexSet<Grid>);

impl GridSet {
    /// An empty set.
    pub fn new() -> Self {
        Self(IndexSet::new())
    }

    /// Add `grid`, returning `false` if an equal grid was already present.
    pub fn insert(&mut self, grid: Grid) -> bool {
        self.0.insert(grid)
    }

    /// Remove `grid`, returning whether it was present. Order of the
    /// remaining members is preserved.
    pub fn remove(&mut self, grid: &Grid) -> bool {
        self.0.shift_remove(grid)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, Grid> {
        self.0.iter()
    }

    /// Members as a list, in insertion order.
    pub fn to_list(&self) -> GridList {
        self.0.iter().cloned().collect()
    }
}

impl PartialEq for GridSet {
    /// Set equality; insertion order is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().all(|g| other.0.contains(g))
    }
}

impl Eq for GridSet {}

impl SpatialCollection for GridSet {
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

impl FromIterator<Grid> for GridSet {
    fn from_iter<I: IntoIterator<Item = Grid>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Grid> for GridSet {
    fn extend<I: IntoIterator<Item = Grid>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for GridSet {
    type Item = Grid;
    type IntoIter = indexmap::set::IntoIter<Grid>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a GridSet {
    type Item = &'a Grid;
    type IntoIter = indexmap::set::Iter<'a, Grid>;

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
    fn insert_rejects_equal_grids() {
        let s = MgrsSpace::wgs84();
        let mut set = GridSet::new();
        assert!(set.insert(s.grid("4QGH9433").unwrap()));
        assert!(!set.insert(s.grid("04qgh 94 33").unwrap()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_preserves_order() {
        let s = MgrsSpace::wgs84();
        let mut set: GridSet = grids(&s, &["4QGH9433", "4QGH9533", "4QGH9633"])
            .into_iter()
            .collect();
        assert!(set.remove(&s.grid("4QGH9533").unwrap()));
        let ids: Vec<&str> = set.iter().map(Grid::id).collect();
        assert_eq!(ids, ["4QGH9433", "4QGH9633"]);
    }

    #[test]
    fn equality_ignores_order() {
        let s = MgrsSpace::wgs84();
        let a: GridSet = grids(&s, &["4QGH9433", "4QGH9533"]).into_iter().collect();
        let b: GridSet = grids(&s, &["4QGH9533", "4QGH9433"]).into_iter().collect();
        assert_eq!(a, b);
    }
}
