use mgrid_core::{CellAnchor, HeadingOrder, Precision};
use mgrid_space::{DirectionMode, Grid, MgrsSpace, Source, SpaceConfig};
use mgrid_test_utils::line_east;
use proptest::prelude::*;

/// Coordinates away from zone and band edges and the Norway/Svalbard
/// exceptions, where cells are clipped.
fn interior_point() -> impl Strategy<Value = (f64, f64)> {
    (-70.0f64..70.0, -179.0f64..179.0).prop_filter("near a zone or band edge", |(lat, lon)| {
        let zone_offset = (lon + 180.0).rem_euclid(6.0);
        let band_offset = (lat + 80.0).rem_euclid(8.0);
        (0.05..5.95).contains(&zone_offset)
            && (0.05..7.95).contains(&band_offset)
            && !((56.0..64.0).contains(lat) && (0.0..12.0).contains(lon))
    })
}

fn anchor() -> impl Strategy<Value = CellAnchor> {
    prop_oneof![Just(CellAnchor::Centre), Just(CellAnchor::SouthWest)]
}

fn anchored(anchor: CellAnchor) -> MgrsSpace {
    MgrsSpace::from_config(SpaceConfig {
        anchor,
        ..SpaceConfig::default()
    })
    .unwrap()
}

fn precision(range: std::ops::RangeInclusive<u8>) -> impl Strategy<Value = Precision> {
    range.prop_map(|d| Precision::new(d).unwrap())
}

#[test]
fn worked_example() {
    let s = MgrsSpace::wgs84();
    let g = s.grid("4QGH94933312").unwrap();
    assert_eq!(g.gzd(), "4Q");
    assert_eq!(g.grid_square(), "GH");
    assert_eq!(g.easting(), 9493);
    assert_eq!(g.northing(), 3312);
    assert_eq!(g.precision(), Precision::M10);
    assert_eq!(g.size(), 10);
    assert_eq!(s.north(&g).unwrap(), s.grid("4QGH94933313").unwrap());
}

#[test]
fn worked_example_from_south_west_corner() {
    let s = anchored(CellAnchor::SouthWest);
    let g = s.grid("4QGH94933312").unwrap();
    assert_eq!(s.north(&g).unwrap(), s.grid("4QGH94933313").unwrap());
    assert_eq!(s.east(&g).unwrap().id(), "4QGH94943312");
    assert_eq!(s.south(&g).unwrap().id(), "4QGH94933311");
    assert_eq!(s.west(&g).unwrap().id(), "4QGH94923312");
}

#[test]
fn antimeridian_modes_disagree() {
    let s = MgrsSpace::wgs84();
    let a = s.grid_at(0.0, 179.0, Precision::M1).unwrap();
    let b = s.grid_at(0.0, -179.0, Precision::M1).unwrap();
    let spherical = DirectionMode::Spherical(HeadingOrder::Quarter);

    assert!(s.is_east_of(&a, &b, spherical));
    assert!(!s.is_east_of(&a, &b, DirectionMode::Cartesian));
    assert!(s.is_west_of(&b, &a, spherical));
    assert!(!s.is_west_of(&b, &a, DirectionMode::Cartesian));
}

#[test]
fn line_cells_adjoin_in_sequence() {
    let s = MgrsSpace::wgs84();
    let line = line_east(&s, "4QGH94933312", 4);
    assert_eq!(line.len(), 4);
    for pair in line.windows(2) {
        assert!(s.adjoins(&pair[0], &pair[1]).unwrap());
    }
    assert!(!s.adjoins(&line[0], &line[2]).unwrap());
}

#[test]
fn mgrs_accessors_match_resize() {
    let s = MgrsSpace::wgs84();
    let g = s.grid_at(51.477_8, -0.001_5, Precision::M1).unwrap();
    let expected: Vec<String> = Precision::all().map(|p| g.truncated_id(p)).collect();
    let got: Vec<String> = [
        s.mgrs100000(&g),
        s.mgrs10000(&g),
        s.mgrs1000(&g),
        s.mgrs100(&g),
        s.mgrs10(&g),
        s.mgrs1(&g),
    ]
    .into_iter()
    .map(|r| r.unwrap().id().to_string())
    .collect();
    assert_eq!(got, expected);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn resize_is_idempotent(
        (lat, lon) in interior_point(),
        start in precision(0..=5),
        target in precision(0..=5),
    ) {
        let s = MgrsSpace::wgs84();
        let g = s.grid_at(lat, lon, start).unwrap();
        let once = s.resize(&g, target).unwrap();
        let twice = s.resize(&once, target).unwrap();
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.precision(), target);
    }

    #[test]
    fn coarser_cells_contain_finer(
        (lat, lon) in interior_point(),
        start in precision(2..=4),
        extra in 1u8..=3,
    ) {
        let s = MgrsSpace::wgs84();
        let g = s.grid_at(lat, lon, start).unwrap();
        let fine = s.finer(&g, extra).unwrap();
        prop_assert!(g.contains(&fine));
        prop_assert!(fine.is_contained_by(&g));
        prop_assert_eq!(fine.source(), Source::Downsize);

        let coarse = s.coarser(&g, extra).unwrap();
        prop_assert!(g.is_contained_by(&coarse));
        prop_assert!(coarse.contains(&g));
    }

    #[test]
    fn four_neighbours_one_cell_away(
        (lat, lon) in interior_point(),
        p in precision(2..=5),
        anchor in anchor(),
    ) {
        let s = anchored(anchor);
        let g = s.grid_at(lat, lon, p).unwrap();
        let neighbours = s.neighbours(&g).unwrap();
        let size = f64::from(g.size());
        for n in &neighbours {
            prop_assert_eq!(n.precision(), g.precision());
            let d = s.distance(&g, n);
            prop_assert!((d - size).abs() < 0.02 * size, "{} -> {} is {} m", g, n, d);
            prop_assert!(s.adjoins(&g, n).unwrap());
        }
        let unique: std::collections::HashSet<&Grid> = neighbours.iter().collect();
        prop_assert_eq!(unique.len(), 4);
    }
}
