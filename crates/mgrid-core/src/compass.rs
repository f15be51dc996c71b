//! The 32-point compass rose and azimuth classification.
//!
//! Each [`Heading`] carries an [`HeadingOrder`]: cardinal points are order 1,
//! intercardinal order 2, the 16-wind points order 3 and the "by" points
//! order 4. Classifying an azimuth at a given order only considers headings
//! of that order or coarser.

use std::fmt;

/// Directional granularity of a heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeadingOrder {
    /// N, E, S, W.
    Cardinal = 1,
    /// Adds NE, SE, SW, NW.
    Intercardinal = 2,
    /// Adds NNE, ENE, ESE, ... (16-point rose).
    Secondary = 3,
    /// Adds NbE, NEbN, ... (32-point rose).
    Quarter = 4,
}

impl HeadingOrder {
    /// Map a numeric level (1..=4) to an order.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Cardinal),
            2 => Some(Self::Intercardinal),
            3 => Some(Self::Secondary),
            4 => Some(Self::Quarter),
            _ => None,
        }
    }

    /// The numeric level of this order.
    pub fn level(self) -> u8 {
        self as u8
    }
}

impl Default for HeadingOrder {
    fn default() -> Self {
        Self::Quarter
    }
}

/// One of the four cardinal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cardinal {
    /// Azimuth 0.
    North,
    /// Azimuth 90.
    East,
    /// Azimuth 180.
    South,
    /// Azimuth 270.
    West,
}

impl Cardinal {
    /// All four, in neighbour order: north, east, south, west.
    pub const ALL: [Cardinal; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Azimuth in degrees clockwise from north.
    pub fn azimuth(self) -> f64 {
        match self {
            Self::North => 0.0,
            Self::East => 90.0,
            Self::South => 180.0,
            Self::West => 270.0,
        }
    }

    /// Abbreviation letter as it appears in heading abbreviations.
    pub fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }
}

/// A named compass point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Heading {
    /// Full name, e.g. `"North-Northeast"`.
    pub name: &'static str,
    /// Abbreviation, e.g. `"NNE"`.
    pub abbr: &'static str,
    /// Azimuth of the point, degrees clockwise from north.
    pub azimuth: f64,
    /// Coarsest order at which this point is considered.
    pub order: HeadingOrder,
}

impl Heading {
    /// Whether the abbreviation mentions the given cardinal direction.
    ///
    /// `"NEbN"` mentions both north and east; `"SbW"` mentions south and west.
    pub fn mentions(&self, cardinal: Cardinal) -> bool {
        self.abbr.contains(cardinal.letter())
    }

    /// Lookup key: lower-case name with spaces replaced by hyphens.
    pub fn key(&self) -> String {
        self.name.to_lowercase().replace(' ', "-")
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

const fn h(name: &'static str, abbr: &'static str, azimuth: f64, order: HeadingOrder) -> Heading {
    Heading {
        name,
        abbr,
        azimuth,
        order,
    }
}

use self::HeadingOrder::{Cardinal as O1, Intercardinal as O2, Quarter as O4, Secondary as O3};

/// The rose in azimuth order. North appears twice (0 and 360) so that
/// azimuths just below 360 classify as north rather than north-by-west.
static ROSE: [Heading; 33] = [
    h("North", "N", 0.0, O1),
    h("North by East", "NbE", 11.25, O4),
    h("North-Northeast", "NNE", 22.5, O3),
    h("Northeast by North", "NEbN", 33.75, O4),
    h("Northeast", "NE", 45.0, O2),
    h("Northeast by East", "NEbE", 56.25, O4),
    h("East-Northeast", "ENE", 67.5, O3),
    h("East by North", "EbN", 78.75, O4),
    h("East", "E", 90.0, O1),
    h("East by South", "EbS", 101.25, O4),
    h("East-Southeast", "ESE", 112.5, O3),
    h("Southeast by East", "SEbE", 123.75, O4),
    h("Southeast", "SE", 135.0, O2),
    h("Southeast by South", "SEbS", 146.25, O4),
    h("South-Southeast", "SSE", 157.5, O3),
    h("South by East", "SbE", 168.75, O4),
    h("South", "S", 180.0, O1),
    h("South by West", "SbW", 191.25, O4),
    h("South-Southwest", "SSW", 202.5, O3),
    h("Southwest by South", "SWbS", 213.75, O4),
    h("Southwest", "SW", 225.0, O2),
    h("Southwest by West", "SWbW", 236.25, O4),
    h("West-Southwest", "WSW", 247.5, O3),
    h("West by South", "WbS", 258.75, O4),
    h("West", "W", 270.0, O1),
    h("West by North", "WbN", 281.25, O4),
    h("West-Northwest", "WNW", 292.5, O3),
    h("Northwest by West", "NWbW", 303.75, O4),
    h("Northwest", "NW", 315.0, O2),
    h("Northwest by North", "NWbN", 326.25, O4),
    h("North-Northwest", "NNW", 337.5, O3),
    h("North by West", "NbW", 348.75, O4),
    h("North", "N", 360.0, O1),
];

/// Static lookup over the compass rose.
pub struct Compass;

impl Compass {
    /// Every heading in azimuth order, including the closing 360° north.
    pub fn iter() -> impl Iterator<Item = &'static Heading> {
        ROSE.iter()
    }

    /// Classify an azimuth into the nearest heading of order `<= order`.
    ///
    /// Negative azimuths and azimuths of 360 or more are wrapped into
    /// `[0, 360)` first. When two headings are equally close, the one with
    /// the smaller azimuth wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use mgrid_core::{Compass, HeadingOrder};
    ///
    /// assert_eq!(Compass::classify(44.0, HeadingOrder::Quarter).abbr, "NE");
    /// assert_eq!(Compass::classify(44.0, HeadingOrder::Cardinal).abbr, "N");
    /// assert_eq!(Compass::classify(-90.0, HeadingOrder::Cardinal).abbr, "W");
    /// ```
    pub fn classify(azimuth: f64, order: HeadingOrder) -> &'static Heading {
        let bearing = azimuth.rem_euclid(360.0);
        let mut best = &ROSE[0];
        let mut best_delta = f64::INFINITY;
        for heading in ROSE.iter().filter(|hd| hd.order <= order) {
            let delta = (bearing - heading.azimuth).abs();
            if delta < best_delta {
                best_delta = delta;
                best = heading;
            }
        }
        best
    }

    /// Find a heading by its hyphenated lower-case name, e.g. `"north-by-east"`.
    pub fn by_name(name: &str) -> Option<&'static Heading> {
        let wanted = name.trim().to_lowercase().replace(' ', "-");
        ROSE.iter().find(|hd| hd.key() == wanted)
    }

    /// Find a heading by its abbreviation (case-sensitive: `"NbE"`).
    pub fn by_abbr(abbr: &str) -> Option<&'static Heading> {
        ROSE.iter().find(|hd| hd.abbr == abbr)
    }

    /// The heading for a cardinal direction.
    pub fn cardinal(cardinal: Cardinal) -> &'static Heading {
        match cardinal {
            Cardinal::North => &ROSE[0],
            Cardinal::East => &ROSE[8],
            Cardinal::South => &ROSE[16],
            Cardinal::West => &ROSE[24],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rose_is_sorted_and_evenly_spaced() {
        for (i, hd) in ROSE.iter().enumerate() {
            assert!((hd.azimuth - i as f64 * 11.25).abs() < 1e-12, "{}", hd.name);
        }
    }

    #[test]
    fn classify_at_each_order() {
        assert_eq!(Compass::classify(30.0, HeadingOrder::Cardinal).abbr, "N");
        assert_eq!(Compass::classify(30.0, HeadingOrder::Intercardinal).abbr, "NE");
        assert_eq!(Compass::classify(30.0, HeadingOrder::Secondary).abbr, "NNE");
        assert_eq!(Compass::classify(30.0, HeadingOrder::Quarter).abbr, "NEbN");
    }

    #[test]
    fn classify_near_full_circle_is_north() {
        assert_eq!(Compass::classify(359.0, HeadingOrder::Quarter).abbr, "N");
        assert_eq!(Compass::classify(360.0, HeadingOrder::Quarter).abbr, "N");
        assert_eq!(Compass::classify(-1.0, HeadingOrder::Quarter).abbr, "N");
    }

    #[test]
    fn classify_tie_prefers_smaller_azimuth() {
        // 11.25 sits exactly between N and NNE at order 3.
        assert_eq!(Compass::classify(11.25, HeadingOrder::Secondary).abbr, "N");
        assert_eq!(Compass::classify(45.0, HeadingOrder::Cardinal).abbr, "N");
    }

    #[test]
    fn lookup_by_name_and_abbr() {
        let nne = Compass::by_name("North-Northeast").unwrap();
        assert_eq!(nne.abbr, "NNE");
        assert_eq!(Compass::by_name("north by east").unwrap().abbr, "NbE");
        assert_eq!(Compass::by_abbr("SWbW").unwrap().azimuth, 236.25);
        assert!(Compass::by_name("up").is_none());
    }

    #[test]
    fn mentions_cardinal_letters() {
        let nebn = Compass::by_abbr("NEbN").unwrap();
        assert!(nebn.mentions(Cardinal::North));
        assert!(nebn.mentions(Cardinal::East));
        assert!(!nebn.mentions(Cardinal::South));
        assert!(!nebn.mentions(Cardinal::West));
    }

    #[test]
    fn cardinal_headings_match_azimuths() {
        for c in Cardinal::ALL {
            assert_eq!(Compass::cardinal(c).azimuth, c.azimuth());
            assert_eq!(Compass::cardinal(c).order, HeadingOrder::Cardinal);
        }
    }

    #[test]
    fn order_levels_round_trip() {
        for level in 1..=4 {
            assert_eq!(HeadingOrder::from_level(level).unwrap().level(), level);
        }
        assert!(HeadingOrder::from_level(0).is_none());
        assert!(HeadingOrder::from_level(5).is_none());
    }

    proptest! {
        #[test]
        fn classify_is_within_half_step(azimuth in -720.0f64..720.0) {
            let wrapped = azimuth.rem_euclid(360.0);
            for (order, half_step) in [
                (HeadingOrder::Cardinal, 45.0),
                (HeadingOrder::Intercardinal, 22.5),
                (HeadingOrder::Secondary, 11.25),
                (HeadingOrder::Quarter, 5.625),
            ] {
                let hd = Compass::classify(azimuth, order);
                prop_assert!(hd.order <= order);
                prop_assert!((wrapped - hd.azimuth).abs() <= half_step + 1e-9);
            }
        }
    }
}
