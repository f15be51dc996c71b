//! Grid precision: digits per easting/northing component.

use crate::error::GridError;
use std::fmt;

/// Number of digits in each of the easting and northing components of an
/// MGRS grid reference.
///
/// Precision fixes the edge length of the square cell a reference denotes:
/// `size = 10^(5 - precision)` metres, so precision 0 is the bare 100 km
/// square and precision 5 is a 1 m cell.
///
/// # Examples
///
/// ```
/// use mgrid_core::Precision;
///
/// let p = Precision::new(4).unwrap();
/// assert_eq!(p.size_m(), 10);
/// assert_eq!(p, Precision::M10);
/// assert!(Precision::new(6).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Precision(u8);

impl Precision {
    /// 100 km square, no numeric digits.
    pub const KM100: Precision = Precision(0);
    /// 10 km cell.
    pub const KM10: Precision = Precision(1);
    /// 1 km cell.
    pub const KM1: Precision = Precision(2);
    /// 100 m cell.
    pub const M100: Precision = Precision(3);
    /// 10 m cell.
    pub const M10: Precision = Precision(4);
    /// 1 m cell.
    pub const M1: Precision = Precision(5);

    /// Finest supported precision.
    pub const MAX: Precision = Precision::M1;
    /// Coarsest supported precision.
    pub const MIN: Precision = Precision::KM100;

    /// Validate a raw digit count.
    ///
    /// Returns `Err(GridError::InvalidPrecision)` for anything above 5.
    pub fn new(digits: u8) -> Result<Self, GridError> {
        if digits > Self::MAX.0 {
            return Err(GridError::InvalidPrecision { value: digits });
        }
        Ok(Self(digits))
    }

    /// The raw digit count.
    pub fn digits(self) -> u8 {
        self.0
    }

    /// Cell edge length in metres.
    pub fn size_m(self) -> u32 {
        10u32.pow(u32::from(Self::MAX.0 - self.0))
    }

    /// Move `steps` levels towards 100 km, stopping at precision 0.
    pub fn coarser(self, steps: u8) -> Self {
        Self(self.0.saturating_sub(steps))
    }

    /// Move `steps` levels towards 1 m, stopping at precision 5.
    pub fn finer(self, steps: u8) -> Self {
        Self(self.0.saturating_add(steps).min(Self::MAX.0))
    }

    /// All precisions from coarsest to finest.
    pub fn all() -> impl Iterator<Item = Precision> {
        (Self::MIN.0..=Self::MAX.0).map(Precision)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::M1
    }
}

impl TryFrom<u8> for Precision {
    type Error = GridError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Self::new(v)
    }
}

impl From<Precision> for u8 {
    fn from(p: Precision) -> u8 {
        p.0
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn named_constants_match_sizes() {
        assert_eq!(Precision::KM100.size_m(), 100_000);
        assert_eq!(Precision::KM10.size_m(), 10_000);
        assert_eq!(Precision::KM1.size_m(), 1_000);
        assert_eq!(Precision::M100.size_m(), 100);
        assert_eq!(Precision::M10.size_m(), 10);
        assert_eq!(Precision::M1.size_m(), 1);
    }

    #[test]
    fn new_rejects_more_than_five_digits() {
        assert!(matches!(
            Precision::new(6),
            Err(GridError::InvalidPrecision { value: 6 })
        ));
        assert!(Precision::try_from(5u8).is_ok());
    }

    #[test]
    fn coarser_and_finer_saturate() {
        assert_eq!(Precision::KM10.coarser(3), Precision::KM100);
        assert_eq!(Precision::M100.finer(9), Precision::M1);
        assert_eq!(Precision::M100.coarser(1), Precision::KM1);
        assert_eq!(Precision::M100.finer(1), Precision::M10);
    }

    #[test]
    fn default_is_one_metre() {
        assert_eq!(Precision::default(), Precision::M1);
    }

    proptest! {
        #[test]
        fn size_is_power_of_ten(digits in 0u8..=5) {
            let p = Precision::new(digits).unwrap();
            prop_assert_eq!(p.size_m(), 10u32.pow(5 - u32::from(digits)));
        }

        #[test]
        fn stepping_stays_in_range(digits in 0u8..=5, steps in 0u8..8) {
            let p = Precision::new(digits).unwrap();
            prop_assert!(p.coarser(steps) <= p);
            prop_assert!(p.finer(steps) >= p);
            prop_assert!(p.finer(steps) <= Precision::MAX);
        }
    }
}
