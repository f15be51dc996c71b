//! Syntactic parsing of MGRS grid references.
//!
//! A reference is `<zone><band><column><row><easting><northing>`: a 1–2
//! digit UTM zone, a latitude band letter, the two-letter 100 km square,
//! then an even number (0–10) of digits split evenly between easting and
//! northing. Polar references drop the zone and use one of the UPS bands
//! `A`, `B`, `Y` or `Z`. Parsing here is purely textual; mapping the
//! letters to coordinates is the codec's job.

use crate::error::CodecError;
use crate::precision::Precision;
use std::fmt;

/// Latitude band letters from 80°S northwards.
pub const BANDS: &str = "CDEFGHJKLMNPQRSTUVWX";

/// Polar band letters: south-west, south-east, north-west, north-east.
pub const POLAR_BANDS: &str = "ABYZ";

/// A parsed, normalised grid reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridRef {
    gzd: String,
    zone: Option<u8>,
    band: char,
    square: String,
    easting: String,
    northing: String,
}

impl GridRef {
    /// Parse a grid reference.
    ///
    /// Whitespace anywhere in the input is ignored and letters are
    /// upper-cased, so `"4qgh 9493 3312"` parses the same as
    /// `"4QGH94933312"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mgrid_core::{GridRef, Precision};
    ///
    /// let r = GridRef::parse("4QGH 9493 3312").unwrap();
    /// assert_eq!(r.gzd(), "4Q");
    /// assert_eq!(r.square(), "GH");
    /// assert_eq!(r.easting_digits(), "9493");
    /// assert_eq!(r.precision(), Precision::M10);
    /// assert_eq!(r.to_string(), "4QGH94933312");
    /// ```
    pub fn parse(input: &str) -> Result<Self, CodecError> {
        let text: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if !text.is_ascii() {
            return Err(CodecError::malformed(input, "non-ASCII characters"));
        }

        let zone_len = text.bytes().take_while(u8::is_ascii_digit).count();
        if zone_len > 2 {
            return Err(CodecError::malformed(input, "expected a 1-2 digit zone number"));
        }
        let zone = if zone_len == 0 {
            None
        } else {
            let zone: u8 = text[..zone_len]
                .parse()
                .map_err(|_| CodecError::malformed(input, "unreadable zone number"))?;
            if !(1..=60).contains(&zone) {
                return Err(CodecError::malformed(
                    input,
                    format!("zone {zone} outside 1..=60"),
                ));
            }
            Some(zone)
        };

        let rest = &text[zone_len..];
        let mut letters = rest.chars();
        let band = letters
            .next()
            .ok_or_else(|| CodecError::malformed(input, "missing latitude band"))?;
        match zone {
            Some(_) if !BANDS.contains(band) => {
                return Err(CodecError::malformed(
                    input,
                    format!("'{band}' is not a latitude band"),
                ));
            }
            None if !POLAR_BANDS.contains(band) => {
                return Err(CodecError::malformed(
                    input,
                    format!("'{band}' needs a zone number or must be a polar band"),
                ));
            }
            _ => {}
        }
        let column = letters
            .next()
            .ok_or_else(|| CodecError::malformed(input, "missing 100 km column letter"))?;
        let row = letters
            .next()
            .ok_or_else(|| CodecError::malformed(input, "missing 100 km row letter"))?;
        if !is_square_letter(column) {
            return Err(CodecError::malformed(
                input,
                format!("'{column}' is not a 100 km column letter"),
            ));
        }
        // UTM rows stop at V; southern UPS rows run to Z.
        if !is_square_letter(row) || (zone.is_some() && row > 'V') {
            return Err(CodecError::malformed(
                input,
                format!("'{row}' is not a 100 km row letter"),
            ));
        }

        let digits = &rest[3..];
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodecError::malformed(
                input,
                "trailing characters after the 100 km square must be digits",
            ));
        }
        if digits.len() % 2 != 0 {
            return Err(CodecError::malformed(
                input,
                "easting and northing must have the same number of digits",
            ));
        }
        if digits.len() > 10 {
            return Err(CodecError::malformed(input, "more than 5 digits per component"));
        }
        let half = digits.len() / 2;

        Ok(Self {
            gzd: text[..zone_len + 1].to_string(),
            zone,
            band,
            square: rest[1..3].to_string(),
            easting: digits[..half].to_string(),
            northing: digits[half..].to_string(),
        })
    }

    /// Grid zone designator as written, e.g. `"4Q"`, `"04Q"`, or `"Z"`
    /// for a polar reference.
    pub fn gzd(&self) -> &str {
        &self.gzd
    }

    /// UTM zone number, `None` for polar references.
    pub fn zone(&self) -> Option<u8> {
        self.zone
    }

    /// `true` for a zone-less UPS reference.
    pub fn is_polar(&self) -> bool {
        self.zone.is_none()
    }

    /// Latitude band letter.
    pub fn band(&self) -> char {
        self.band
    }

    /// Two-letter 100 km square identifier.
    pub fn square(&self) -> &str {
        &self.square
    }

    /// Easting digits, exactly `precision` characters.
    pub fn easting_digits(&self) -> &str {
        &self.easting
    }

    /// Northing digits, exactly `precision` characters.
    pub fn northing_digits(&self) -> &str {
        &self.northing
    }

    /// Easting within the 100 km square, in units of the cell size.
    pub fn easting(&self) -> u32 {
        digits_value(&self.easting)
    }

    /// Northing within the 100 km square, in units of the cell size.
    pub fn northing(&self) -> u32 {
        digits_value(&self.northing)
    }

    /// Digits per component.
    pub fn precision(&self) -> Precision {
        // At most 5 digits per component, checked in `parse`.
        Precision::new(self.easting.len() as u8).unwrap_or(Precision::MAX)
    }

    /// Drop trailing digits to reach a coarser precision.
    ///
    /// MGRS references truncate rather than round, so the result always
    /// names the cell containing `self`. Requests at or above the current
    /// precision return an unchanged copy.
    pub fn truncate(&self, precision: Precision) -> Self {
        let keep = usize::from(precision.digits()).min(self.easting.len());
        Self {
            easting: self.easting[..keep].to_string(),
            northing: self.northing[..keep].to_string(),
            ..self.clone()
        }
    }
}

impl fmt::Display for GridRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.gzd, self.square, self.easting, self.northing
        )
    }
}

fn is_square_letter(c: char) -> bool {
    c.is_ascii_uppercase() && c != 'I' && c != 'O'
}

fn digits_value(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}
