use std::num::{NonZeroU8, NonZeroU16};
use std::str::FromStr;

use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY,
};
use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0} (expected YYYY-MM-DD)")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Julian Day Number {} is outside the years 1-{}", "_0", MAX_YEAR)]
    OutOfRange(i64),
}

impl std::error::Error for ParseError {}

/// A proleptic Gregorian calendar date in the years 1 through 9999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct GregorianDate {
    year:  NonZeroU16,
    month: NonZeroU8,
    day:   NonZeroU8,
}

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

impl GregorianDate {
    /// Creates a validated date.
    ///
    /// # Errors
    /// Returns the `ParseError` variant naming the first invalid component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year_nz = NonZeroU16::new(year)
            .filter(|y| y.get() <= MAX_YEAR)
            .ok_or(ParseError::InvalidYear(year))?;
        let month_nz = NonZeroU8::new(month)
            .filter(|m| m.get() <= MAX_MONTH)
            .ok_or(ParseError::InvalidMonth(month))?;
        let day_nz = NonZeroU8::new(day)
            .filter(|d| d.get() <= days_in_month(year, month))
            .ok_or(ParseError::InvalidDay { month, day, year })?;
        Ok(Self {
            year:  year_nz,
            month: month_nz,
            day:   day_nz,
        })
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Julian Day Number: the Julian Day at noon of this date.
    pub fn julian_day_number(&self) -> i64 {
        let (y, m, d) = (i64::from(self.year()), i64::from(self.month()), i64::from(self.day()));
        (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
            - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
            + d
            - 32075
    }

    /// Julian Day at noon, the instant range queries convert.
    pub fn noon_julian_day(&self) -> f64 {
        self.julian_day_number() as f64
    }

    /// The date containing Julian Day Number `jdn`.
    ///
    /// # Errors
    /// Returns `ParseError::OutOfRange` if the date falls outside years 1-9999.
    pub fn from_julian_day_number(jdn: i64) -> Result<Self, ParseError> {
        let f = jdn + 1401 + (((4 * jdn + 274_277) / 146_097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;

        let year = u16::try_from(year)
            .ok()
            .filter(|y| (1..=MAX_YEAR).contains(y))
            .ok_or(ParseError::OutOfRange(jdn))?;
        // month and day are in range by construction
        Self::new(year, month as u8, day as u8)
    }

    /// The civil date containing the instant `jd`. Days begin at midnight,
    /// half a day before the Julian Day Number changes.
    ///
    /// # Errors
    /// Returns `ParseError::OutOfRange` for non-finite input or dates outside
    /// years 1-9999.
    pub fn from_julian_day(jd: f64) -> Result<Self, ParseError> {
        if !jd.is_finite() {
            return Err(ParseError::OutOfRange(0));
        }
        Self::from_julian_day_number((jd + 0.5).floor() as i64)
    }

    /// The following day, or `None` after 9999-12-31.
    pub fn succ(&self) -> Option<Self> {
        let (year, month, day) = (self.year(), self.month(), self.day());
        let next = if day < days_in_month(year, month) {
            (year, month, day + 1)
        } else if month < DECEMBER {
            (year, month + 1, MIN_DAY)
        } else if year < MAX_YEAR {
            (year + 1, JANUARY, MIN_DAY)
        } else {
            return None;
        };
        Self::new(next.0, next.1, next.2).ok()
    }

    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    /// Parses strictly `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        };
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }

        let year = Self::parse_u16(year)?;
        let month = Self::parse_u8(month)?;
        let day = Self::parse_u8(day)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
