use std::{iter, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CalendarError, GregorianDate, MyanmarDate, ParseError, RANGE_SEPARATOR, prelude::*};

/// An inclusive range of Gregorian days.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct GregorianRange {
    start: GregorianDate,
    end:   GregorianDate,
}

impl GregorianRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidRange` if start > end.
    pub fn new(start: GregorianDate, end: GregorianDate) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parses both ends from `YYYY-MM-DD` strings.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDateString` for a malformed end point and
    /// `CalendarError::InvalidRange` if start > end.
    pub fn parse(start: &str, end: &str) -> Result<Self, CalendarError> {
        let start = start.parse::<GregorianDate>()?;
        let end = end.parse::<GregorianDate>()?;
        Self::new(start, end)
    }

    pub const fn start(&self) -> GregorianDate {
        self.start
    }

    pub const fn end(&self) -> GregorianDate {
        self.end
    }

    /// Number of days in the range, both ends included.
    pub fn len(&self) -> usize {
        let days = self.end.julian_day_number() - self.start.julian_day_number() + 1;
        usize::try_from(days).unwrap_or(0)
    }

    /// A range always holds at least its start day.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Every day of the range in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = GregorianDate> + use<> {
        let end = self.end;
        iter::successors(Some(self.start), GregorianDate::succ).take_while(move |d| *d <= end)
    }

    /// Noon Julian Day of every day in the range.
    pub fn julian_days(&self) -> impl Iterator<Item = f64> + use<> {
        self.iter().map(|d| d.noon_julian_day())
    }
}

impl FromStr for GregorianRange {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split(RANGE_SEPARATOR).collect();
        match parts.as_slice() {
            [start, end] => Self::parse(start.trim(), end.trim()),
            _ => Err(ParseError::InvalidFormat(format!(
                "{trimmed} (expected exactly one '{RANGE_SEPARATOR}')"
            ))
            .into()),
        }
    }
}

impl Serialize for GregorianRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A day of a range query that could not be converted.
#[derive(Debug, Clone, PartialEq)]
pub struct DayFailure {
    pub julian_day: f64,
    pub error:      CalendarError,
}

/// Outcome of converting many days: the dates that converted, in input
/// order, and the days that did not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeReport {
    pub dates:    Vec<MyanmarDate>,
    pub failures: Vec<DayFailure>,
}

impl RangeReport {
    /// Number of days attempted.
    pub fn total(&self) -> usize {
        self.dates.len() + self.failures.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// The converted dates, or an error if any day failed.
    ///
    /// # Errors
    /// Returns `CalendarError::PartialRangeFailure` when at least one day failed.
    pub fn into_strict(self) -> Result<Vec<MyanmarDate>, CalendarError> {
        if self.failures.is_empty() {
            Ok(self.dates)
        } else {
            Err(CalendarError::PartialRangeFailure {
                failed: self.failures.len(),
                total:  self.total(),
            })
        }
    }
}
