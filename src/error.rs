//! Error types for the myanmar_calendar crate.

use crate::gregorian::{GregorianDate, ParseError};
use crate::types::MyanmarMonth;

/// Error type for all fallible operations of the calendar engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// A calculation was attempted before the constant tables were built.
    #[error("Myanmar calendar not initialized")]
    NotInitialized,

    /// A Gregorian date string could not be parsed.
    #[error("Invalid date string: {0}")]
    InvalidDateString(#[from] ParseError),

    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange {
        /// First day of the requested range.
        start: GregorianDate,
        /// Last day of the requested range.
        end: GregorianDate,
    },

    /// The Julian Day is NaN or infinite.
    #[error("Invalid Julian Day: {0}")]
    InvalidJulianDay(f64),

    /// The Myanmar year is outside the calendar's arithmetic range.
    #[error("Myanmar year {0} is outside the supported range")]
    InvalidYear(i64),

    /// The day does not exist in the given month of the given year.
    #[error("Invalid day {day} for {month} {year} ME (month has {month_length} days)")]
    InvalidDay {
        /// Myanmar year.
        year: i64,
        /// Month that was requested.
        month: MyanmarMonth,
        /// The rejected day of the month.
        day: i64,
        /// Length of the month in that year.
        month_length: i64,
    },

    /// The month only occurs in watat years.
    #[error("{month} does not occur in {year} ME")]
    MonthNotInYear {
        /// Myanmar year.
        year: i64,
        /// The intercalary month that was requested.
        month: MyanmarMonth,
    },

    /// The calendar configuration failed validation.
    #[error("Invalid calendar configuration: {0}")]
    InvalidConfig(String),

    /// Some days of a range query could not be converted.
    #[error("{failed} of {total} days in range failed to convert")]
    PartialRangeFailure {
        /// Number of days that failed.
        failed: usize,
        /// Number of days in the range.
        total: usize,
    },

    /// Writing a rendered form (CSV) failed.
    #[error("Failed to render output: {0}")]
    Render(String),
}
