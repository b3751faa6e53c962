use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::consts::{JULIAN_DAY_LIMIT, MYANMAR_YEAR_LIMIT};
use crate::convert;
use crate::search::{self, SearchCriteria, SearchHit};
use crate::tables::ConstantTables;
use crate::types::MyanmarMonth;
use crate::year::{self, YearInfo};
use crate::{
    CalendarConfig, CalendarError, DayFailure, GregorianDate, GregorianRange, MyanmarDate,
    RangeReport,
};

/// The Myanmar calendar engine.
///
/// Holds an immutable [`CalendarConfig`] and the lookup tables built from
/// it. The tables are built once by [`MyanmarCalendar::initialize`]; every
/// conversion before that fails with [`CalendarError::NotInitialized`].
/// After initialization the engine is read-only and can be shared between
/// threads.
#[derive(Debug, Default)]
pub struct MyanmarCalendar {
    config: CalendarConfig,
    tables: OnceLock<ConstantTables>,
}

impl MyanmarCalendar {
    /// Creates an engine that still has to be initialized.
    pub const fn new(config: CalendarConfig) -> Self {
        Self {
            config,
            tables: OnceLock::new(),
        }
    }

    /// Creates and initializes an engine with the historical tables.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidConfig` if the built-in data does not
    /// validate.
    pub fn with_default_config() -> Result<Self, CalendarError> {
        Self::with_config(CalendarConfig::default())
    }

    /// Creates and initializes an engine.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidConfig` if `config` does not validate.
    pub fn with_config(config: CalendarConfig) -> Result<Self, CalendarError> {
        let calendar = Self::new(config);
        calendar.initialize()?;
        Ok(calendar)
    }

    /// Builds the lookup tables. Calling it again is a no-op.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidConfig` if the configuration does not
    /// validate; the engine then stays uninitialized.
    pub fn initialize(&self) -> Result<(), CalendarError> {
        if self.tables.get().is_some() {
            return Ok(());
        }
        let tables = ConstantTables::new(&self.config)?;
        // A concurrent caller may have stored identical tables first
        let _ = self.tables.set(tables);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.tables.get().is_some()
    }

    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    fn tables(&self) -> Result<&ConstantTables, CalendarError> {
        self.tables.get().ok_or(CalendarError::NotInitialized)
    }

    /// Converts a Julian Day to a Myanmar date.
    ///
    /// The calendar day is the Julian Day Number nearest to `jd`; the weekday
    /// and the returned `julian_day` keep the exact input.
    ///
    /// # Errors
    /// Returns `CalendarError::NotInitialized` before initialization and
    /// `CalendarError::InvalidJulianDay` for non-finite input or input
    /// outside the calendar's arithmetic range.
    pub fn julian_day_to_date(&self, jd: f64) -> Result<MyanmarDate, CalendarError> {
        let tables = self.tables()?;
        if !jd.is_finite() || jd.abs() >= JULIAN_DAY_LIMIT {
            return Err(CalendarError::InvalidJulianDay(jd));
        }
        let lunar = convert::to_lunar(tables, jd.round() as i64)
            .ok_or(CalendarError::InvalidJulianDay(jd))?;
        Ok(MyanmarDate::assemble(&lunar, jd))
    }

    /// Converts a Gregorian day (taken at noon) to a Myanmar date.
    ///
    /// # Errors
    /// See [`MyanmarCalendar::julian_day_to_date`].
    pub fn gregorian_to_date(&self, date: GregorianDate) -> Result<MyanmarDate, CalendarError> {
        self.julian_day_to_date(date.noon_julian_day())
    }

    /// Converts a `YYYY-MM-DD` string to a Myanmar date.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDateString` for a malformed date, or
    /// see [`MyanmarCalendar::julian_day_to_date`].
    pub fn parse_gregorian(&self, date: &str) -> Result<MyanmarDate, CalendarError> {
        self.gregorian_to_date(date.parse()?)
    }

    /// Converts a Myanmar (year, month, day) to its Julian Day (noon).
    ///
    /// # Errors
    /// Returns `CalendarError::MonthNotInYear` for First Waso in a common
    /// year, `CalendarError::InvalidDay` when `day` is outside the month and
    /// `CalendarError::InvalidYear` for a year outside the supported range.
    pub fn date_to_julian_day(
        &self,
        year: i64,
        month: MyanmarMonth,
        day: i64,
    ) -> Result<f64, CalendarError> {
        let info = self.year_info(year)?;
        Self::check_month(&info, month)?;
        let month_length = month.length(info.year_type);
        if !(1..=month_length).contains(&day) {
            return Err(CalendarError::InvalidDay {
                year,
                month,
                day,
                month_length,
            });
        }
        Ok(convert::to_julian_day(&info, month, day) as f64)
    }

    /// Julian Day of an assembled date's civil day.
    ///
    /// # Errors
    /// See [`MyanmarCalendar::date_to_julian_day`].
    pub fn to_julian_day(&self, date: &MyanmarDate) -> Result<f64, CalendarError> {
        self.date_to_julian_day(date.myanmar_year, date.month, date.day_of_month)
    }

    /// Year type and anchor days of a Myanmar year.
    ///
    /// # Errors
    /// Returns `CalendarError::NotInitialized` before initialization and
    /// `CalendarError::InvalidYear` when `year` lies outside
    /// ±[`MYANMAR_YEAR_LIMIT`].
    pub fn year_info(&self, year: i64) -> Result<YearInfo, CalendarError> {
        let tables = self.tables()?;
        if year.unsigned_abs() >= MYANMAR_YEAR_LIMIT.unsigned_abs() {
            return Err(CalendarError::InvalidYear(year));
        }
        Ok(year::resolve(tables, year))
    }

    fn check_month(info: &YearInfo, month: MyanmarMonth) -> Result<(), CalendarError> {
        if month == MyanmarMonth::FirstWaso && !info.year_type.is_watat() {
            return Err(CalendarError::MonthNotInYear {
                year: info.year,
                month,
            });
        }
        Ok(())
    }

    /// Converts every Julian Day of `days`, in order.
    ///
    /// A day that fails is logged and recorded in the report; the remaining
    /// days are still converted.
    ///
    /// # Errors
    /// Returns `CalendarError::NotInitialized` before initialization.
    pub fn convert_days<I>(&self, days: I) -> Result<RangeReport, CalendarError>
    where
        I: IntoIterator<Item = f64>,
    {
        self.tables()?;
        let mut report = RangeReport::default();
        for julian_day in days {
            match self.julian_day_to_date(julian_day) {
                Ok(date) => report.dates.push(date),
                Err(error) => {
                    warn!(julian_day, %error, "skipping day that failed to convert");
                    report.failures.push(DayFailure { julian_day, error });
                },
            }
        }
        Ok(report)
    }

    /// Converts every day of a Gregorian range, taken at noon.
    ///
    /// # Errors
    /// Returns `CalendarError::NotInitialized` before initialization.
    pub fn convert_range(&self, range: &GregorianRange) -> Result<RangeReport, CalendarError> {
        self.convert_days(range.julian_days())
    }

    /// Converts every day from `start` to `end` (`YYYY-MM-DD`, inclusive).
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDateString` or
    /// `CalendarError::InvalidRange` before any day is converted, and
    /// `CalendarError::NotInitialized` before initialization.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn date_range(&self, start: &str, end: &str) -> Result<RangeReport, CalendarError> {
        let range = GregorianRange::parse(start, end)?;
        self.convert_range(&range)
    }

    /// Every day of a Myanmar month, in order.
    ///
    /// Days that the forward conversion assigns to a different (year, month)
    /// are left out, which happens where Late Tagu and Late Kason overlap
    /// the following year's Tagu.
    ///
    /// # Errors
    /// Returns `CalendarError::MonthNotInYear` for First Waso in a common
    /// year, `CalendarError::InvalidYear` for a year outside the supported
    /// range and `CalendarError::NotInitialized` before initialization.
    pub fn month_days(
        &self,
        year: i64,
        month: MyanmarMonth,
    ) -> Result<Vec<MyanmarDate>, CalendarError> {
        let tables = self.tables()?;
        let info = self.year_info(year)?;
        Self::check_month(&info, month)?;

        let days = (1..=month.length(info.year_type))
            .filter_map(|day| {
                let jdn = convert::to_julian_day(&info, month, day);
                convert::to_lunar(tables, jdn)
                    .filter(|lunar| {
                        lunar.year.year == year && lunar.month == month && lunar.day == day
                    })
                    .map(|lunar| MyanmarDate::assemble(&lunar, jdn as f64))
            })
            .collect();
        Ok(days)
    }

    /// Searches a Gregorian range for days meeting `criteria`.
    ///
    /// Hits are ordered by descending score, then chronologically. Days that
    /// fail to convert are logged and skipped.
    ///
    /// # Errors
    /// Returns `CalendarError::NotInitialized` before initialization.
    #[tracing::instrument(level = "debug", skip(self, criteria))]
    pub fn search(
        &self,
        range: &GregorianRange,
        criteria: &SearchCriteria,
    ) -> Result<Vec<SearchHit>, CalendarError> {
        self.tables()?;
        let mut hits = Vec::new();
        for gregorian in range.iter() {
            let date = match self.gregorian_to_date(gregorian) {
                Ok(date) => date,
                Err(error) => {
                    warn!(%gregorian, %error, "skipping day that failed to convert");
                    continue;
                },
            };
            if let Some((score, description)) = criteria.evaluate(&date) {
                hits.push(SearchHit {
                    gregorian,
                    date,
                    score,
                    description,
                });
            }
        }
        search::rank(&mut hits);
        debug!(days = range.len(), hits = hits.len(), "search finished");
        Ok(hits)
    }
}
