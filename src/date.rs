use serde::{Deserialize, Serialize};

use crate::astro::{self, AstrologicalDays};
use crate::consts::SASANA_OFFSET;
use crate::convert::LunarDate;
use crate::festival::{self, DayContext};
use crate::gregorian::{GregorianDate, ParseError};
use crate::types::{Mahabote, MoonPhase, MyanmarMonth, Nagahle, Nakhat, Weekday, YearType};

/// A fully resolved Myanmar calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyanmarDate {
    pub myanmar_year:        i64,
    pub sasana_year:         i64,
    pub month:               MyanmarMonth,
    pub day_of_month:        i64,
    pub year_type:           YearType,
    pub month_length:        i64,
    pub moon_phase:          MoonPhase,
    pub fortnight_day:       i64,
    pub weekday:             Weekday,
    pub mahabote:            Mahabote,
    pub nakhat:              Nakhat,
    pub nagahle:             Nagahle,
    pub days:                AstrologicalDays,
    pub festivals:           Vec<String>,
    pub holidays:            Vec<String>,
    pub astrological_events: Vec<String>,
    /// The Julian Day that was converted.
    pub julian_day:          f64,
    /// Julian Day Number of the year's Waso full moon.
    pub full_moon_day:       i64,
}

impl MyanmarDate {
    /// Derives every field of the record from a lunar position.
    pub(crate) fn assemble(lunar: &LunarDate, julian_day: f64) -> Self {
        let year = lunar.year.year;
        let month_length = lunar.month_length();
        let weekday = Weekday::from_julian_day(julian_day);
        let moon_phase = astro::moon_phase(lunar.day, month_length);
        let days = AstrologicalDays::compute(lunar.month, lunar.day, month_length, weekday);
        let observances = festival::identify(&DayContext {
            year,
            month: lunar.month,
            day: lunar.day,
            moon_phase,
            days,
        });

        Self {
            myanmar_year: year,
            sasana_year: year + SASANA_OFFSET,
            month: lunar.month,
            day_of_month: lunar.day,
            year_type: lunar.year.year_type,
            month_length,
            moon_phase,
            fortnight_day: astro::fortnight_day(lunar.day),
            weekday,
            mahabote: astro::mahabote(year, weekday),
            nakhat: astro::nakhat(year),
            nagahle: astro::nagahle(lunar.month),
            days,
            festivals: observances.festivals,
            holidays: observances.holidays,
            astrological_events: observances.astrological_events,
            julian_day,
            full_moon_day: lunar.year.full_moon_day,
        }
    }

    /// The civil Gregorian date of this record.
    ///
    /// # Errors
    /// Returns `ParseError::OutOfRange` when the day lies outside years 1-9999.
    pub fn gregorian(&self) -> Result<GregorianDate, ParseError> {
        GregorianDate::from_julian_day(self.julian_day)
    }

    /// Julian Day Number of the civil day.
    pub fn julian_day_number(&self) -> i64 {
        self.julian_day.round() as i64
    }

    #[inline]
    pub const fn is_sabbath(&self) -> bool {
        self.days.sabbath
    }
}
