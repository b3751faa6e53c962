use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    BIG_WATAT_SPACING, COMMON_YEAR_DAYS, INTERCALARY_MONTH_DAYS, LITTLE_WATAT_SPACING,
    TAGU_TO_WASO_FULL_MOON, WATAT_SEARCH_LIMIT,
};
use crate::tables::ConstantTables;
use crate::types::YearType;
use crate::watat;

/// A Myanmar year resolved to its type and anchor days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearInfo {
    pub year:          i64,
    pub year_type:     YearType,
    /// Julian Day Number of the first day of Tagu.
    pub tagu1:         i64,
    /// Julian Day Number of the (second) Waso full moon.
    pub full_moon_day: i64,
    /// Set when the full-moon spacing to the previous watat year is neither
    /// 30 nor 31 days.
    pub anomaly:       bool,
}

impl YearInfo {
    /// Days from Tagu 1 of this year to Tagu 1 of the next: 354, 384 or 385.
    pub const fn year_length(&self) -> i64 {
        year_length(self.year_type)
    }
}

/// Length of a year of the given type.
pub const fn year_length(year_type: YearType) -> i64 {
    let t = year_type.number();
    let big = t / 2;
    let common = 1 / (t + 1);
    COMMON_YEAR_DAYS + (1 - common) * INTERCALARY_MONTH_DAYS + big
}

/// Resolves `year` into common, little watat or big watat.
///
/// Searches back at most three years for the preceding watat year. A watat
/// year's type follows from the full-moon spacing (mod 354) to that year;
/// a common year's full moon is projected forward from it.
pub fn resolve(tables: &ConstantTables, year: i64) -> YearInfo {
    let this = watat::compute(tables, year);

    let mut gap = 0;
    let previous = loop {
        gap += 1;
        let candidate = watat::compute(tables, year.saturating_sub(gap));
        if candidate.is_watat || gap >= WATAT_SEARCH_LIMIT {
            break candidate;
        }
    };
    let projected = previous.full_moon_day.saturating_add(COMMON_YEAR_DAYS * gap);

    let (year_type, full_moon_day, anomaly) = if this.is_watat {
        let spacing = this
            .full_moon_day
            .saturating_sub(previous.full_moon_day)
            .rem_euclid(COMMON_YEAR_DAYS);
        let anomaly = spacing != LITTLE_WATAT_SPACING && spacing != BIG_WATAT_SPACING;
        if anomaly {
            debug!(year, spacing, "watat full moon spacing outside 30..=31 days");
        }
        let year_type = YearType::from_number(spacing / BIG_WATAT_SPACING + 1);
        (year_type, this.full_moon_day, anomaly)
    } else {
        (YearType::Common, projected, false)
    };

    YearInfo {
        year,
        year_type,
        tagu1: projected.saturating_sub(TAGU_TO_WASO_FULL_MOON),
        full_moon_day,
        anomaly,
    }
}
