//! Julian Day Number to Myanmar (year, month, day) and back.
//!
//! Months are located with the polynomial approximation `29.544 m - 29.26`,
//! corrected for the intercalary First Waso and the extra Nayon day.

use crate::consts::{INTERCALARY_MONTH_DAYS, MYANMAR_EPOCH, SOLAR_YEAR};
use crate::tables::ConstantTables;
use crate::types::MyanmarMonth;
use crate::year::{self, YearInfo};

const MONTH_SLOPE: f64 = 29.544;
const MONTH_INTERCEPT: f64 = 29.26;

/// A calendar position before the astrological fields are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    pub year:  YearInfo,
    pub month: MyanmarMonth,
    pub day:   i64,
}

impl LunarDate {
    pub const fn month_length(&self) -> i64 {
        self.month.length(self.year.year_type)
    }
}

/// Myanmar year whose solar new year precedes the Julian Day Number `jdn`.
pub fn year_of(jdn: i64) -> i64 {
    ((jdn as f64 - 0.5 - MYANMAR_EPOCH) / SOLAR_YEAR).floor() as i64
}

/// Converts a Julian Day Number to a lunar date.
///
/// A day between the solar new year and Tagu 1 belongs to the late months
/// of the previous year. Returns `None` when the arithmetic leaves the
/// calendar's domain: a month number outside 0..=14, First Waso in a
/// common year, or a day outside the month.
pub fn to_lunar(tables: &ConstantTables, jdn: i64) -> Option<LunarDate> {
    let mut info = year::resolve(tables, year_of(jdn));
    if jdn < info.tagu1 {
        info = year::resolve(tables, info.year - 1);
    }
    let t = info.year_type.number();
    let big = t / 2;
    let common = 1 / (t + 1);
    let year_length = info.year_length();

    let mut dd = jdn - info.tagu1 + 1;
    if dd < 1 {
        return None;
    }
    let late = (dd - 1).div_euclid(year_length);
    dd -= late * year_length;

    let a = (dd + 423).div_euclid(512);
    let m = (((dd - big * a + common * a * INTERCALARY_MONTH_DAYS) as f64 + MONTH_INTERCEPT)
        / MONTH_SLOPE)
        .floor() as i64;
    let e = (m + 12).div_euclid(16);
    let f = (m + 11).div_euclid(16);
    let day = dd - (MONTH_SLOPE * m as f64 - MONTH_INTERCEPT).floor() as i64 - big * e
        + common * f * INTERCALARY_MONTH_DAYS;

    let month = MyanmarMonth::from_number(m + 3 * f - 4 * e + 12 * late)?;
    if month == MyanmarMonth::FirstWaso && !info.year_type.is_watat() {
        return None;
    }
    let date = LunarDate {
        year: info,
        month,
        day,
    };
    (1..=date.month_length()).contains(&day).then_some(date)
}

/// Converts a lunar date back to its Julian Day Number.
///
/// Exact inverse of [`to_lunar`] for every date it produces; other inputs
/// are extrapolated along the same formula without validation.
pub fn to_julian_day(info: &YearInfo, month: MyanmarMonth, day: i64) -> i64 {
    let t = info.year_type.number();
    let big = t / 2;
    let common = 1 / (t + 1);

    let late = month.number() / 13;
    let mut m = month.number() % 13 + late;
    m += 4 - ((m + 15) / 16) * 4 + (m + 12) / 16;

    let mut dd = day + (MONTH_SLOPE * m as f64 - MONTH_INTERCEPT).floor() as i64
        - common * ((m + 11) / 16) * INTERCALARY_MONTH_DAYS
        + big * ((m + 12) / 16);
    dd += late * info.year_length();
    dd + info.tagu1 - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalendarConfig;
    use crate::types::YearType;

    fn tables() -> ConstantTables {
        ConstantTables::new(&CalendarConfig::default()).unwrap()
    }

    #[test]
    fn test_forward_cases() {
        struct TestCase {
            jdn:       i64,
            year:      i64,
            year_type: YearType,
            month:     MyanmarMonth,
            day:       i64,
        }

        let cases = [
            // 2000-01-01
            TestCase {
                jdn:       2_451_545,
                year:      1361,
                year_type: YearType::LittleWatat,
                month:     MyanmarMonth::Nadaw,
                day:       25,
            },
            // 2024-04-09
            TestCase {
                jdn:       2_460_410,
                year:      1385,
                year_type: YearType::BigWatat,
                month:     MyanmarMonth::LateTagu,
                day:       1,
            },
            // 2024-04-17
            TestCase {
                jdn:       2_460_418,
                year:      1386,
                year_type: YearType::Common,
                month:     MyanmarMonth::Tagu,
                day:       9,
            },
            // 2024-05-22
            TestCase {
                jdn:       2_460_453,
                year:      1386,
                year_type: YearType::Common,
                month:     MyanmarMonth::Kason,
                day:       15,
            },
            // 2024-07-20
            TestCase {
                jdn:       2_460_512,
                year:      1386,
                year_type: YearType::Common,
                month:     MyanmarMonth::Waso,
                day:       15,
            },
            // 2024-10-17
            TestCase {
                jdn:       2_460_601,
                year:      1386,
                year_type: YearType::Common,
                month:     MyanmarMonth::Thadingyut,
                day:       15,
            },
            // 2025-07-10
            TestCase {
                jdn:       2_460_867,
                year:      1387,
                year_type: YearType::Common,
                month:     MyanmarMonth::Waso,
                day:       16,
            },
            // 2023-08-01
            TestCase {
                jdn:       2_460_158,
                year:      1385,
                year_type: YearType::BigWatat,
                month:     MyanmarMonth::Waso,
                day:       15,
            },
            // 2024-01-15
            TestCase {
                jdn:       2_460_325,
                year:      1385,
                year_type: YearType::BigWatat,
                month:     MyanmarMonth::Pyatho,
                day:       5,
            },
            // 2025-01-01
            TestCase {
                jdn:       2_460_677,
                year:      1386,
                year_type: YearType::Common,
                month:     MyanmarMonth::Pyatho,
                day:       3,
            },
        ];

        let tables = tables();
        for case in &cases {
            let date = to_lunar(&tables, case.jdn).unwrap();
            assert_eq!(date.year.year, case.year, "year of {}", case.jdn);
            assert_eq!(date.year.year_type, case.year_type, "type of {}", case.jdn);
            assert_eq!(date.month, case.month, "month of {}", case.jdn);
            assert_eq!(date.day, case.day, "day of {}", case.jdn);
        }
    }

    #[test]
    fn test_reverse_matches_known_days() {
        let tables = tables();
        let y1385 = year::resolve(&tables, 1385);
        let y1386 = year::resolve(&tables, 1386);
        assert_eq!(to_julian_day(&y1386, MyanmarMonth::Tagu, 1), 2_460_410);
        assert_eq!(to_julian_day(&y1385, MyanmarMonth::LateTagu, 1), 2_460_410);
        assert_eq!(to_julian_day(&y1385, MyanmarMonth::FirstWaso, 1), 2_460_114);
        assert_eq!(to_julian_day(&y1385, MyanmarMonth::Waso, 15), 2_460_158);
    }

    #[test]
    fn test_round_trip_over_a_century() {
        let tables = tables();
        for jdn in (2_415_021..2_451_545).step_by(3) {
            let date = to_lunar(&tables, jdn).unwrap();
            assert_eq!(to_julian_day(&date.year, date.month, date.day), jdn);
        }
    }

    #[test]
    fn test_first_waso_only_in_watat_years() {
        let tables = tables();
        for jdn in 2_440_000..2_470_000 {
            let date = to_lunar(&tables, jdn).unwrap();
            if date.month == MyanmarMonth::FirstWaso {
                assert!(date.year.year_type.is_watat(), "First Waso in common year at {jdn}");
            }
        }
    }

    #[test]
    fn test_day_before_tagu_uses_previous_year() {
        let tables = tables();
        // year_of gives -692, whose Tagu 1 is three days later
        assert_eq!(year_of(1_701_410), -692);
        assert_eq!(year::resolve(&tables, -692).tagu1, 1_701_413);

        let date = to_lunar(&tables, 1_701_410).unwrap();
        assert_eq!(date.year.year, -693);
        assert_eq!(date.month, MyanmarMonth::LateTagu);
        assert_eq!(date.day, 27);
        assert_eq!(to_julian_day(&date.year, date.month, date.day), 1_701_410);
    }

    #[test]
    fn test_year_of_new_year_boundary() {
        // Late Tagu 5 of 1385 and Tagu 9 of 1386 straddle the solar new year
        assert_eq!(year_of(2_460_414), 1385);
        assert_eq!(year_of(2_460_418), 1386);
    }
}
