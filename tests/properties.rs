#![allow(clippy::unwrap_used)]

use std::sync::LazyLock;

use myanmar_calendar::{
    ConstantTables, GregorianDate, JULIAN_DAY_LIMIT, MoonPhase, MyanmarCalendar, MyanmarMonth,
    watat,
};
use proptest::prelude::*;

static CALENDAR: LazyLock<MyanmarCalendar> =
    LazyLock::new(|| MyanmarCalendar::with_default_config().unwrap());

// Every day number the engine accepts, leaving a week of headroom
fn julian_day() -> impl Strategy<Value = i64> {
    let limit = JULIAN_DAY_LIMIT as i64 - 7;
    -limit..limit
}

// Roughly 650 CE to 2400 CE
fn historical_julian_day() -> impl Strategy<Value = i64> {
    1_960_000i64..2_600_000i64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn test_conversion_round_trip(jdn in julian_day()) {
        let date = CALENDAR.julian_day_to_date(jdn as f64).unwrap();
        let back = CALENDAR
            .date_to_julian_day(date.myanmar_year, date.month, date.day_of_month)
            .unwrap();
        prop_assert_eq!(back as i64, jdn);
        prop_assert_eq!(CALENDAR.to_julian_day(&date).unwrap() as i64, jdn);
    }

    #[test]
    fn test_day_fits_month(jdn in julian_day()) {
        let date = CALENDAR.julian_day_to_date(jdn as f64).unwrap();
        prop_assert!(date.month_length == 29 || date.month_length == 30);
        prop_assert!((1..=date.month_length).contains(&date.day_of_month));
        prop_assert!((1..=15).contains(&date.fortnight_day));
        prop_assert!(date.month != MyanmarMonth::FirstWaso || date.year_type.is_watat());
    }

    #[test]
    fn test_historical_round_trip(jdn in historical_julian_day()) {
        let date = CALENDAR.julian_day_to_date(jdn as f64).unwrap();
        prop_assert_eq!(CALENDAR.to_julian_day(&date).unwrap() as i64, jdn);
    }

    #[test]
    fn test_weekday_repeats_every_seven_days(jdn in julian_day()) {
        let today = CALENDAR.julian_day_to_date(jdn as f64).unwrap();
        let next_week = CALENDAR.julian_day_to_date((jdn + 7) as f64).unwrap();
        prop_assert_eq!(today.weekday, next_week.weekday);
    }

    #[test]
    fn test_sabbath_markers(jdn in julian_day()) {
        let date = CALENDAR.julian_day_to_date(jdn as f64).unwrap();
        prop_assert!(!(date.days.sabbath && date.days.sabbath_eve));
        prop_assert!(!(date.days.pyathada && date.days.afternoon_pyathada));
        if date.day_of_month == 15 {
            prop_assert!(date.days.sabbath);
            prop_assert_eq!(date.moon_phase, MoonPhase::FullMoon);
        }
        if date.day_of_month == date.month_length {
            prop_assert_eq!(date.moon_phase, MoonPhase::NewMoon);
        }
    }

    #[test]
    fn test_gregorian_round_trip(jdn in historical_julian_day()) {
        let date = GregorianDate::from_julian_day_number(jdn).unwrap();
        prop_assert_eq!(date.julian_day_number(), jdn);
        let parsed: GregorianDate = date.to_string().parse().unwrap();
        prop_assert_eq!(parsed, date);
    }
}

#[test]
fn test_exception_years_invert_the_rule() {
    let tables = ConstantTables::new(CALENDAR.config()).unwrap();
    for &year in tables.watat_exceptions() {
        let watat = watat::compute(&tables, year);
        assert_ne!(watat.is_watat, watat.formulaic, "{year}");
    }
    for year in 1350..1400 {
        let watat = watat::compute(&tables, year);
        assert_eq!(watat.is_watat, watat.formulaic, "{year}");
    }
}
