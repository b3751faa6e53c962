#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::thread;

use myanmar_calendar::render::{self, TextReport};
use myanmar_calendar::{
    CalendarConfig, CalendarError, Filter, GregorianRange, LogicMode, MoonPhase, MyanmarCalendar,
    MyanmarMonth, SearchCriteria, Weekday, YearType,
};

fn calendar() -> MyanmarCalendar {
    MyanmarCalendar::with_default_config().unwrap()
}

#[test]
fn test_known_dates() {
    struct TestCase {
        gregorian: &'static str,
        year:      i64,
        month:     MyanmarMonth,
        day:       i64,
        weekday:   Weekday,
        phase:     MoonPhase,
    }

    let cases = [
        TestCase {
            gregorian: "2000-01-01",
            year:      1361,
            month:     MyanmarMonth::Nadaw,
            day:       25,
            weekday:   Weekday::Saturday,
            phase:     MoonPhase::Waning,
        },
        TestCase {
            gregorian: "2024-04-09",
            year:      1385,
            month:     MyanmarMonth::LateTagu,
            day:       1,
            weekday:   Weekday::Tuesday,
            phase:     MoonPhase::Waxing,
        },
        TestCase {
            gregorian: "2024-04-17",
            year:      1386,
            month:     MyanmarMonth::Tagu,
            day:       9,
            weekday:   Weekday::Wednesday,
            phase:     MoonPhase::Waxing,
        },
        TestCase {
            gregorian: "2024-05-22",
            year:      1386,
            month:     MyanmarMonth::Kason,
            day:       15,
            weekday:   Weekday::Wednesday,
            phase:     MoonPhase::FullMoon,
        },
        TestCase {
            gregorian: "2024-10-17",
            year:      1386,
            month:     MyanmarMonth::Thadingyut,
            day:       15,
            weekday:   Weekday::Thursday,
            phase:     MoonPhase::FullMoon,
        },
        TestCase {
            gregorian: "2023-08-01",
            year:      1385,
            month:     MyanmarMonth::Waso,
            day:       15,
            weekday:   Weekday::Tuesday,
            phase:     MoonPhase::FullMoon,
        },
        TestCase {
            gregorian: "2025-07-09",
            year:      1387,
            month:     MyanmarMonth::Waso,
            day:       15,
            weekday:   Weekday::Wednesday,
            phase:     MoonPhase::FullMoon,
        },
    ];

    let calendar = calendar();
    for case in &cases {
        let date = calendar.parse_gregorian(case.gregorian).unwrap();
        assert_eq!(date.myanmar_year, case.year, "{}", case.gregorian);
        assert_eq!(date.month, case.month, "{}", case.gregorian);
        assert_eq!(date.day_of_month, case.day, "{}", case.gregorian);
        assert_eq!(date.weekday, case.weekday, "{}", case.gregorian);
        assert_eq!(date.moon_phase, case.phase, "{}", case.gregorian);
        assert_eq!(date.gregorian().unwrap().to_string(), case.gregorian);
    }
}

#[test]
fn test_lent_begins_on_waso_full_moon_of_1387() {
    let calendar = calendar();
    let jd = calendar.date_to_julian_day(1387, MyanmarMonth::Waso, 15).unwrap();
    assert!((jd - 2_460_866.0).abs() < f64::EPSILON);

    let date = calendar.julian_day_to_date(jd).unwrap();
    assert_eq!(date.year_type, YearType::Common);
    assert_eq!(date.full_moon_day, 2_460_866);
    assert!(date.days.sabbath);
    assert_eq!(
        &date.festivals[..2],
        ["Beginning of Buddhist Lent", "Waso Full Moon"]
    );
    assert!(date.holidays.contains(&"Religious Holiday".to_owned()));
}

#[test]
fn test_warameittugyi_on_tagu_9_wednesday() {
    let date = calendar().parse_gregorian("2024-04-17").unwrap();
    assert!(date.days.warameittugyi);
    assert!(date.days.yatyaza);
    assert!(!date.days.pyathada);
    assert_eq!(
        date.astrological_events,
        vec!["Yatyaza - Avoid new ventures", "Warameittugyi - Great auspicious day"]
    );
}

#[test]
fn test_end_of_lent_holidays() {
    let calendar = calendar();
    let holidays = |day| {
        let jd = calendar.date_to_julian_day(1386, MyanmarMonth::Thadingyut, day).unwrap();
        calendar.julian_day_to_date(jd).unwrap().holidays
    };
    assert_eq!(holidays(14), vec!["Holiday"]);
    assert_eq!(holidays(15), vec!["Religious Holiday"]);
    assert_eq!(holidays(16), vec!["Holiday"]);
    assert!(holidays(17).is_empty());

    let full_moon = calendar.parse_gregorian("2024-10-17").unwrap();
    assert_eq!(
        full_moon.festivals,
        vec![
            "End of Buddhist Lent",
            "Thadingyut Festival",
            "Festival of Lights",
            "Buddhist Sabbath Day"
        ]
    );
}

#[test]
fn test_thingyan_days_of_1386() {
    let calendar = calendar();
    let tagu = calendar.month_days(1386, MyanmarMonth::Tagu).unwrap();
    let thingyan: Vec<i64> = tagu
        .iter()
        .filter(|d| d.festivals.contains(&"Thingyan Water Festival".to_owned()))
        .map(|d| d.day_of_month)
        .collect();
    assert_eq!(thingyan, vec![13, 14, 15, 16]);
}

#[test]
fn test_watat_year_has_first_waso_and_long_nayon() {
    let calendar = calendar();
    let info = calendar.year_info(1385).unwrap();
    assert_eq!(info.year_type, YearType::BigWatat);

    let first_waso = calendar.month_days(1385, MyanmarMonth::FirstWaso).unwrap();
    assert_eq!(first_waso.len(), 30);
    assert!(first_waso.iter().all(|d| d.month_length == 30));

    let nayon = calendar.month_days(1385, MyanmarMonth::Nayon).unwrap();
    assert_eq!(nayon.last().map(|d| d.day_of_month), Some(30));
}

#[test]
fn test_year_length_matches_tagu_spacing() {
    let calendar = calendar();
    for year in 1320..1400 {
        let this = calendar.year_info(year).unwrap();
        let next = calendar.year_info(year + 1).unwrap();
        assert_eq!(next.tagu1 - this.tagu1, this.year_length(), "{year}");
    }
}

#[test]
fn test_range_query_over_a_month() {
    let report = calendar().date_range("2024-07-01", "2024-07-31").unwrap();
    assert_eq!(report.total(), 31);
    let dates = report.into_strict().unwrap();
    let sabbaths = dates.iter().filter(|d| d.days.sabbath).count();
    assert_eq!(sabbaths, 4);
    assert!(
        dates
            .windows(2)
            .all(|w| (w[1].julian_day - w[0].julian_day - 1.0).abs() < f64::EPSILON)
    );
}

#[test]
fn test_range_query_rejects_reversed_range() {
    assert!(matches!(
        calendar().date_range("2024-07-31", "2024-07-01"),
        Err(CalendarError::InvalidRange { .. })
    ));
}

#[test]
fn test_search_full_moons_of_a_year() {
    let calendar = calendar();
    let range = GregorianRange::parse("2024-01-01", "2024-12-31").unwrap();
    let criteria = SearchCriteria {
        moon_phase: Some(Filter::Exact(MoonPhase::FullMoon)),
        ..SearchCriteria::default()
    };
    let hits = calendar.search(&range, &criteria).unwrap();
    assert!((12..=13).contains(&hits.len()));
    assert!(hits.iter().all(|h| h.date.day_of_month == 15));
    assert!(hits.windows(2).all(|w| w[0].gregorian < w[1].gregorian));
    assert!(hits.iter().all(|h| h.description == "MoonPhase=Full Moon"));
}

#[test]
fn test_search_or_ranks_full_matches_first() {
    let calendar = calendar();
    let range = GregorianRange::parse("2024-07-01", "2024-07-31").unwrap();
    let criteria = SearchCriteria {
        weekday: Some(Weekday::Saturday),
        sabbath: true,
        logic: LogicMode::Or,
        ..SearchCriteria::default()
    };
    let hits = calendar.search(&range, &criteria).unwrap();
    // Waso 8 and Waso 15 both fall on a Saturday
    let full: Vec<String> = hits[..2].iter().map(|h| h.gregorian.to_string()).collect();
    assert_eq!(full, ["2024-07-13", "2024-07-20"]);
    assert!(hits[..2].iter().all(|h| (h.score - 1.0).abs() < f64::EPSILON));
    assert!(hits[2..].iter().all(|h| (h.score - 0.5).abs() < f64::EPSILON));
    assert_eq!(hits.len(), 6);
}

#[test]
fn test_custom_config_from_json() {
    // An extra exception flips 1386 into a watat year
    let json = r#"{ "watat_exceptions": [1201, 1202, 1263, 1264, 1344, 1345, 1386] }"#;
    let config = CalendarConfig::from_json(json).unwrap();
    let calendar = MyanmarCalendar::with_config(config).unwrap();
    assert!(calendar.year_info(1386).unwrap().year_type.is_watat());
    assert!(!self::calendar().year_info(1386).unwrap().year_type.is_watat());
}

#[test]
fn test_rejects_unsorted_config() {
    let json = r#"{ "watat_exceptions": [1345, 1344] }"#;
    assert!(matches!(
        CalendarConfig::from_json(json),
        Err(CalendarError::InvalidConfig(_))
    ));
}

#[test]
fn test_shared_between_threads() {
    let calendar = Arc::new(calendar());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let calendar = Arc::clone(&calendar);
            thread::spawn(move || {
                let start = 2_460_000 + i * 100;
                (start..start + 100)
                    .map(|jd| calendar.julian_day_to_date(jd as f64).unwrap().day_of_month)
                    .sum::<i64>()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap() > 0);
    }
}

#[test]
fn test_renderers_agree_on_a_date() {
    let date = calendar().parse_gregorian("2024-07-20").unwrap();
    let json = render::to_json(&date);
    let csv = render::to_csv_string(std::slice::from_ref(&date)).unwrap();
    let report = TextReport(&date).to_string();

    assert_eq!(json["dayOfMonth"], 15);
    assert!(csv.lines().nth(1).unwrap().starts_with("2024-07-20,1386,2568,Waso,15,"));
    assert!(report.contains("   Month: Waso"));
}
