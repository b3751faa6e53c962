//! Output forms of converted dates: JSON, CSV, a text report for one day and
//! a compact table for many.

use std::fmt;
use std::io;

use serde_json::{Value, json};

use crate::{CalendarError, MyanmarDate};

/// Header of the CSV export, one column per field in this order.
pub const CSV_HEADER: [&str; 22] = [
    "Date",
    "ME_Year",
    "SE_Year",
    "Month",
    "Day",
    "Month_Length",
    "Year_Type",
    "Moon_Phase",
    "Fortnight_Day",
    "Weekday",
    "Mahabote",
    "Nakhat",
    "Nagahle",
    "Is_Sabbath",
    "Is_Thamanyo",
    "Is_Yatyaza",
    "Is_Pyathada",
    "Is_Warameittugyi",
    "Is_Amyeittasote",
    "Festivals",
    "Astrological_Events",
    "Julian_Day",
];

const LIST_SEPARATOR: &str = "; ";
const RULE: &str = "===================================================================";

/// The JSON object of one date.
pub fn to_json(date: &MyanmarDate) -> Value {
    let days = &date.days;
    json!({
        "myanmarYear": date.myanmar_year,
        "sasanaYear": date.sasana_year,
        "month": { "number": date.month.number(), "name": date.month.to_string() },
        "dayOfMonth": date.day_of_month,
        "yearType": { "type": date.year_type.number(), "name": date.year_type.to_string() },
        "moonPhase": { "phase": date.moon_phase.number(), "name": date.moon_phase.to_string() },
        "fortnightDay": date.fortnight_day,
        "monthLength": date.month_length,
        "weekday": { "number": date.weekday.index(), "name": date.weekday.to_string() },
        "astrology": {
            "mahabote": date.mahabote.to_string(),
            "nakhat": date.nakhat.to_string(),
            "nagahle": date.nagahle.to_string(),
        },
        "astrologicalDays": {
            "sabbath": days.sabbath,
            "sabbathEve": days.sabbath_eve,
            "yatyaza": days.yatyaza,
            "pyathada": days.pyathada,
            "afternoonPyathada": days.afternoon_pyathada,
            "thamanyo": days.thamanyo,
            "amyeittasote": days.amyeittasote,
            "warameittugyi": days.warameittugyi,
            "warameittunge": days.warameittunge,
            "yatpote": days.yatpote,
            "thamaphyu": days.thamaphyu,
            "nagapor": days.nagapor,
            "yatyotema": days.yatyotema,
            "mahayatkyan": days.mahayatkyan,
            "shanyat": days.shanyat,
        },
        "festivals": date.festivals,
        "julianDay": date.julian_day,
    })
}

/// A JSON array of many dates.
pub fn to_json_array(dates: &[MyanmarDate]) -> Value {
    Value::Array(dates.iter().map(to_json).collect())
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn csv_record(date: &MyanmarDate) -> [String; 22] {
    let days = &date.days;
    [
        date.gregorian().map(|d| d.to_string()).unwrap_or_default(),
        date.myanmar_year.to_string(),
        date.sasana_year.to_string(),
        date.month.to_string(),
        date.day_of_month.to_string(),
        date.month_length.to_string(),
        date.year_type.to_string(),
        date.moon_phase.to_string(),
        date.fortnight_day.to_string(),
        date.weekday.to_string(),
        date.mahabote.to_string(),
        date.nakhat.to_string(),
        date.nagahle.to_string(),
        yes_no(days.sabbath).to_owned(),
        yes_no(days.thamanyo).to_owned(),
        yes_no(days.yatyaza).to_owned(),
        yes_no(days.pyathada).to_owned(),
        yes_no(days.warameittugyi).to_owned(),
        yes_no(days.amyeittasote).to_owned(),
        date.festivals.join(LIST_SEPARATOR),
        date.astrological_events.join(LIST_SEPARATOR),
        format!("{:.6}", date.julian_day),
    ]
}

fn render_error(err: impl fmt::Display) -> CalendarError {
    CalendarError::Render(err.to_string())
}

/// Writes the header and one row per date.
///
/// # Errors
/// Returns `CalendarError::Render` if the underlying writer fails.
pub fn write_csv<W: io::Write>(dates: &[MyanmarDate], writer: W) -> Result<(), CalendarError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADER).map_err(render_error)?;
    for date in dates {
        csv.write_record(csv_record(date)).map_err(render_error)?;
    }
    csv.flush().map_err(render_error)
}

/// The CSV export as a string.
///
/// # Errors
/// Returns `CalendarError::Render` if the export cannot be produced.
pub fn to_csv_string(dates: &[MyanmarDate]) -> Result<String, CalendarError> {
    let mut buf = Vec::new();
    write_csv(dates, &mut buf)?;
    String::from_utf8(buf).map_err(render_error)
}

/// Overall character of a day, from the strongest marker present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    ReligiousObservance,
    Auspicious,
    Inauspicious,
    Neutral,
}

impl Recommendation {
    pub const fn for_date(date: &MyanmarDate) -> Self {
        let days = &date.days;
        if days.sabbath {
            Self::ReligiousObservance
        } else if days.warameittugyi || days.thamanyo {
            Self::Auspicious
        } else if days.pyathada || days.yatyaza {
            Self::Inauspicious
        } else {
            Self::Neutral
        }
    }

    pub const fn status(self) -> &'static str {
        match self {
            Self::ReligiousObservance => "Religious Observance",
            Self::Auspicious => "Auspicious Day",
            Self::Inauspicious => "Inauspicious Day",
            Self::Neutral => "Neutral Day",
        }
    }

    pub const fn note(self) -> &'static str {
        match self {
            Self::ReligiousObservance => {
                "Observe Buddhist precepts, visit pagodas, practice meditation"
            },
            Self::Auspicious => "Good day for starting new ventures and important activities",
            Self::Inauspicious => "Avoid important activities, postpone new beginnings",
            Self::Neutral => "Normal activities permitted",
        }
    }
}

fn day_labels(date: &MyanmarDate) -> Vec<&'static str> {
    let days = &date.days;
    [
        (days.sabbath, "Buddhist Sabbath Day"),
        (days.sabbath_eve, "Sabbath Eve"),
        (days.thamanyo, "Thamanyo (Auspicious)"),
        (days.warameittugyi, "Warameittugyi (Great Auspicious)"),
        (days.warameittunge, "Warameittunge (Lesser Auspicious)"),
        (days.amyeittasote, "Amyeittasote (Moderately Auspicious)"),
        (days.yatyaza, "Yatyaza (Inauspicious)"),
        (days.pyathada, "Pyathada (Very Inauspicious)"),
        (days.afternoon_pyathada, "Afternoon Pyathada"),
    ]
    .into_iter()
    .filter_map(|(held, label)| held.then_some(label))
    .collect()
}

/// Multi-section text report of one date.
#[derive(Debug, Clone, Copy)]
pub struct TextReport<'a>(pub &'a MyanmarDate);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.0;
        writeln!(f, "{RULE}")?;
        writeln!(f, "MYANMAR CALENDAR")?;
        writeln!(f, "{RULE}")?;

        writeln!(f, "\nDATE INFORMATION:")?;
        if let Ok(gregorian) = date.gregorian() {
            writeln!(f, "   Gregorian Date: {gregorian}")?;
        }
        writeln!(f, "   Myanmar Year: {} ME", date.myanmar_year)?;
        writeln!(f, "   Sasana Year: {} SE", date.sasana_year)?;
        writeln!(f, "   Month: {}", date.month)?;
        writeln!(f, "   Day: {}", date.day_of_month)?;
        writeln!(f, "   Year Type: {}", date.year_type)?;

        writeln!(f, "\nLUNAR INFORMATION:")?;
        writeln!(f, "   Moon Phase: {}", date.moon_phase)?;
        writeln!(f, "   Fortnight Day: {}", date.fortnight_day)?;
        writeln!(f, "   Month Length: {} days", date.month_length)?;

        writeln!(f, "\nASTROLOGICAL INFORMATION:")?;
        writeln!(f, "   Weekday: {}", date.weekday)?;
        writeln!(f, "   Mahabote: {}", date.mahabote)?;
        writeln!(f, "   Nakhat: {}", date.nakhat)?;
        writeln!(f, "   Nagahle: {}", date.nagahle)?;

        writeln!(f, "\nASTROLOGICAL DAYS:")?;
        for label in day_labels(date) {
            writeln!(f, "   * {label}")?;
        }

        for (title, items) in [
            ("FESTIVALS & OBSERVANCES", &date.festivals),
            ("HOLIDAYS", &date.holidays),
            ("ASTROLOGICAL EVENTS", &date.astrological_events),
        ] {
            if items.is_empty() {
                continue;
            }
            writeln!(f, "\n{title}:")?;
            for item in items {
                writeln!(f, "   * {item}")?;
            }
        }

        let recommendation = Recommendation::for_date(date);
        writeln!(f, "\nRECOMMENDATIONS:")?;
        writeln!(f, "   Status: {}", recommendation.status())?;
        writeln!(f, "   Note: {}", recommendation.note())?;
        writeln!(f, "\n{RULE}")
    }
}

fn short_markers(date: &MyanmarDate) -> String {
    let days = &date.days;
    let markers: Vec<&str> = [
        (days.sabbath, "Sabbath"),
        (days.sabbath_eve, "Eve"),
        (days.thamanyo, "Thamanyo"),
        (days.warameittugyi, "Warameittugyi"),
        (days.amyeittasote, "Amyeittasote"),
        (days.yatyaza, "Yatyaza"),
        (days.pyathada, "Pyathada"),
        (days.afternoon_pyathada, "PM Pyathada"),
    ]
    .into_iter()
    .filter_map(|(held, label)| held.then_some(label))
    .collect();
    markers.join(", ")
}

/// One line per date: Gregorian date, Myanmar date, weekday, markers and
/// festivals.
#[derive(Debug, Clone, Copy)]
pub struct CompactTable<'a>(pub &'a [MyanmarDate]);

impl fmt::Display for CompactTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10}  {:>4}  {:<10}  {:>3}  {:<9}  {:<9}  {:<28}  Festivals",
            "Date", "ME", "Month", "Day", "Phase", "Weekday", "Markers"
        )?;
        for date in self.0 {
            let gregorian = date.gregorian().map(|d| d.to_string()).unwrap_or_default();
            writeln!(
                f,
                "{:<10}  {:>4}  {:<10}  {:>3}  {:<9}  {:<9}  {:<28}  {}",
                gregorian,
                date.myanmar_year,
                date.month.to_string(),
                date.day_of_month,
                date.moon_phase.to_string(),
                date.weekday.to_string(),
                short_markers(date),
                date.festivals.join(LIST_SEPARATOR),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MyanmarCalendar;

    fn convert(jd: f64) -> MyanmarDate {
        MyanmarCalendar::with_default_config()
            .unwrap()
            .julian_day_to_date(jd)
            .unwrap()
    }

    #[test]
    fn test_json_fields() {
        let value = to_json(&convert(2_460_512.0));
        assert_eq!(value["myanmarYear"], 1386);
        assert_eq!(value["sasanaYear"], 2568);
        assert_eq!(value["month"]["number"], 4);
        assert_eq!(value["month"]["name"], "Waso");
        assert_eq!(value["dayOfMonth"], 15);
        assert_eq!(value["yearType"]["type"], 0);
        assert_eq!(value["yearType"]["name"], "Common Year");
        assert_eq!(value["moonPhase"]["phase"], 1);
        assert_eq!(value["moonPhase"]["name"], "Full Moon");
        assert_eq!(value["weekday"]["number"], 0);
        assert_eq!(value["weekday"]["name"], "Saturday");
        assert_eq!(value["astrology"]["mahabote"], "Binga");
        assert_eq!(value["astrology"]["nagahle"], "North");
        assert_eq!(value["astrologicalDays"]["sabbath"], true);
        assert_eq!(value["astrologicalDays"]["yatyaza"], false);
        assert_eq!(value["astrologicalDays"].as_object().unwrap().len(), 15);
        assert_eq!(value["festivals"][0], "Beginning of Buddhist Lent");
        assert_eq!(value["julianDay"], 2_460_512.0);
    }

    #[test]
    fn test_json_array() {
        let dates = [convert(2_460_512.0), convert(2_460_513.0)];
        let value = to_json_array(&dates);
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[1]["dayOfMonth"], 16);
    }

    #[test]
    fn test_csv_export() {
        let csv = to_csv_string(&[convert(2_460_512.0), convert(2_451_545.0)]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER.join(","));
        assert_eq!(
            lines[1],
            "2024-07-20,1386,2568,Waso,15,30,Common Year,Full Moon,15,Saturday,Binga,Orc,North,\
             Yes,Yes,No,No,No,No,\
             Beginning of Buddhist Lent; Waso Full Moon; Buddhist Sabbath Day,\
             Thamanyo - Auspicious day; Buddhist Sabbath - Religious observance; Full Moon Day,\
             2460512.000000"
        );
        assert!(lines[2].starts_with(
            "2000-01-01,1361,2543,Nadaw,25,29,Little Watat,Waning,10,Saturday,"
        ));
        assert!(lines[2].ends_with(",2451545.000000"));
    }

    #[test]
    fn test_csv_header_only_for_no_dates() {
        let csv = to_csv_string(&[]).unwrap();
        assert_eq!(csv.trim_end(), CSV_HEADER.join(","));
    }

    #[test]
    fn test_recommendation_priority() {
        struct TestCase {
            jd:       f64,
            expected: Recommendation,
        }

        let cases = [
            // Waso 15, sabbath and thamanyo
            TestCase { jd: 2_460_512.0, expected: Recommendation::ReligiousObservance },
            // Nadaw 25, pyathada and thamanyo
            TestCase { jd: 2_451_545.0, expected: Recommendation::Auspicious },
            // Tagu 9, yatyaza and warameittugyi
            TestCase { jd: 2_460_418.0, expected: Recommendation::Auspicious },
        ];

        for case in &cases {
            assert_eq!(Recommendation::for_date(&convert(case.jd)), case.expected, "{}", case.jd);
        }
    }

    #[test]
    fn test_recommendation_inauspicious_and_neutral() {
        let mut date = convert(2_460_512.0);
        date.days = crate::AstrologicalDays {
            yatyaza: true,
            ..crate::AstrologicalDays::default()
        };
        assert_eq!(Recommendation::for_date(&date), Recommendation::Inauspicious);
        date.days = crate::AstrologicalDays::default();
        assert_eq!(Recommendation::for_date(&date), Recommendation::Neutral);
        assert_eq!(Recommendation::Neutral.note(), "Normal activities permitted");
    }

    #[test]
    fn test_text_report_sections() {
        let report = TextReport(&convert(2_460_512.0)).to_string();
        for needle in [
            "DATE INFORMATION:",
            "   Gregorian Date: 2024-07-20",
            "   Myanmar Year: 1386 ME",
            "   Sasana Year: 2568 SE",
            "   Month: Waso",
            "   Year Type: Common Year",
            "   Moon Phase: Full Moon",
            "   Month Length: 30 days",
            "   Weekday: Saturday",
            "   * Buddhist Sabbath Day",
            "   * Thamanyo (Auspicious)",
            "FESTIVALS & OBSERVANCES:",
            "   * Waso Full Moon",
            "HOLIDAYS:",
            "   * Religious Holiday",
            "ASTROLOGICAL EVENTS:",
            "   Status: Religious Observance",
        ] {
            assert!(report.contains(needle), "missing {needle:?} in\n{report}");
        }
        assert!(!report.contains("Sabbath Eve"));
    }

    #[test]
    fn test_text_report_omits_empty_lists() {
        // 2024-07-21, Waso 16: no festival
        let report = TextReport(&convert(2_460_513.0)).to_string();
        assert!(!report.contains("FESTIVALS & OBSERVANCES:"));
        assert!(report.contains("ASTROLOGICAL DAYS:"));
    }

    #[test]
    fn test_compact_table() {
        let dates = [convert(2_460_512.0), convert(2_460_513.0)];
        let table = CompactTable(&dates).to_string();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Date"));
        assert!(lines[1].starts_with(
            "2024-07-20  1386  Waso         15  Full Moon  Saturday   Sabbath, Thamanyo"
        ));
        assert!(
            lines[1].ends_with("Beginning of Buddhist Lent; Waso Full Moon; Buddhist Sabbath Day")
        );
        assert!(lines[2].starts_with("2024-07-21  1386  Waso         16  Waning     Sunday"));
    }
}
