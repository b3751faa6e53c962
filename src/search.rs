//! Multi-criteria search over converted dates.
//!
//! Every active criterion is scored independently; `LogicMode` decides
//! whether all of them or any of them must hold. With no active criterion
//! an `And` search keeps every day and an `Or` search keeps none.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::MyanmarDate;
use crate::gregorian::GregorianDate;
use crate::types::{MoonPhase, MyanmarMonth, Weekday};

/// Score and description of a search with no active criterion.
const UNFILTERED_SCORE: f64 = 0.5;
const UNFILTERED_DESCRIPTION: &str = "All days (no specific criteria)";

/// How active criteria are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicMode {
    #[default]
    And,
    Or,
}

/// An exact value or an inclusive range of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter<T> {
    Exact(T),
    Between(T, T),
}

impl<T: PartialOrd> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::Exact(expected) => value == expected,
            Self::Between(low, high) => low <= value && value <= high,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(value) => write!(f, "{value}"),
            Self::Between(low, high) => write!(f, "{low}-{high}"),
        }
    }
}

/// Conditions a day must meet to be reported by a search.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    /// Myanmar Era year.
    pub year:          Option<Filter<i64>>,
    pub month:         Option<Filter<MyanmarMonth>>,
    pub moon_phase:    Option<Filter<MoonPhase>>,
    pub fortnight_day: Option<Filter<i64>>,
    pub weekday:       Option<Weekday>,
    pub sabbath:       bool,
    pub sabbath_eve:   bool,
    pub yatyaza:       bool,
    pub pyathada:      bool,
    pub thamanyo:      bool,
    pub logic:         LogicMode,
}

impl SearchCriteria {
    /// Sabbath days that are also full moons.
    pub fn sabbath_and_full_moon() -> Self {
        Self {
            moon_phase: Some(Filter::Exact(MoonPhase::FullMoon)),
            sabbath: true,
            logic: LogicMode::And,
            ..Self::default()
        }
    }

    /// Full moons together with yatyaza days.
    pub fn full_moon_or_yatyaza() -> Self {
        Self {
            moon_phase: Some(Filter::Exact(MoonPhase::FullMoon)),
            yatyaza: true,
            logic: LogicMode::Or,
            ..Self::default()
        }
    }

    /// Outcome of every active criterion for `date`, as (matched, label).
    fn checks(&self, date: &MyanmarDate) -> Vec<(bool, String)> {
        let mut checks = Vec::new();
        if let Some(filter) = &self.year {
            checks.push((filter.matches(&date.myanmar_year), format!("Year={filter}")));
        }
        if let Some(filter) = &self.month {
            checks.push((filter.matches(&date.month), format!("Month={filter}")));
        }
        if let Some(filter) = &self.moon_phase {
            checks.push((filter.matches(&date.moon_phase), format!("MoonPhase={filter}")));
        }
        if let Some(filter) = &self.fortnight_day {
            checks.push((filter.matches(&date.fortnight_day), format!("FortnightDay={filter}")));
        }
        if let Some(weekday) = self.weekday {
            checks.push((date.weekday == weekday, format!("Weekday={weekday}")));
        }

        let flags = [
            (self.sabbath, date.days.sabbath, "Sabbath"),
            (self.sabbath_eve, date.days.sabbath_eve, "Sabbath Eve"),
            (self.yatyaza, date.days.yatyaza, "Yatyaza"),
            (self.pyathada, date.days.pyathada, "Pyathada"),
            (self.thamanyo, date.days.thamanyo, "Thamanyo"),
        ];
        checks.extend(
            flags
                .into_iter()
                .filter(|&(wanted, ..)| wanted)
                .map(|(_, held, label)| (held, label.to_owned())),
        );
        checks
    }

    /// Scores `date` against the criteria.
    ///
    /// Returns the fraction of active criteria that matched and a
    /// comma-separated description of them, or `None` if the day is not a hit.
    pub fn evaluate(&self, date: &MyanmarDate) -> Option<(f64, String)> {
        let checks = self.checks(date);
        if checks.is_empty() {
            return (self.logic == LogicMode::And)
                .then(|| (UNFILTERED_SCORE, UNFILTERED_DESCRIPTION.to_owned()));
        }

        let is_hit = match self.logic {
            LogicMode::And => checks.iter().all(|(matched, _)| *matched),
            LogicMode::Or => checks.iter().any(|(matched, _)| *matched),
        };
        if !is_hit {
            return None;
        }

        let matched: Vec<&str> = checks
            .iter()
            .filter(|(matched, _)| *matched)
            .map(|(_, label)| label.as_str())
            .collect();
        let score = matched.len() as f64 / checks.len() as f64;
        Some((score, matched.join(", ")))
    }

    /// True when no criterion is active.
    pub fn is_unfiltered(&self) -> bool {
        self.year.is_none()
            && self.month.is_none()
            && self.moon_phase.is_none()
            && self.fortnight_day.is_none()
            && self.weekday.is_none()
            && !(self.sabbath || self.sabbath_eve || self.yatyaza || self.pyathada || self.thamanyo)
    }
}

/// One day reported by a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub gregorian:   GregorianDate,
    pub date:        MyanmarDate,
    /// Fraction of active criteria that matched, in (0, 1].
    pub score:       f64,
    pub description: String,
}

/// Orders hits by descending score, then chronologically.
pub fn rank(hits: &mut [SearchHit]) {
    hits.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.date.julian_day.total_cmp(&b.date.julian_day))
    });
}
