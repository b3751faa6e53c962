//! Festivals, public holidays and astrological events as declarative rules.
//!
//! Each table is evaluated top to bottom; the order of the resulting name
//! lists is the display priority.

use crate::astro::AstrologicalDays;
use crate::types::MyanmarMonth::{
    Kason, Nadaw, Pyatho, Tabaung, Tabodwe, Tagu, Tazaungmon, Thadingyut, Wagaung, Waso,
};
use crate::types::{MoonPhase, MyanmarMonth};

/// The inputs every rule is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayContext {
    pub year:       i64,
    pub month:      MyanmarMonth,
    pub day:        i64,
    pub moon_phase: MoonPhase,
    pub days:       AstrologicalDays,
}

/// Which days of the matching months a rule fires on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayRule {
    /// Days of the month in `first..=last`.
    Range(i64, i64),
    /// Any of the listed days of the month.
    Days(&'static [i64]),
    FullMoon,
    Sabbath,
}

/// One row of a festival or holiday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservanceRule {
    /// Months the rule applies to; empty means every month.
    pub months: &'static [MyanmarMonth],
    pub day:    DayRule,
    /// First Myanmar year the observance is kept.
    pub since:  Option<i64>,
    pub names:  &'static [&'static str],
}

impl ObservanceRule {
    /// Whether the rule fires for `ctx`.
    pub fn applies(&self, ctx: &DayContext) -> bool {
        let month_ok = self.months.is_empty() || self.months.contains(&ctx.month);
        let year_ok = self.since.is_none_or(|since| ctx.year >= since);
        let day_ok = match self.day {
            DayRule::Range(first, last) => (first..=last).contains(&ctx.day),
            DayRule::Days(days) => days.contains(&ctx.day),
            DayRule::FullMoon => ctx.moon_phase == MoonPhase::FullMoon,
            DayRule::Sabbath => ctx.days.sabbath,
        };
        month_ok && year_ok && day_ok
    }
}

const fn rule(
    months: &'static [MyanmarMonth],
    day: DayRule,
    names: &'static [&'static str],
) -> ObservanceRule {
    ObservanceRule {
        months,
        day,
        since: None,
        names,
    }
}

const fn rule_since(
    since: i64,
    months: &'static [MyanmarMonth],
    day: DayRule,
    names: &'static [&'static str],
) -> ObservanceRule {
    ObservanceRule {
        months,
        day,
        since: Some(since),
        names,
    }
}

/// Festivals and religious observances.
pub const FESTIVALS: &[ObservanceRule] = &[
    rule(&[Tagu], DayRule::Range(13, 16), &["Thingyan Water Festival"]),
    rule(&[Tagu], DayRule::Days(&[1]), &["Myanmar New Year"]),
    rule(&[Kason], DayRule::FullMoon, &["Vesak Full Moon", "Buddha's Birthday"]),
    rule(&[Waso], DayRule::FullMoon, &["Beginning of Buddhist Lent", "Waso Full Moon"]),
    rule(&[Wagaung], DayRule::FullMoon, &["Metta Day"]),
    rule(&[Wagaung], DayRule::Days(&[10]), &["Taungpyone Pwe"]),
    rule(&[Wagaung], DayRule::Days(&[23]), &["Yadanagu Pwe"]),
    rule(
        &[Thadingyut],
        DayRule::FullMoon,
        &["End of Buddhist Lent", "Thadingyut Festival", "Festival of Lights"],
    ),
    rule(&[Tazaungmon], DayRule::FullMoon, &["Tazaungmon Festival", "Kathina Robe Offering"]),
    rule(&[Nadaw], DayRule::Days(&[1]), &["Shan New Year Day"]),
    rule(&[Pyatho], DayRule::Days(&[1]), &["Karen New Year Day"]),
    rule(&[Tabaung], DayRule::FullMoon, &["Shwedagon Pagoda Festival"]),
    rule(&[], DayRule::Sabbath, &["Buddhist Sabbath Day"]),
];

/// Public and religious holidays.
pub const HOLIDAYS: &[ObservanceRule] = &[
    rule(&[Tagu], DayRule::Range(13, 16), &["Thingyan Public Holiday"]),
    rule(&[Tagu], DayRule::Days(&[1]), &["Myanmar New Year Holiday"]),
    rule(&[Kason, Waso, Thadingyut, Tazaungmon], DayRule::Sabbath, &["Religious Holiday"]),
    rule_since(1379, &[Thadingyut], DayRule::Days(&[14, 16]), &["Holiday"]),
    rule_since(1379, &[Tazaungmon], DayRule::Days(&[14]), &["Holiday"]),
    rule_since(1282, &[Tazaungmon], DayRule::Days(&[25]), &["National Day"]),
    rule_since(1306, &[Nadaw], DayRule::Days(&[1]), &["Authors Day"]),
    rule_since(1309, &[Tabodwe], DayRule::Days(&[16]), &["Mon National Day"]),
];

/// Labelled astrological events, in display order.
pub const EVENTS: &[(fn(&DayContext) -> bool, &str)] = &[
    (|c: &DayContext| c.days.yatyaza, "Yatyaza - Avoid new ventures"),
    (|c: &DayContext| c.days.pyathada, "Pyathada - Very inauspicious"),
    (|c: &DayContext| c.days.afternoon_pyathada, "Afternoon Pyathada - Afternoon inauspicious"),
    (|c: &DayContext| c.days.thamanyo, "Thamanyo - Auspicious day"),
    (|c: &DayContext| c.days.warameittugyi, "Warameittugyi - Great auspicious day"),
    (|c: &DayContext| c.days.amyeittasote, "Amyeittasote - Moderately auspicious"),
    (|c: &DayContext| c.days.sabbath, "Buddhist Sabbath - Religious observance"),
    (|c: &DayContext| c.moon_phase == MoonPhase::FullMoon, "Full Moon Day"),
    (|c: &DayContext| c.moon_phase == MoonPhase::NewMoon, "New Moon Day"),
];

/// Name lists attached to a date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Observances {
    pub festivals:           Vec<String>,
    pub holidays:            Vec<String>,
    pub astrological_events: Vec<String>,
}

fn collect(table: &[ObservanceRule], ctx: &DayContext) -> Vec<String> {
    table
        .iter()
        .filter(|rule| rule.applies(ctx))
        .flat_map(|rule| rule.names.iter().map(|&name| name.to_owned()))
        .collect()
}

/// Evaluates all three tables for one day.
pub fn identify(ctx: &DayContext) -> Observances {
    Observances {
        festivals:           collect(FESTIVALS, ctx),
        holidays:            collect(HOLIDAYS, ctx),
        astrological_events: EVENTS
            .iter()
            .filter(|(applies, _)| applies(ctx))
            .map(|&(_, label)| label.to_owned())
            .collect(),
    }
}
