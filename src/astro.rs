//! Astrological day markers and cycles.
//!
//! Every function here is pure over (month, day, month length, weekday, year).

use serde::{Deserialize, Serialize};

use crate::consts::{FORTNIGHT_DAYS, FULL_MOON_DAY};
use crate::tables::{
    AMYEITTASOTE, MAHAYATKYAN, NAGAPOR, PYATHADA, SHANYAT, THAMAPHYU, WARAMEITTUGYI, YATPOTE,
    YATYOTEMA,
};
use crate::types::{Mahabote, MoonPhase, MyanmarMonth, Nagahle, Nakhat, Weekday};

/// The fifteen traditional day classifications.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AstrologicalDays {
    pub sabbath:            bool,
    pub sabbath_eve:        bool,
    pub yatyaza:            bool,
    pub pyathada:           bool,
    pub afternoon_pyathada: bool,
    pub thamanyo:           bool,
    pub amyeittasote:       bool,
    pub warameittugyi:      bool,
    pub warameittunge:      bool,
    pub yatpote:            bool,
    pub thamaphyu:          bool,
    pub nagapor:            bool,
    pub yatyotema:          bool,
    pub mahayatkyan:        bool,
    pub shanyat:            bool,
}

impl AstrologicalDays {
    /// Evaluates every marker for one day.
    pub fn compute(month: MyanmarMonth, day: i64, month_length: i64, weekday: Weekday) -> Self {
        let wd = weekday.index();
        let fd = fortnight_day(day);
        let (pyathada, afternoon_pyathada) = pyathada(month, wd);

        Self {
            sabbath: is_sabbath(day, month_length),
            sabbath_eve: is_sabbath_eve(day, month_length),
            yatyaza: yatyaza(month, wd),
            pyathada,
            afternoon_pyathada,
            thamanyo: thamanyo(month, wd),
            amyeittasote: fd == by_weekday(&AMYEITTASOTE, wd),
            warameittugyi: fd == by_weekday(&WARAMEITTUGYI, wd),
            warameittunge: 12 - fd == (wd + 6) % 7,
            yatpote: fd == by_weekday(&YATPOTE, wd),
            thamaphyu: fd == by_weekday(&THAMAPHYU, wd),
            nagapor: fd == by_weekday(&NAGAPOR, wd) % FORTNIGHT_DAYS,
            yatyotema: in_day_pair(&YATYOTEMA, month, day),
            mahayatkyan: in_day_pair(&MAHAYATKYAN, month, day),
            shanyat: in_day_pair(&SHANYAT, month, day),
        }
    }
}

fn by_weekday(table: &[i64; 7], wd: i64) -> i64 {
    table[wd.rem_euclid(7) as usize]
}

/// Day pairs only exist for Tagu through Wagaung.
fn in_day_pair(table: &[[i64; 2]; 5], month: MyanmarMonth, day: i64) -> bool {
    usize::try_from(month.number() - 1)
        .ok()
        .and_then(|i| table.get(i))
        .is_some_and(|pair| pair.contains(&day))
}

fn is_sabbath(day: i64, month_length: i64) -> bool {
    day == 8 || day == FULL_MOON_DAY || day == 23 || day == month_length
}

fn is_sabbath_eve(day: i64, month_length: i64) -> bool {
    day == 7 || day == FULL_MOON_DAY - 1 || day == 22 || day == month_length - 1
}

fn yatyaza(month: MyanmarMonth, wd: i64) -> bool {
    let m1 = month.number_as_waso() % 4;
    let wd1 = m1 / 2 + 4;
    let wd2 = ((1 - m1 / 2) + m1 % 2) * (1 + 2 * (m1 % 2));
    wd == wd1 || wd == wd2
}

/// Returns (pyathada, afternoon pyathada); the two never both hold.
fn pyathada(month: MyanmarMonth, wd: i64) -> (bool, bool) {
    let m1 = month.number_as_waso() % 4;
    if m1 == 0 && wd == Weekday::Wednesday.index() {
        return (false, true);
    }
    (m1 == by_weekday(&PYATHADA, wd), false)
}

fn thamanyo(month: MyanmarMonth, wd: i64) -> bool {
    // Late months count as the month they repeat
    let mut m = month.number() % 13 + month.number() / 13;
    if m <= 0 {
        m = MyanmarMonth::Waso.number();
    }
    let m1 = m - 1 - m / 9;
    let wd1 = (m1 * 2 - m1 / 8) % 7;
    (wd + 7 - wd1) % 7 <= 1
}

/// Day number within the waxing or waning half (1..=15).
pub const fn fortnight_day(day: i64) -> i64 {
    day - FORTNIGHT_DAYS * (day / (FORTNIGHT_DAYS + 1))
}

/// Moon phase of `day` in a month of `month_length` days.
pub fn moon_phase(day: i64, month_length: i64) -> MoonPhase {
    let raw = (day + 1) / 16 + day / 16 + day / month_length;
    MoonPhase::ALL[raw.clamp(0, 3) as usize]
}

/// Mahabote house of a year and weekday.
pub const fn mahabote(year: i64, weekday: Weekday) -> Mahabote {
    Mahabote::from_index(year - weekday.index())
}

/// Nakhat of a year.
pub const fn nakhat(year: i64) -> Nakhat {
    Nakhat::from_index(year)
}

/// Nagahle direction of a month; First Waso counts as Waso.
pub const fn nagahle(month: MyanmarMonth) -> Nagahle {
    Nagahle::from_index((month.number_as_waso() % 12) / 3)
}
