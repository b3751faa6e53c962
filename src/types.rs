use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_IN_WEEK, INTERCALARY_MONTH_DAYS};
use crate::prelude::*;

/// A month of the Myanmar year.
///
/// The discriminants are the traditional month numbers: ordinary months run
/// from Tagu (1) to Tabaung (12). First Waso (0) only occurs in watat years,
/// Late Tagu (13) and Late Kason (14) cover the days between the end of the
/// lunar year and the next solar new year.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MyanmarMonth {
    #[display(fmt = "First Waso")]
    FirstWaso = 0,
    #[display(fmt = "Tagu")]
    Tagu = 1,
    #[display(fmt = "Kason")]
    Kason = 2,
    #[display(fmt = "Nayon")]
    Nayon = 3,
    #[display(fmt = "Waso")]
    Waso = 4,
    #[display(fmt = "Wagaung")]
    Wagaung = 5,
    #[display(fmt = "Tawthalin")]
    Tawthalin = 6,
    #[display(fmt = "Thadingyut")]
    Thadingyut = 7,
    #[display(fmt = "Tazaungmon")]
    Tazaungmon = 8,
    #[display(fmt = "Nadaw")]
    Nadaw = 9,
    #[display(fmt = "Pyatho")]
    Pyatho = 10,
    #[display(fmt = "Tabodwe")]
    Tabodwe = 11,
    #[display(fmt = "Tabaung")]
    Tabaung = 12,
    #[display(fmt = "Late Tagu")]
    LateTagu = 13,
    #[display(fmt = "Late Kason")]
    LateKason = 14,
}

impl MyanmarMonth {
    /// All months in numeric order.
    pub const ALL: [Self; 15] = [
        Self::FirstWaso,
        Self::Tagu,
        Self::Kason,
        Self::Nayon,
        Self::Waso,
        Self::Wagaung,
        Self::Tawthalin,
        Self::Thadingyut,
        Self::Tazaungmon,
        Self::Nadaw,
        Self::Pyatho,
        Self::Tabodwe,
        Self::Tabaung,
        Self::LateTagu,
        Self::LateKason,
    ];

    /// Looks up a month by its traditional number (0..=14).
    pub fn from_number(number: i64) -> Option<Self> {
        usize::try_from(number).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    /// Traditional month number.
    #[inline]
    pub const fn number(self) -> i64 {
        self as i64
    }

    /// Month number with First Waso folded onto Waso, as the astrological
    /// rules treat the intercalary month.
    #[inline]
    pub const fn number_as_waso(self) -> i64 {
        match self {
            Self::FirstWaso => Self::Waso as i64,
            other => other as i64,
        }
    }

    /// Number of days in this month for a year of the given type.
    ///
    /// Odd months have 29 days and even months 30; Nayon gains a day in a
    /// big watat year.
    pub const fn length(self, year_type: YearType) -> i64 {
        let n = self.number();
        let mut len = INTERCALARY_MONTH_DAYS - n % 2;
        if matches!(self, Self::Nayon) {
            len += year_type.number() / 2;
        }
        len
    }
}

/// Intercalation pattern of a Myanmar year.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum YearType {
    /// 354 days, no intercalary month.
    #[display(fmt = "Common Year")]
    Common = 0,
    /// 384 days: an intercalary First Waso.
    #[display(fmt = "Little Watat")]
    LittleWatat = 1,
    /// 385 days: First Waso plus a 30-day Nayon.
    #[display(fmt = "Big Watat")]
    BigWatat = 2,
}

impl YearType {
    /// Numeric code (0 common, 1 little watat, 2 big watat).
    #[inline]
    pub const fn number(self) -> i64 {
        self as i64
    }

    /// Maps a numeric code back to the year type; values above 2 saturate to
    /// [`YearType::BigWatat`].
    pub const fn from_number(number: i64) -> Self {
        match number {
            i64::MIN..=0 => Self::Common,
            1 => Self::LittleWatat,
            _ => Self::BigWatat,
        }
    }

    /// Whether the year carries the intercalary First Waso.
    #[inline]
    pub const fn is_watat(self) -> bool {
        !matches!(self, Self::Common)
    }
}

/// Phase of the moon on a given day of the lunar month.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    #[display(fmt = "Waxing")]
    Waxing = 0,
    #[display(fmt = "Full Moon")]
    FullMoon = 1,
    #[display(fmt = "Waning")]
    Waning = 2,
    #[display(fmt = "New Moon")]
    NewMoon = 3,
}

impl MoonPhase {
    /// All phases in numeric order.
    pub const ALL: [Self; 4] = [Self::Waxing, Self::FullMoon, Self::Waning, Self::NewMoon];

    /// Numeric code (0 waxing .. 3 new moon).
    #[inline]
    pub const fn number(self) -> i64 {
        self as i64
    }

    /// Looks up a phase by its numeric code.
    pub fn from_number(number: i64) -> Option<Self> {
        usize::try_from(number).ok().and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Day of the week, counted from Saturday as the Myanmar tables do.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    #[display(fmt = "Saturday")]
    Saturday = 0,
    #[display(fmt = "Sunday")]
    Sunday = 1,
    #[display(fmt = "Monday")]
    Monday = 2,
    #[display(fmt = "Tuesday")]
    Tuesday = 3,
    #[display(fmt = "Wednesday")]
    Wednesday = 4,
    #[display(fmt = "Thursday")]
    Thursday = 5,
    #[display(fmt = "Friday")]
    Friday = 6,
}

impl Weekday {
    /// All weekdays, Saturday first.
    pub const ALL: [Self; 7] = [
        Self::Saturday,
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Index in the Saturday-first cycle (0..=6).
    #[inline]
    pub const fn index(self) -> i64 {
        self as i64
    }

    /// Weekday for any integer index; the index wraps modulo 7.
    pub const fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(DAYS_IN_WEEK) as usize]
    }

    /// Weekday of the civil day containing the Julian Day `jd`.
    ///
    /// `floor(jd + 1.5) mod 7` counts from Sunday; the Saturday-first index is
    /// one more than that.
    pub fn from_julian_day(jd: f64) -> Self {
        let sunday_based = (jd + 1.5).floor() as i64;
        Self::from_index(sunday_based + 1)
    }
}

/// Mahabote: the seven-house birth-sign cycle of year and weekday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Mahabote {
    #[display(fmt = "Binga")]
    Binga = 0,
    #[display(fmt = "Atun")]
    Atun = 1,
    #[display(fmt = "Yaza")]
    Yaza = 2,
    #[display(fmt = "Adipati")]
    Adipati = 3,
    #[display(fmt = "Marana")]
    Marana = 4,
    #[display(fmt = "Thike")]
    Thike = 5,
    #[display(fmt = "Puti")]
    Puti = 6,
}

impl Mahabote {
    const ALL: [Self; 7] = [
        Self::Binga,
        Self::Atun,
        Self::Yaza,
        Self::Adipati,
        Self::Marana,
        Self::Thike,
        Self::Puti,
    ];

    /// House for any integer index; wraps modulo 7.
    pub const fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(7) as usize]
    }

    #[inline]
    pub const fn index(self) -> i64 {
        self as i64
    }
}

/// Nakhat: the three-year cycle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Nakhat {
    #[display(fmt = "Orc")]
    Orc = 0,
    #[display(fmt = "Elf")]
    Elf = 1,
    #[display(fmt = "Human")]
    Human = 2,
}

impl Nakhat {
    const ALL: [Self; 3] = [Self::Orc, Self::Elf, Self::Human];

    pub const fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(3) as usize]
    }

    #[inline]
    pub const fn index(self) -> i64 {
        self as i64
    }
}

/// Nagahle: the direction the dragon's head faces, by season.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Nagahle {
    #[display(fmt = "West")]
    West = 0,
    #[display(fmt = "North")]
    North = 1,
    #[display(fmt = "East")]
    East = 2,
    #[display(fmt = "South")]
    South = 3,
}

impl Nagahle {
    const ALL: [Self; 4] = [Self::West, Self::North, Self::East, Self::South];

    pub const fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(4) as usize]
    }

    #[inline]
    pub const fn index(self) -> i64 {
        self as i64
    }
}
