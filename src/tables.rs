//! Historical exception data and the fixed astrological lookup arrays.
//!
//! [`ConstantTables`] is the validated, read-only form of a
//! [`CalendarConfig`]. The astrological arrays are indexed by weekday,
//! Saturday first, unless noted otherwise.

use crate::config::{CalendarConfig, EraDefinition, FullMoonOffset, WatatRule};
use crate::consts::{SECOND_ERA_START, THIRD_ERA_START};
use crate::error::CalendarError;

/// Years whose formulaic watat result is inverted by the court calendar.
pub const HISTORICAL_WATAT_EXCEPTIONS: [i64; 6] = [1201, 1202, 1263, 1264, 1344, 1345];

/// Signed corrections (in days) to the Waso full moon, sorted by year.
pub const HISTORICAL_FULL_MOON_OFFSETS: [(i64, i64); 42] = [
    (1120, -1),
    (1126, -1),
    (1150, 1),
    (1152, -1),
    (1161, -1),
    (1162, -1),
    (1172, -1),
    (1181, -1),
    (1190, 1),
    (1191, -1),
    (1194, -1),
    (1195, -1),
    (1198, -1),
    (1201, 1),
    (1202, 1),
    (1208, 1),
    (1215, -1),
    (1217, -1),
    (1218, -1),
    (1221, 1),
    (1234, 1),
    (1235, -1),
    (1236, -1),
    (1237, -1),
    (1238, -1),
    (1239, -1),
    (1241, -1),
    (1242, -1),
    (1244, 1),
    (1245, 1),
    (1253, -1),
    (1258, 1),
    (1264, 1),
    (1291, -1),
    (1292, -1),
    (1298, 1),
    (1309, 1),
    (1310, 1),
    (1315, 1),
    (1324, 1),
    (1344, 1),
    (1345, 1),
];

/// The three historical eras: before British rule, the colonial period and
/// the period after Independence.
pub const HISTORICAL_ERAS: [EraDefinition; 3] = [
    EraDefinition {
        id:           1,
        start_year:   0,
        watat_offset: -2.0,
        month_number: -1.0,
        rule:         WatatRule::Metonic,
    },
    EraDefinition {
        id:           2,
        start_year:   SECOND_ERA_START,
        watat_offset: -1.0,
        month_number: 4.0,
        rule:         WatatRule::ExcessDays,
    },
    EraDefinition {
        id:           3,
        start_year:   THIRD_ERA_START,
        watat_offset: -0.5,
        month_number: 8.0,
        rule:         WatatRule::ExcessDays,
    },
];

/// Pyathada target month quarter per weekday.
pub const PYATHADA: [i64; 7] = [1, 3, 3, 0, 2, 1, 2];
/// Amyeittasote fortnight day per weekday.
pub const AMYEITTASOTE: [i64; 7] = [5, 8, 3, 7, 2, 4, 1];
/// Warameittugyi fortnight day per weekday.
pub const WARAMEITTUGYI: [i64; 7] = [7, 1, 4, 8, 9, 6, 3];
/// Yatpote fortnight day per weekday.
pub const YATPOTE: [i64; 7] = [8, 1, 4, 6, 9, 8, 7];
/// Thamaphyu fortnight day per weekday.
pub const THAMAPHYU: [i64; 7] = [1, 2, 6, 6, 5, 6, 7];
/// Nagapor values per weekday; compared modulo 15.
pub const NAGAPOR: [i64; 7] = [26, 21, 2, 10, 18, 2, 21];

/// Yatyotema day pairs for Tagu through Wagaung (indexed by month - 1).
pub const YATYOTEMA: [[i64; 2]; 5] = [[2, 7], [3, 1], [6, 3], [1, 7], [5, 1]];
/// Mahayatkyan day pairs for Tagu through Wagaung.
pub const MAHAYATKYAN: [[i64; 2]; 5] = [[3, 1], [1, 2], [6, 1], [2, 1], [7, 1]];
/// Shanyat day pairs for Tagu through Wagaung.
pub const SHANYAT: [[i64; 2]; 5] = [[8, 9], [6, 8], [2, 3], [1, 3], [4, 5]];

/// Validated exception and era tables.
///
/// Built once from a [`CalendarConfig`]; every lookup is a binary search.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantTables {
    watat_exceptions:  Vec<i64>,
    full_moon_offsets: Vec<FullMoonOffset>,
    eras:              Vec<EraDefinition>,
}

impl ConstantTables {
    /// Validates the configuration and takes a copy of its tables.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidConfig` if the configuration fails
    /// [`CalendarConfig::validate`].
    pub fn new(config: &CalendarConfig) -> Result<Self, CalendarError> {
        config.validate()?;
        Ok(Self {
            watat_exceptions:  config.watat_exceptions.clone(),
            full_moon_offsets: config.full_moon_offsets.clone(),
            eras:              config.eras.clone(),
        })
    }

    /// Whether the watat status of `year` is inverted by the exception table.
    pub fn is_watat_exception(&self, year: i64) -> bool {
        self.watat_exceptions.binary_search(&year).is_ok()
    }

    /// Full-moon correction for `year` in days (0 when the year has none).
    pub fn full_moon_offset(&self, year: i64) -> i64 {
        self.full_moon_offsets
            .binary_search_by_key(&year, |entry| entry.year)
            .map_or(0, |i| self.full_moon_offsets[i].offset)
    }

    /// The era containing `year`. Years before the first era's start use
    /// the first era.
    pub fn era(&self, year: i64) -> &EraDefinition {
        let idx = self.eras.partition_point(|era| era.start_year <= year);
        &self.eras[idx.saturating_sub(1)]
    }

    /// Exception years, ascending.
    pub fn watat_exceptions(&self) -> &[i64] {
        &self.watat_exceptions
    }
}
