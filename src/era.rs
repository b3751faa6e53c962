use serde::{Deserialize, Serialize};

use crate::config::WatatRule;
use crate::tables::ConstantTables;

/// Era constants and per-year exceptions for one Myanmar year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EraParameters {
    pub era:              u8,
    pub watat_offset:     f64,
    pub month_number:     f64,
    pub rule:             WatatRule,
    /// Day correction to the Waso full moon.
    pub full_moon_offset: i64,
    /// Whether the formulaic watat result is inverted.
    pub watat_exception:  bool,
}

/// Resolves the era parameters for `year`. Total over all years.
pub fn resolve(tables: &ConstantTables, year: i64) -> EraParameters {
    let era = tables.era(year);
    EraParameters {
        era:              era.id,
        watat_offset:     era.watat_offset,
        month_number:     era.month_number,
        rule:             era.rule,
        full_moon_offset: tables.full_moon_offset(year),
        watat_exception:  tables.is_watat_exception(year),
    }
}
