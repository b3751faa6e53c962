use serde::{Deserialize, Serialize};

use crate::config::WatatRule;
use crate::consts::{
    KALI_YUGA_OFFSET, LUNAR_MONTH, METONIC_CYCLE, METONIC_WATAT_THRESHOLD, MYANMAR_EPOCH,
    SOLAR_YEAR,
};
use crate::era;
use crate::tables::ConstantTables;

/// Intercalation result for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Watat {
    /// Final watat flag, after the exception table.
    pub is_watat:      bool,
    /// Watat flag from the era rule alone.
    pub formulaic:     bool,
    /// Julian Day Number of the (second) Waso full moon.
    pub full_moon_day: i64,
}

/// Determines whether `year` is a watat year and when its Waso full moon falls.
pub fn compute(tables: &ConstantTables, year: i64) -> Watat {
    let params = era::resolve(tables, year);
    // Excess of solar over lunar months that the era tolerates.
    let monthly_drift = SOLAR_YEAR / 12.0 - LUNAR_MONTH;
    let threshold_adjust = monthly_drift * (12.0 - params.month_number);

    let mut excess = (SOLAR_YEAR * year.saturating_add(KALI_YUGA_OFFSET) as f64) % LUNAR_MONTH;
    if excess < threshold_adjust {
        excess += LUNAR_MONTH;
    }

    let full_moon_day = (SOLAR_YEAR * year as f64 + MYANMAR_EPOCH - excess
        + 4.5 * LUNAR_MONTH
        + params.watat_offset
        + params.full_moon_offset as f64)
        .round() as i64;

    let formulaic = match params.rule {
        WatatRule::ExcessDays => excess >= LUNAR_MONTH - monthly_drift * params.month_number,
        WatatRule::Metonic => {
            (7 * year.rem_euclid(METONIC_CYCLE) + 2) % METONIC_CYCLE >= METONIC_WATAT_THRESHOLD
        },
    };

    Watat {
        is_watat: formulaic ^ params.watat_exception,
        formulaic,
        full_moon_day,
    }
}
