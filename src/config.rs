use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::tables::{HISTORICAL_ERAS, HISTORICAL_FULL_MOON_OFFSETS, HISTORICAL_WATAT_EXCEPTIONS};

/// How an era decides whether a year is intercalary before exceptions are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatatRule {
    /// 19-year Metonic cycle: watat iff `(7 * year + 2) mod 19 >= 12`.
    Metonic,
    /// Watat iff the year's excess days over whole lunar months pass the
    /// era threshold.
    ExcessDays,
}

/// Constants of one calendar era.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EraDefinition {
    /// Era identifier (1, 2, 3 for the historical eras).
    pub id:           u8,
    /// First Myanmar year of the era.
    pub start_year:   i64,
    /// Offset applied to the Waso full moon, in days.
    pub watat_offset: f64,
    /// Number of months of excess days tolerated before intercalating.
    pub month_number: f64,
    pub rule:         WatatRule,
}

/// Full-moon correction for a single year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FullMoonOffset {
    pub year:   i64,
    pub offset: i64,
}

/// Immutable input from which the engine builds its [`ConstantTables`].
///
/// The default is the historical data of the Myanmar court calendar. A
/// configuration can also be read from JSON; missing fields fall back to
/// the defaults.
///
/// [`ConstantTables`]: crate::ConstantTables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Years whose formulaic watat result is inverted, strictly ascending.
    pub watat_exceptions:  Vec<i64>,
    /// Full-moon corrections, strictly ascending by year.
    pub full_moon_offsets: Vec<FullMoonOffset>,
    /// Eras, strictly ascending by start year.
    pub eras:              Vec<EraDefinition>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            watat_exceptions:  HISTORICAL_WATAT_EXCEPTIONS.to_vec(),
            full_moon_offsets: HISTORICAL_FULL_MOON_OFFSETS
                .iter()
                .map(|&(year, offset)| FullMoonOffset { year, offset })
                .collect(),
            eras:              HISTORICAL_ERAS.to_vec(),
        }
    }
}

impl CalendarConfig {
    /// Parses a configuration from JSON.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidConfig` if the JSON is malformed or the
    /// resulting configuration does not validate.
    pub fn from_json(json: &str) -> Result<Self, CalendarError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CalendarError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants the lookups rely on.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidConfig` describing the first violation.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.eras.is_empty() {
            return Err(CalendarError::InvalidConfig(
                "at least one era is required".to_owned(),
            ));
        }
        if let Some(w) = self.eras.windows(2).find(|w| w[0].start_year >= w[1].start_year) {
            return Err(CalendarError::InvalidConfig(format!(
                "eras must be ordered by start year: era {} ({}) is not before era {} ({})",
                w[0].id, w[0].start_year, w[1].id, w[1].start_year
            )));
        }
        if let Some(era) = self
            .eras
            .iter()
            .find(|era| !era.watat_offset.is_finite() || !era.month_number.is_finite())
        {
            return Err(CalendarError::InvalidConfig(format!(
                "era {} has a non-finite constant",
                era.id
            )));
        }
        if let Some(w) = self.watat_exceptions.windows(2).find(|w| w[0] >= w[1]) {
            return Err(CalendarError::InvalidConfig(format!(
                "watat exceptions must be strictly ascending: {} then {}",
                w[0], w[1]
            )));
        }
        if let Some(w) = self
            .full_moon_offsets
            .windows(2)
            .find(|w| w[0].year >= w[1].year)
        {
            return Err(CalendarError::InvalidConfig(format!(
                "full moon offsets must be strictly ascending: {} then {}",
                w[0].year, w[1].year
            )));
        }
        if let Some(entry) = self.full_moon_offsets.iter().find(|entry| entry.offset == 0) {
            return Err(CalendarError::InvalidConfig(format!(
                "full moon offset for {} is zero",
                entry.year
            )));
        }
        Ok(())
    }
}
