//! The traditional Myanmar (Burmese) lunisolar calendar.
//!
//! Converts between Julian Days and Myanmar dates (era year, month, day),
//! resolves the intercalation pattern of every year, and derives the
//! traditional astrological day markers, festivals and holidays of a date.
//!
//! ```
//! use myanmar_calendar::{MyanmarCalendar, MyanmarMonth, MoonPhase};
//!
//! # fn main() -> Result<(), myanmar_calendar::CalendarError> {
//! let calendar = MyanmarCalendar::with_default_config()?;
//! let date = calendar.parse_gregorian("2024-07-20")?;
//! assert_eq!(date.myanmar_year, 1386);
//! assert_eq!(date.month, MyanmarMonth::Waso);
//! assert_eq!(date.moon_phase, MoonPhase::FullMoon);
//! assert!(date.festivals.iter().any(|f| f == "Beginning of Buddhist Lent"));
//! assert_eq!(date.format("&d &M &y ME"), "15 Waso 1386 ME");
//!
//! let jd = calendar.date_to_julian_day(1386, MyanmarMonth::Waso, 15)?;
//! assert_eq!(jd, 2_460_512.0);
//! # Ok(())
//! # }
//! ```

mod consts;
mod date;
mod engine;
mod error;
mod format;
mod gregorian;
mod prelude;
mod range;
mod types;

pub mod astro;
pub mod config;
pub mod convert;
pub mod era;
pub mod festival;
pub mod render;
pub mod search;
pub mod tables;
pub mod watat;
pub mod year;

pub use astro::AstrologicalDays;
pub use config::{CalendarConfig, EraDefinition, FullMoonOffset, WatatRule};
pub use consts::*;
pub use date::MyanmarDate;
pub use engine::MyanmarCalendar;
pub use error::CalendarError;
pub use format::format_date;
pub use gregorian::{GregorianDate, ParseError, days_in_month, is_leap_year};
pub use range::{DayFailure, GregorianRange, RangeReport};
pub use search::{Filter, LogicMode, SearchCriteria, SearchHit};
pub use tables::ConstantTables;
pub use types::{Mahabote, MoonPhase, MyanmarMonth, Nagahle, Nakhat, Weekday, YearType};
pub use year::YearInfo;
