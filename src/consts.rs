/// Mean length of the solar year in days (Makaranta system)
pub const SOLAR_YEAR: f64 = 1_577_917_828.0 / 4_320_000.0;

/// Mean length of the synodic lunar month in days
pub const LUNAR_MONTH: f64 = 1_577_917_828.0 / 53_433_336.0;

/// Julian Day of the beginning of Myanmar year 0
pub const MYANMAR_EPOCH: f64 = 1_954_168.050_623;

/// Offset between the Myanmar Era and the Kali Yuga year count
pub const KALI_YUGA_OFFSET: i64 = 3739;

/// Sasana (Buddhist Era) year = Myanmar year + this offset
pub const SASANA_OFFSET: i64 = 1182;

/// First year of the second era (British colonial period)
pub const SECOND_ERA_START: i64 = 1217;
/// First year of the third era (after Independence)
pub const THIRD_ERA_START: i64 = 1312;

/// Maximum number of years searched backward for the preceding watat year
pub const WATAT_SEARCH_LIMIT: i64 = 3;

/// Days in a common Myanmar year
pub const COMMON_YEAR_DAYS: i64 = 354;
/// Days from the first of Tagu to the (second) Waso full moon
pub const TAGU_TO_WASO_FULL_MOON: i64 = 102;
/// Days added to a watat year by the intercalary first Waso
pub const INTERCALARY_MONTH_DAYS: i64 = 30;

/// Full-moon spacing (mod 354) between consecutive watat years of a little watat
pub const LITTLE_WATAT_SPACING: i64 = 30;
/// Full-moon spacing (mod 354) between consecutive watat years of a big watat
pub const BIG_WATAT_SPACING: i64 = 31;

/// Length of the Metonic cycle used for first-era intercalation
pub const METONIC_CYCLE: i64 = 19;
/// Remainders at or above this value mark a watat year in the Metonic cycle
pub const METONIC_WATAT_THRESHOLD: i64 = 12;

/// Days in each half of the lunar month
pub const FORTNIGHT_DAYS: i64 = 15;
/// Day of the month on which the moon is full
pub const FULL_MOON_DAY: i64 = 15;

/// Number of days in a week
pub const DAYS_IN_WEEK: i64 = 7;

/// Julian Days accepted by the engine lie strictly inside ±this bound
pub const JULIAN_DAY_LIMIT: f64 = 1.0e9;
/// Myanmar years accepted by the engine lie strictly inside ±this bound,
/// which covers every year reachable from [`JULIAN_DAY_LIMIT`]
pub const MYANMAR_YEAR_LIMIT: i64 = 3_000_000;

/// Maximum valid Gregorian year accepted by the date parser (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// January month number
pub const JANUARY: u8 = 1;

/// December month number
pub const DECEMBER: u8 = 12;

/// Maximum valid Gregorian month (December)
pub const MAX_MONTH: u8 = DECEMBER;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Separator between the start and end of a date range ("2024-01-01/2024-01-31")
pub const RANGE_SEPARATOR: char = '/';
