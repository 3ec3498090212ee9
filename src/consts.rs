/// Minimum supported Gregorian year (inclusive)
pub const MIN_YEAR: i32 = 1;

/// Maximum supported Gregorian year (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Maximum valid month (December / Dhu al-Hijjah)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Month number for October, the month of the 1582 reform
pub const OCTOBER: u8 = 10;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
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

/// Upper bound on any Hijri month length, tabular or observed
pub const MAX_HIJRI_DAY: u8 = 30;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Year of the Julian to Gregorian reform
pub const REFORM_YEAR: i32 = 1582;
/// Last day of October 1582 still reckoned on the Julian calendar
pub const LAST_JULIAN_DAY: u8 = 4;
/// First day of October 1582 reckoned on the Gregorian calendar
pub const FIRST_GREGORIAN_DAY: u8 = 15;
/// JDN of 1582-10-15, the first Gregorian day
pub const GREGORIAN_CUTOVER_JDN: i64 = 2_299_161;
/// JDN of 0001-01-01 (Julian), the first supported day
pub const MIN_JDN: i64 = 1_721_424;
/// JDN of 9999-12-31, the last supported day
pub const MAX_JDN: i64 = 5_373_484;

/// Days per Julian year
pub(crate) const JULIAN_YEAR: f64 = 365.25;
/// Mean month length used by the civil month term
pub(crate) const MONTH_FACTOR: f64 = 30.6001;
/// Offset of the Julian period origin in years (4713 BCE, astronomical)
pub(crate) const JULIAN_PERIOD_YEARS: i64 = 4716;
/// Constant day offset of the civil to JDN formula
pub(crate) const JDN_DAY_OFFSET: i64 = 1524;

/// Astronomical epoch of the Kuwaiti reckoning
pub const KUWAITI_EPOCH_JDN: i64 = 1_948_084;
/// Days in one 30 year tabular cycle
pub const HIJRI_CYCLE_DAYS: i64 = 10_631;
/// Years in one tabular cycle
pub const HIJRI_CYCLE_YEARS: i64 = 30;
/// Fractional day shift applied to the year boundary
pub(crate) const KUWAITI_SHIFT: f64 = 8.01 / 60.0;
/// Half-day bias used when rounding the month
pub(crate) const KUWAITI_MONTH_BIAS: f64 = 28.5001;
/// Mean lunar month as used by the month term
pub(crate) const KUWAITI_MONTH_LENGTH: f64 = 29.5;
/// Mean lunar month as used by the day term
pub(crate) const KUWAITI_DAY_FACTOR: f64 = 29.5001;

/// Kuwaiti weekday transliterations, indexed from Sunday
pub const WEEKDAY_TRANSLITERATIONS: [&str; 7] = [
    "Ahad", "Ithnin", "Thulatha", "Arbaa", "Khams", "Jumuah", "Sabt",
];

/// English weekday names, indexed from Sunday
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
