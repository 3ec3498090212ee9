use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MIN_YEAR, WEEKDAY_NAMES, WEEKDAY_TRANSLITERATIONS,
};
#[cfg(feature = "chrono")]
use crate::julian::JulianDay;
use crate::prelude::*;
use crate::{ConversionError, validate};
use serde::{Deserialize, Serialize};

/// The calendar system a [`CalendarDate`] is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calendar {
    #[display(fmt = "Gregorian")]
    Gregorian,
    #[display(fmt = "Hijri")]
    Hijri,
}

/// Day of the week, indexed from Sunday.
///
/// The Kuwaiti reckoning names the days Ahad..Sabt starting on Sunday, while
/// the Gregorian side is usually keyed by Monday-first English names. Both map
/// onto this one enum; [`Weekday::index`] is the canonical 0 = Sunday index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    #[display(fmt = "Sunday")]
    Sunday = 0,
    #[display(fmt = "Monday")]
    Monday = 1,
    #[display(fmt = "Tuesday")]
    Tuesday = 2,
    #[display(fmt = "Wednesday")]
    Wednesday = 3,
    #[display(fmt = "Thursday")]
    Thursday = 4,
    #[display(fmt = "Friday")]
    Friday = 5,
    #[display(fmt = "Saturday")]
    Saturday = 6,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the weekday for a Sunday-based index, wrapping modulo 7
    pub const fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(7) as usize]
    }

    /// Sunday-based index (0 = Sunday .. 6 = Saturday)
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Monday-based number (1 = Monday .. 7 = Sunday), as used by ISO 8601
    pub const fn number_from_monday(self) -> u8 {
        match self {
            Self::Sunday => 7,
            other => other as u8,
        }
    }

    /// Kuwaiti transliterated name (Ahad, Ithnin, ...)
    pub const fn transliteration(self) -> &'static str {
        WEEKDAY_TRANSLITERATIONS[self as usize]
    }

    /// English name, the key the Gregorian side's localization maps use
    pub const fn english_name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }

    /// The following day
    pub const fn succ(self) -> Self {
        Self::from_index(self as i64 + 1)
    }
}

#[cfg(feature = "chrono")]
impl From<Weekday> for chrono::Weekday {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sunday => Self::Sun,
            Weekday::Monday => Self::Mon,
            Weekday::Tuesday => Self::Tue,
            Weekday::Wednesday => Self::Wed,
            Weekday::Thursday => Self::Thu,
            Weekday::Friday => Self::Fri,
            Weekday::Saturday => Self::Sat,
        }
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        Self::from_index(i64::from(weekday.num_days_from_sunday()))
    }
}

/// An immutable (year, month, day) triple tagged with its calendar.
///
/// Values built through [`CalendarDate::gregorian`] or [`CalendarDate::hijri`]
/// are validated; conversion results are built by the converters directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct CalendarDate {
    calendar: Calendar,
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a Gregorian date, rejecting impossible triples and the days
    /// dropped by the October 1582 reform.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidDate` if the triple is not a real date.
    pub fn gregorian(year: i32, month: u8, day: u8) -> Result<Self, ConversionError> {
        if !validate::is_valid_gregorian(year, month, day)
            || validate::is_in_cutover_gap(year, month, day)
        {
            return Err(Self::rejected(Calendar::Gregorian, year, month, day));
        }
        Ok(Self::new_unchecked(Calendar::Gregorian, year, month, day))
    }

    /// Creates a Hijri date. Only the fixed 12 month, 30 day schema is
    /// checked; per-month lengths belong to the backend.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidDate` if the year is below 1 or the
    /// month/day fall outside `1..=12` / `1..=30`.
    pub fn hijri(year: i32, month: u8, day: u8) -> Result<Self, ConversionError> {
        if year < MIN_YEAR || !validate::is_valid_hijri_range(month, day) {
            return Err(Self::rejected(Calendar::Hijri, year, month, day));
        }
        Ok(Self::new_unchecked(Calendar::Hijri, year, month, day))
    }

    /// Creates a date of either calendar, dispatching to the matching constructor
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidDate` if validation fails.
    pub fn new(calendar: Calendar, year: i32, month: u8, day: u8) -> Result<Self, ConversionError> {
        match calendar {
            Calendar::Gregorian => Self::gregorian(year, month, day),
            Calendar::Hijri => Self::hijri(year, month, day),
        }
    }

    pub(crate) const fn new_unchecked(calendar: Calendar, year: i32, month: u8, day: u8) -> Self {
        Self {
            calendar,
            year,
            month,
            day,
        }
    }

    fn rejected(calendar: Calendar, year: i32, month: u8, day: u8) -> ConversionError {
        log::warn!("Invalid {calendar} date: {year}-{month}-{day}");
        ConversionError::InvalidDate {
            calendar,
            year,
            month,
            day,
        }
    }

    #[inline]
    pub const fn calendar(&self) -> Calendar {
        self.calendar
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns (year, month, day)
    pub const fn to_tuple(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Fails with `CalendarMismatch` unless this date is in `expected`
    pub(crate) fn expect_calendar(&self, expected: Calendar) -> Result<(), ConversionError> {
        if self.calendar == expected {
            Ok(())
        } else {
            Err(ConversionError::CalendarMismatch {
                expected,
                found: self.calendar,
            })
        }
    }
}

/// Maps the same physical day through the JDN, so a proleptic `chrono`
/// date before 1582-10-15 becomes its Julian reckoning.
///
/// Fails for days outside CE 1..=9999 and for Julian-only leap days
/// (e.g. 1500-02-29), which [`CalendarDate::gregorian`] does not accept.
#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for CalendarDate {
    type Error = ConversionError;

    fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
        let jdn = JulianDay::from(date);
        if !jdn.is_supported() {
            use chrono::Datelike;
            return Err(Self::rejected(
                Calendar::Gregorian,
                date.year(),
                date.month() as u8,
                date.day() as u8,
            ));
        }
        let (year, month, day) = jdn.to_calendar();
        Self::gregorian(year, month, day)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<CalendarDate> for chrono::NaiveDate {
    type Error = ConversionError;

    fn try_from(date: CalendarDate) -> Result<Self, Self::Error> {
        Self::try_from(JulianDay::from_date(&date)?)
    }
}

/// Output of a single conversion: the converted date plus, when the backend
/// computes one, the weekday of the converted day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversionResult {
    date: CalendarDate,
    weekday: Option<Weekday>,
}

impl ConversionResult {
    pub const fn new(date: CalendarDate, weekday: Option<Weekday>) -> Self {
        Self { date, weekday }
    }

    /// The converted date
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Day of month of the converted date
    pub const fn day(&self) -> u8 {
        self.date.day
    }

    /// Month of the converted date
    pub const fn month(&self) -> u8 {
        self.date.month
    }

    /// Year of the converted date
    pub const fn year(&self) -> i32 {
        self.date.year
    }

    /// Weekday of the converted day, if the backend provided one
    pub const fn weekday(&self) -> Option<Weekday> {
        self.weekday
    }

    /// Sunday-based weekday index, if the backend provided one
    pub fn weekday_index(&self) -> Option<u8> {
        self.weekday.map(Weekday::index)
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
