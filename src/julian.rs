use crate::consts::{
    GREGORIAN_CUTOVER_JDN, JDN_DAY_OFFSET, JULIAN_PERIOD_YEARS, JULIAN_YEAR, LAST_JULIAN_DAY,
    MAX_JDN, MIN_JDN, MONTH_FACTOR, OCTOBER, REFORM_YEAR,
};
use crate::prelude::*;
use crate::types::{Calendar, CalendarDate, Weekday};
use crate::ConversionError;
use serde::{Deserialize, Serialize};

/// Fractional JDN at the start of March 400 CE, origin of the century rule
const CENTURY_ORIGIN: f64 = 1_867_216.25;
/// Days in a Gregorian century
const GREGORIAN_CENTURY: f64 = 36_524.25;
/// Offset that aligns the year estimate on March 1
const MARCH_BIAS: f64 = 122.1;
/// JDN of 0000-12-31 proleptic Gregorian, day zero of `chrono`'s CE count
#[cfg(feature = "chrono")]
const CHRONO_CE_EPOCH: i64 = 1_721_425;

/// A continuous day count with no calendar attached.
///
/// Civil dates map to JDN on the Julian calendar up to 1582-10-04 and on the
/// Gregorian calendar from 1582-10-15 on, so the ten days dropped by the
/// reform have no JDN of their own. Every product is computed in `f64` and
/// truncated toward zero term by term; reordering the terms changes results
/// near multiples of four.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct JulianDay(i64);

impl JulianDay {
    /// Wraps a raw day count; any value is accepted
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw day count
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// JDN of a civil date (Julian before the reform, Gregorian after).
    ///
    /// Always defined for CE dates; callers wanting to reject impossible
    /// triples validate first.
    pub fn from_calendar(year: i32, month: u8, day: u8) -> Self {
        let (mut y, mut m) = (i64::from(year), i64::from(month));
        // January and February count as months 13 and 14 of the previous year
        if m < 3 {
            y -= 1;
            m += 12;
        }

        let b = reform_correction(y, m, day);
        let jdn = (JULIAN_YEAR * (y + JULIAN_PERIOD_YEARS) as f64) as i64
            + (MONTH_FACTOR * (m + 1) as f64) as i64
            + i64::from(day)
            + b
            - JDN_DAY_OFFSET;

        log::trace!("{year}-{month}-{day} -> JDN {jdn}");
        Self(jdn)
    }

    /// JDN of a validated Gregorian date.
    ///
    /// # Errors
    /// Returns `ConversionError::CalendarMismatch` for a Hijri date.
    pub fn from_date(date: &CalendarDate) -> Result<Self, ConversionError> {
        date.expect_calendar(Calendar::Gregorian)?;
        Ok(Self::from_calendar(date.year(), date.month(), date.day()))
    }

    /// Civil (year, month, day) of this JDN, the exact inverse of
    /// [`JulianDay::from_calendar`].
    pub fn to_calendar(self) -> (i32, u8, u8) {
        let jdn = self.0;
        let b = if jdn >= GREGORIAN_CUTOVER_JDN {
            let a = ((jdn as f64 - CENTURY_ORIGIN) / GREGORIAN_CENTURY) as i64;
            1 + a - a / 4
        } else {
            0
        };

        let bb = jdn + b + JDN_DAY_OFFSET;
        let cc = ((bb as f64 - MARCH_BIAS) / JULIAN_YEAR) as i64;
        let dd = (JULIAN_YEAR * cc as f64) as i64;
        let ee = ((bb - dd) as f64 / MONTH_FACTOR) as i64;

        let day = bb - dd - (MONTH_FACTOR * ee as f64) as i64;
        let (month, cc) = if ee > 13 { (ee - 13, cc + 1) } else { (ee - 1, cc) };
        let year = cc - JULIAN_PERIOD_YEARS;

        (year as i32, month as u8, day as u8)
    }

    /// Civil date of this JDN as an (unchecked) Gregorian-tagged date
    pub fn to_date(self) -> CalendarDate {
        let (year, month, day) = self.to_calendar();
        CalendarDate::new_unchecked(Calendar::Gregorian, year, month, day)
    }

    /// Weekday of this JDN, `(jdn + 1) mod 7` with 0 = Sunday
    pub const fn weekday(self) -> Weekday {
        Weekday::from_index(self.0 + 1)
    }

    /// True for 0001-01-01 through 9999-12-31, the days the civil mapping
    /// is defined on
    pub const fn is_supported(self) -> bool {
        self.0 >= MIN_JDN && self.0 <= MAX_JDN
    }

    /// This day shifted by a signed number of days, saturating at the ends
    /// of `i64`. No range check; see [`JulianDay::checked_offset`].
    #[must_use]
    pub const fn offset(self, days: i64) -> Self {
        Self(self.0.saturating_add(days))
    }

    /// This day shifted by `days`, or `None` if the result leaves the
    /// supported range
    pub const fn checked_offset(self, days: i64) -> Option<Self> {
        match self.0.checked_add(days) {
            Some(jdn) if Self(jdn).is_supported() => Some(Self(jdn)),
            _ => None,
        }
    }
}

/// `chrono` counts proleptic Gregorian days, so dates before the reform land
/// on the same physical day in Julian reckoning (chrono's 1582-10-14 is
/// 1582-10-04 here).
#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for JulianDay {
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        Self(i64::from(date.num_days_from_ce()) + CHRONO_CE_EPOCH)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<JulianDay> for chrono::NaiveDate {
    type Error = ConversionError;

    fn try_from(jdn: JulianDay) -> Result<Self, Self::Error> {
        i32::try_from(jdn.0 - CHRONO_CE_EPOCH)
            .ok()
            .and_then(Self::from_num_days_from_ce_opt)
            .ok_or_else(|| {
                let date = jdn.to_date();
                ConversionError::InvalidDate {
                    calendar: Calendar::Gregorian,
                    year: date.year(),
                    month: date.month(),
                    day: date.day(),
                }
            })
    }
}

/// The `b` term: zero on the Julian calendar, the century correction on the
/// Gregorian one, switching inside October 1582.
const fn reform_correction(y: i64, m: i64, day: u8) -> i64 {
    let reform = REFORM_YEAR as i64;
    if y == reform {
        if m > OCTOBER as i64 || (m == OCTOBER as i64 && day > LAST_JULIAN_DAY) {
            -10
        } else {
            0
        }
    } else if y < reform {
        0
    } else {
        let a = y / 100;
        2 - a + a / 4
    }
}
