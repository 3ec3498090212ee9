use crate::backend::HijriBackend;
use crate::consts::{
    HIJRI_CYCLE_DAYS, HIJRI_CYCLE_YEARS, KUWAITI_DAY_FACTOR, KUWAITI_EPOCH_JDN,
    KUWAITI_MONTH_BIAS, KUWAITI_MONTH_LENGTH, KUWAITI_SHIFT, MAX_MONTH,
};
use crate::julian::JulianDay;
use crate::types::{Calendar, CalendarDate, ConversionResult};
use crate::ConversionError;
use serde::{Deserialize, Serialize};

/// How far the inverse searches around its estimate for the first of a month
const SEARCH_RADIUS: i64 = 3;

/// Tabular Hijri calendar after the Kuwaiti algorithm, computed from the
/// Julian Day Number with no lookup table.
///
/// Results follow a fixed 30 year / 10631 day cycle and can differ from
/// moon-sighting calendars by a day or two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KuwaitiCalendar;

impl KuwaitiCalendar {
    /// Identifier used in errors and logs
    pub const NAME: &'static str = "kuwaiti";

    /// Converts a Gregorian date, shifted by `adjustment` days, to Hijri.
    ///
    /// The weekday is that of the shifted day, so converting with
    /// `adjustment = 1` equals converting the next calendar day.
    ///
    /// # Errors
    /// Returns `ConversionError::CalendarMismatch` if `date` is not Gregorian,
    /// or `ConversionError::OutOfRange` if the shifted day leaves CE 1..=9999.
    pub fn convert(
        &self,
        date: &CalendarDate,
        adjustment: i64,
    ) -> Result<ConversionResult, ConversionError> {
        let jdn = JulianDay::from_date(date)?
            .checked_offset(adjustment)
            .ok_or(ConversionError::OutOfRange {
                backend: Self::NAME,
                date: *date,
            })?;
        let result = Self::from_julian_day(jdn);
        log::debug!("{date} {adjustment:+} days -> {} (JDN {jdn})", result.date());
        Ok(result)
    }

    /// Hijri date and weekday of a JDN.
    pub fn from_julian_day(jdn: JulianDay) -> ConversionResult {
        let (year, month, day) = hijri_components(jdn.get());
        ConversionResult::new(
            CalendarDate::new_unchecked(Calendar::Hijri, year, month, day),
            Some(jdn.weekday()),
        )
    }

    /// JDN of a Hijri date under this reckoning.
    ///
    /// Lenient on day numbers: the day is counted from the first of the
    /// month, so day 30 of a 29 day month is the first of the next.
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRange` if the month cannot be located
    /// (years before 1 AH).
    pub fn to_julian_day(date: &CalendarDate) -> Result<JulianDay, ConversionError> {
        date.expect_calendar(Calendar::Hijri)?;
        let (year, month, day) = date.to_tuple();

        let estimate = KUWAITI_EPOCH_JDN
            + (f64::from(year) * year_length() + KUWAITI_SHIFT) as i64
            + (KUWAITI_DAY_FACTOR * f64::from(month) - 29.0) as i64
            + 1;

        let first = (-SEARCH_RADIUS..=SEARCH_RADIUS)
            .map(|delta| estimate + delta)
            .find(|&jdn| hijri_components(jdn) == (year, month, 1))
            .ok_or(ConversionError::OutOfRange {
                backend: Self::NAME,
                date: *date,
            })?;

        Ok(JulianDay::new(first + i64::from(day) - 1))
    }

    /// Today's Hijri date in local time, shifted by `adjustment` days.
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRange` if the shifted day leaves
    /// CE 1..=9999.
    #[cfg(feature = "chrono")]
    pub fn today(&self, adjustment: i64) -> Result<ConversionResult, ConversionError> {
        let today = JulianDay::from(chrono::Local::now().date_naive());
        today
            .checked_offset(adjustment)
            .map(Self::from_julian_day)
            .ok_or_else(|| ConversionError::OutOfRange {
                backend: Self::NAME,
                date: today.to_date(),
            })
    }
}

impl HijriBackend for KuwaitiCalendar {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn to_hijri(&self, date: &CalendarDate) -> Result<ConversionResult, ConversionError> {
        self.convert(date, 0)
    }

    fn to_gregorian(&self, date: &CalendarDate) -> Result<ConversionResult, ConversionError> {
        let jdn = Self::to_julian_day(date)?;
        if !jdn.is_supported() {
            return Err(ConversionError::OutOfRange {
                backend: Self::NAME,
                date: *date,
            });
        }
        let gregorian = jdn.to_date();
        log::debug!("{date} AH -> {gregorian} (JDN {jdn})");
        Ok(ConversionResult::new(gregorian, Some(jdn.weekday())))
    }
}

/// Mean tabular year, 10631/30 days
fn year_length() -> f64 {
    HIJRI_CYCLE_DAYS as f64 / HIJRI_CYCLE_YEARS as f64
}

/// The bare arithmetic. Month 0 shows up on the first day of a tabular year
/// and day 0 on some month starts.
fn tabular(jdn: i64) -> (i64, i64, i64) {
    let mut z = jdn - KUWAITI_EPOCH_JDN;
    let cycles = z.div_euclid(HIJRI_CYCLE_DAYS);
    z -= HIJRI_CYCLE_DAYS * cycles;

    let j = ((z as f64 - KUWAITI_SHIFT) / year_length()).floor();
    let year = HIJRI_CYCLE_YEARS * cycles + j as i64;

    let z = z as f64 - (j * year_length() + KUWAITI_SHIFT);
    let mut month = ((z + KUWAITI_MONTH_BIAS) / KUWAITI_MONTH_LENGTH) as i64;
    if month == 13 {
        month = i64::from(MAX_MONTH);
    }
    let day = (z - (KUWAITI_DAY_FACTOR * month as f64 - 29.0).trunc()) as i64;

    (year, month, day)
}

/// Tabular date with month 0 / day 0 reported as the day after the
/// previous JDN's date.
fn hijri_components(jdn: i64) -> (i32, u8, u8) {
    let (year, month, day) = match tabular(jdn) {
        (_, 0, _) | (_, _, 0) => {
            let (year, month, day) = tabular(jdn - 1);
            (year, month, day + 1)
        }
        ymd => ymd,
    };
    (year as i32, month as u8, day as u8)
}
