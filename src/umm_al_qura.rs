use crate::backend::HijriBackend;
use crate::julian::JulianDay;
use crate::types::{Calendar, CalendarDate, ConversionResult};
use crate::ConversionError;
use hijri_date::HijriDate;
use serde::{Deserialize, Serialize};

type Triple = (usize, usize, usize);

/// Hijri calendar as published by Umm al-Qura, backed by the `hijri_date`
/// crate's lookup table.
///
/// The table covers AH 1357..=1499 (CE 1938..=2076). Every answer is
/// converted back before it is returned, so a day the table does not have
/// fails with [`ConversionError::Backend`] instead of rolling over into the
/// next month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UmmAlQuraCalendar;

impl UmmAlQuraCalendar {
    /// Identifier used in errors and logs
    pub const NAME: &'static str = "umm_al_qura";

    fn rejected(date: &CalendarDate, reason: impl ToString) -> ConversionError {
        let reason = reason.to_string();
        log::error!("{} backend rejected {date}: {reason}", Self::NAME);
        ConversionError::Backend {
            backend: Self::NAME,
            date: *date,
            reason,
        }
    }

    /// Table lookups take unsigned components
    fn components(date: &CalendarDate) -> Result<Triple, ConversionError> {
        let year = usize::try_from(date.year()).map_err(|_| ConversionError::OutOfRange {
            backend: Self::NAME,
            date: *date,
        })?;
        Ok((year, usize::from(date.month()), usize::from(date.day())))
    }

    fn narrow(date: &CalendarDate, (y, m, d): Triple) -> Result<(i32, u8, u8), ConversionError> {
        match (i32::try_from(y), u8::try_from(m), u8::try_from(d)) {
            (Ok(y), Ok(m), Ok(d)) => Ok((y, m, d)),
            _ => Err(Self::rejected(date, format!("unexpected result {y}-{m}-{d}"))),
        }
    }

    fn hijri_of(date: &CalendarDate, (y, m, d): Triple) -> Result<Triple, ConversionError> {
        let hijri = HijriDate::from_gr(y, m, d).map_err(|e| Self::rejected(date, e))?;
        Ok((hijri.year(), hijri.month(), hijri.day()))
    }

    fn gregorian_of(date: &CalendarDate, (y, m, d): Triple) -> Result<Triple, ConversionError> {
        let hijri = HijriDate::from_hijri(y, m, d).map_err(|e| Self::rejected(date, e))?;
        Ok((hijri.year_gr(), hijri.month_gr(), hijri.day_gr()))
    }
}

impl HijriBackend for UmmAlQuraCalendar {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn to_hijri(&self, date: &CalendarDate) -> Result<ConversionResult, ConversionError> {
        date.expect_calendar(Calendar::Gregorian)?;
        let weekday = JulianDay::from_date(date)?.weekday();

        let gregorian = Self::components(date)?;
        let converted = Self::hijri_of(date, gregorian)?;
        // Days at the table's edges map to Hijri dates it cannot convert back
        if Self::gregorian_of(date, converted)? != gregorian {
            return Err(Self::rejected(date, "table does not convert back"));
        }
        let (y, m, d) = Self::narrow(date, converted)?;

        let hijri = CalendarDate::new_unchecked(Calendar::Hijri, y, m, d);
        log::debug!("{date} -> {hijri} AH");
        Ok(ConversionResult::new(hijri, Some(weekday)))
    }

    fn to_gregorian(&self, date: &CalendarDate) -> Result<ConversionResult, ConversionError> {
        date.expect_calendar(Calendar::Hijri)?;

        let hijri = Self::components(date)?;
        let converted = Self::gregorian_of(date, hijri)?;
        // The table rolls a missing day 30 into the next month
        if Self::hijri_of(date, converted)? != hijri {
            return Err(Self::rejected(
                date,
                format!("month {} of {} has no day {}", date.month(), date.year(), date.day()),
            ));
        }
        let (y, m, d) = Self::narrow(date, converted)?;

        let gregorian = CalendarDate::new_unchecked(Calendar::Gregorian, y, m, d);
        let weekday = JulianDay::from_calendar(y, m, d).weekday();
        log::debug!("{date} AH -> {gregorian}");
        Ok(ConversionResult::new(gregorian, Some(weekday)))
    }
}
