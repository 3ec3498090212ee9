use crate::julian::JulianDay;
use crate::kuwaiti::KuwaitiCalendar;
use crate::prelude::*;
use crate::types::{CalendarDate, ConversionResult};
use crate::umm_al_qura::UmmAlQuraCalendar;
use crate::ConversionError;
use serde::{Deserialize, Serialize};

/// A Hijri calendar implementation. Dates go in as validated
/// [`CalendarDate`]s and come back as [`ConversionResult`]s, so callers do
/// not care which implementation ran.
///
/// Implementations may leave the weekday unset; callers needing one can
/// derive it from the Gregorian side with [`JulianDay::weekday`].
pub trait HijriBackend {
    /// Short identifier used in errors and logs
    fn name(&self) -> &'static str;

    /// Gregorian -> Hijri
    ///
    /// # Errors
    /// Fails if `date` is not Gregorian or the backend cannot convert it.
    fn to_hijri(&self, date: &CalendarDate) -> Result<ConversionResult, ConversionError>;

    /// Hijri -> Gregorian
    ///
    /// # Errors
    /// Fails if `date` is not Hijri or the backend cannot convert it.
    fn to_gregorian(&self, date: &CalendarDate) -> Result<ConversionResult, ConversionError>;
}

/// Selects which [`HijriBackend`] a [`Converter`] uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Closed-form tabular reckoning, defined for every CE date
    #[default]
    #[display(fmt = "kuwaiti")]
    Kuwaiti,
    /// Published Umm al-Qura table, AH 1357..=1499 (CE 1938..=2076) only
    #[display(fmt = "umm_al_qura")]
    UmmAlQura,
}

impl HijriBackend for Backend {
    fn name(&self) -> &'static str {
        match self {
            Self::Kuwaiti => KuwaitiCalendar.name(),
            Self::UmmAlQura => UmmAlQuraCalendar.name(),
        }
    }

    fn to_hijri(&self, date: &CalendarDate) -> Result<ConversionResult, ConversionError> {
        match self {
            Self::Kuwaiti => KuwaitiCalendar.to_hijri(date),
            Self::UmmAlQura => UmmAlQuraCalendar.to_hijri(date),
        }
    }

    fn to_gregorian(&self, date: &CalendarDate) -> Result<ConversionResult, ConversionError> {
        match self {
            Self::Kuwaiti => KuwaitiCalendar.to_gregorian(date),
            Self::UmmAlQura => UmmAlQuraCalendar.to_gregorian(date),
        }
    }
}

/// Which way a conversion goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionDirection {
    #[display(fmt = "to Hijri")]
    ToHijri,
    #[display(fmt = "to Gregorian")]
    ToGregorian,
}

/// Validates raw date components and hands them to the configured backend.
///
/// `day_offset` shifts Gregorian input before it is converted to Hijri, for
/// "today +/- N days" style queries. It does not apply to Hijri input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Converter {
    backend: Backend,
    day_offset: i64,
}

impl Converter {
    pub const fn new(backend: Backend) -> Self {
        Self {
            backend,
            day_offset: 0,
        }
    }

    #[must_use]
    pub const fn with_day_offset(self, day_offset: i64) -> Self {
        Self { day_offset, ..self }
    }

    pub const fn backend(&self) -> Backend {
        self.backend
    }

    pub const fn day_offset(&self) -> i64 {
        self.day_offset
    }

    /// Converts a Gregorian date, shifted by the configured offset, to Hijri.
    ///
    /// # Errors
    /// `InvalidDate` if the triple is not a real Gregorian date, `OutOfRange`
    /// if the offset leaves the supported years, or whatever the backend
    /// reports.
    pub fn gregorian_to_hijri(
        &self,
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<ConversionResult, ConversionError> {
        let date = CalendarDate::gregorian(year, month, day)?;
        let date = self.shift(date)?;
        log::debug!("{date} {} via {}", ConversionDirection::ToHijri, self.backend);
        self.backend.to_hijri(&date)
    }

    /// Converts a Hijri date to Gregorian.
    ///
    /// # Errors
    /// `InvalidDate` if month/day fall outside `1..=12` / `1..=30`, or
    /// whatever the backend reports.
    pub fn hijri_to_gregorian(
        &self,
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<ConversionResult, ConversionError> {
        let date = CalendarDate::hijri(year, month, day)?;
        log::debug!("{date} AH {} via {}", ConversionDirection::ToGregorian, self.backend);
        self.backend.to_gregorian(&date)
    }

    /// Converts raw components in the requested direction.
    ///
    /// # Errors
    /// See [`Converter::gregorian_to_hijri`] and [`Converter::hijri_to_gregorian`].
    pub fn convert(
        &self,
        direction: ConversionDirection,
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<ConversionResult, ConversionError> {
        match direction {
            ConversionDirection::ToHijri => self.gregorian_to_hijri(year, month, day),
            ConversionDirection::ToGregorian => self.hijri_to_gregorian(year, month, day),
        }
    }

    fn shift(&self, date: CalendarDate) -> Result<CalendarDate, ConversionError> {
        if self.day_offset == 0 {
            return Ok(date);
        }
        JulianDay::from_date(&date)?
            .checked_offset(self.day_offset)
            .map(JulianDay::to_date)
            .ok_or(ConversionError::OutOfRange {
                backend: self.backend.name(),
                date,
            })
    }
}
