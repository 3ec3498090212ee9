//! Gregorian <-> Hijri date conversion.
//!
//! Two interchangeable backends sit behind [`HijriBackend`]:
//!
//! - [`KuwaitiCalendar`], a closed-form tabular reckoning computed from the
//!   Julian Day Number, defined for every CE date;
//! - [`UmmAlQuraCalendar`], the published Umm al-Qura table (AH 1357..=1499).
//!
//! Everything is a pure function of its inputs. Dates are validated before
//! any arithmetic; localization of month and weekday names is left to the
//! caller.
//!
//! ```
//! use hijri_convert::{convert_gregorian_to_hijri, Weekday};
//!
//! let result = convert_gregorian_to_hijri(2024, 1, 1, 0).unwrap();
//! assert_eq!((result.year(), result.month(), result.day()), (1445, 6, 19));
//! assert_eq!(result.weekday(), Some(Weekday::Monday));
//! ```

mod backend;
mod consts;
mod julian;
mod kuwaiti;
mod prelude;
mod types;
mod umm_al_qura;
pub mod validate;

pub use backend::{Backend, ConversionDirection, Converter, HijriBackend};
pub use consts::*;
pub use julian::JulianDay;
pub use kuwaiti::KuwaitiCalendar;
pub use types::{Calendar, CalendarDate, ConversionResult, Weekday, days_in_month, is_leap_year};
pub use umm_al_qura::UmmAlQuraCalendar;

/// Error type for date conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The components do not form a real date; re-prompt the user.
    #[error("Invalid {calendar} date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        calendar: Calendar,
        year: i32,
        month: u8,
        day: u8,
    },

    /// A date of one calendar was handed to an operation expecting the other.
    #[error("Expected a {expected} date, found a {found} date")]
    CalendarMismatch { expected: Calendar, found: Calendar },

    /// The date, or its conversion, falls outside what the backend covers.
    #[error("{date} is outside the range supported by the {backend} backend")]
    OutOfRange {
        backend: &'static str,
        date: CalendarDate,
    },

    /// The backend refused the date.
    #[error("The {backend} backend rejected {date}: {reason}")]
    Backend {
        backend: &'static str,
        date: CalendarDate,
        reason: String,
    },
}

/// Gregorian -> Hijri with the Kuwaiti algorithm, after shifting the date by
/// `day_offset` days. The weekday is that of the shifted day.
///
/// # Errors
/// Returns `ConversionError::InvalidDate` if the Gregorian date is invalid.
pub fn convert_gregorian_to_hijri(
    year: i32,
    month: u8,
    day: u8,
    day_offset: i64,
) -> Result<ConversionResult, ConversionError> {
    Converter::default()
        .with_day_offset(day_offset)
        .gregorian_to_hijri(year, month, day)
}

/// Hijri -> Gregorian with the Kuwaiti algorithm.
///
/// # Errors
/// Returns `ConversionError::InvalidDate` if month/day fall outside
/// `1..=12` / `1..=30`.
pub fn convert_hijri_to_gregorian(
    year: i32,
    month: u8,
    day: u8,
) -> Result<ConversionResult, ConversionError> {
    Converter::default().hijri_to_gregorian(year, month, day)
}

/// Julian Day Number of a civil date (Julian calendar before 1582-10-15).
pub fn julian_day_number(year: i32, month: u8, day: u8) -> i64 {
    JulianDay::from_calendar(year, month, day).get()
}

/// Civil (year, month, day) of a Julian Day Number.
pub fn from_julian_day_number(jdn: i64) -> (i32, u8, u8) {
    JulianDay::new(jdn).to_calendar()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_kuwaiti_value() {
        let result = convert_gregorian_to_hijri(2024, 1, 1, 0).unwrap();
        assert_eq!(result.date().calendar(), Calendar::Hijri);
        assert_eq!((result.day(), result.month(), result.year()), (19, 6, 1445));
        assert_eq!(result.weekday_index(), Some(1));
    }

    #[test]
    fn test_offset_consistency() {
        let cases = [(2024, 1, 1), (2023, 12, 31), (2024, 2, 28), (2000, 2, 29)];
        for (y, m, d) in cases {
            let next = from_julian_day_number(julian_day_number(y, m, d) + 1);
            assert_eq!(
                convert_gregorian_to_hijri(y, m, d, 1).unwrap(),
                convert_gregorian_to_hijri(next.0, next.1, next.2, 0).unwrap(),
                "{y}-{m}-{d}"
            );
        }
    }

    #[test]
    fn test_negative_offset() {
        assert_eq!(
            convert_gregorian_to_hijri(2024, 1, 1, -1).unwrap(),
            convert_gregorian_to_hijri(2023, 12, 31, 0).unwrap()
        );
    }

    #[test]
    fn test_huge_offsets_are_out_of_range() {
        for offset in [i64::MAX, i64::MIN, 1_568_704_592_609] {
            assert!(
                matches!(
                    convert_gregorian_to_hijri(2024, 1, 1, offset),
                    Err(ConversionError::OutOfRange { .. })
                ),
                "offset {offset}"
            );
        }
    }

    #[test]
    fn test_weekday_fixed_point() {
        let result = convert_gregorian_to_hijri(2000, 1, 1, 0).unwrap();
        assert_eq!(result.weekday(), Some(Weekday::Saturday));
        assert_eq!(result.weekday_index(), Some(6));
        assert_eq!(result.weekday().unwrap().transliteration(), "Sabt");
    }

    #[test]
    fn test_weekday_cycle() {
        let mut previous = convert_gregorian_to_hijri(2024, 1, 1, 0)
            .unwrap()
            .weekday_index()
            .unwrap();
        for offset in 1..=400 {
            let index = convert_gregorian_to_hijri(2024, 1, 1, offset)
                .unwrap()
                .weekday_index()
                .unwrap();
            assert_eq!(index, (previous + 1) % 7);
            previous = index;
        }
    }

    #[test]
    fn test_invalid_input_rejection() {
        assert!(matches!(
            convert_hijri_to_gregorian(1445, 13, 1),
            Err(ConversionError::InvalidDate {
                calendar: Calendar::Hijri,
                ..
            })
        ));
        assert!(matches!(
            convert_hijri_to_gregorian(1445, 1, 31),
            Err(ConversionError::InvalidDate { .. })
        ));
        assert!(matches!(
            convert_gregorian_to_hijri(2023, 2, 29, 0),
            Err(ConversionError::InvalidDate {
                calendar: Calendar::Gregorian,
                ..
            })
        ));
    }

    #[test]
    fn test_hijri_to_gregorian() {
        let result = convert_hijri_to_gregorian(1445, 6, 19).unwrap();
        assert_eq!(result.date(), CalendarDate::gregorian(2024, 1, 1).unwrap());
        assert_eq!(result.weekday(), Some(Weekday::Monday));
    }

    #[test]
    fn test_julian_day_number_entry_points() {
        assert_eq!(julian_day_number(2000, 1, 1), 2_451_545);
        assert_eq!(from_julian_day_number(2_451_545), (2000, 1, 1));
        assert_eq!(julian_day_number(1582, 10, 4) + 1, julian_day_number(1582, 10, 15));
    }

    #[test]
    fn test_error_display() {
        let err = convert_hijri_to_gregorian(1445, 13, 1).unwrap_err();
        assert_eq!(err.to_string(), "Invalid Hijri date: 1445-13-01");

        let err = Converter::default()
            .with_day_offset(1)
            .gregorian_to_hijri(9999, 12, 31)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "9999-12-31 is outside the range supported by the kuwaiti backend"
        );
    }

    #[test]
    fn test_constants() {
        assert_eq!(MAX_YEAR, 9999);
        assert_eq!(KUWAITI_EPOCH_JDN, 1_948_084);
        assert_eq!(GREGORIAN_CUTOVER_JDN, julian_day_number(1582, 10, 15));
    }
}
