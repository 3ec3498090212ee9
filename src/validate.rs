use crate::consts::{
    FIRST_GREGORIAN_DAY, LAST_JULIAN_DAY, MAX_HIJRI_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
    OCTOBER, REFORM_YEAR,
};
use crate::types::days_in_month;

/// True iff `(year, month, day)` is a real date of the proleptic Gregorian
/// calendar within `MIN_YEAR..=MAX_YEAR`.
pub const fn is_valid_gregorian(year: i32, month: u8, day: u8) -> bool {
    if year < MIN_YEAR || year > MAX_YEAR {
        return false;
    }
    if month < 1 || month > MAX_MONTH {
        return false;
    }
    day >= MIN_DAY && day <= days_in_month(year, month)
}

/// True iff `1 <= month <= 12` and `1 <= day <= 30`.
pub const fn is_valid_hijri_range(month: u8, day: u8) -> bool {
    month >= 1 && month <= MAX_MONTH && day >= MIN_DAY && day <= MAX_HIJRI_DAY
}

/// True for 1582-10-05 through 1582-10-14, the days skipped by the reform.
pub const fn is_in_cutover_gap(year: i32, month: u8, day: u8) -> bool {
    year == REFORM_YEAR && month == OCTOBER && day > LAST_JULIAN_DAY && day < FIRST_GREGORIAN_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_days() {
        assert!(is_valid_gregorian(2024, 2, 29));
        assert!(!is_valid_gregorian(2023, 2, 29));
        assert!(!is_valid_gregorian(1900, 2, 29));
        assert!(is_valid_gregorian(2000, 2, 29));
    }

    #[test]
    fn test_month_lengths() {
        assert!(is_valid_gregorian(2024, 1, 31));
        assert!(!is_valid_gregorian(2024, 4, 31));
        assert!(is_valid_gregorian(2024, 4, 30));
        assert!(!is_valid_gregorian(2024, 2, 30));
    }

    #[test]
    fn test_out_of_range_components() {
        assert!(!is_valid_gregorian(2024, 0, 1));
        assert!(!is_valid_gregorian(2024, 13, 1));
        assert!(!is_valid_gregorian(2024, 1, 0));
        assert!(!is_valid_gregorian(0, 1, 1));
        assert!(!is_valid_gregorian(-44, 3, 15));
        assert!(!is_valid_gregorian(10_000, 1, 1));
        assert!(is_valid_gregorian(1, 1, 1));
        assert!(is_valid_gregorian(9999, 12, 31));
    }

    #[test]
    fn test_hijri_range() {
        assert!(is_valid_hijri_range(1, 1));
        assert!(is_valid_hijri_range(12, 30));
        assert!(!is_valid_hijri_range(13, 1));
        assert!(!is_valid_hijri_range(1, 31));
        assert!(!is_valid_hijri_range(0, 15));
        assert!(!is_valid_hijri_range(6, 0));
    }

    #[test]
    fn test_cutover_gap() {
        assert!(!is_in_cutover_gap(1582, 10, 4));
        assert!(is_in_cutover_gap(1582, 10, 5));
        assert!(is_in_cutover_gap(1582, 10, 14));
        assert!(!is_in_cutover_gap(1582, 10, 15));
        assert!(!is_in_cutover_gap(1582, 11, 10));
        assert!(!is_in_cutover_gap(1583, 10, 10));
        // The gap is a historical fact, not a proleptic one
        assert!(is_valid_gregorian(1582, 10, 10));
    }
}
