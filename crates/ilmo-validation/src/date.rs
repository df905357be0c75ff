// File: src/date.rs
// Purpose: Birth-date parsing and age arithmetic

use chrono::{Datelike, NaiveDate};

/// Parse a birth date in the ISO `YYYY-MM-DD` form a date input submits
///
/// Returns `None` for empty or otherwise malformed input.
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Full elapsed years between `birth` and `today`
///
/// The year difference counts only birthdays that have passed: months
/// are compared first, then days, and the anniversary day itself counts
/// as passed. A Feb 29 birthday therefore counts as passed on Mar 1 of
/// a non-leap year. Negative for birth dates in the future.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - birth.year();
    let birthday_passed = (today.month(), today.day()) >= (birth.month(), birth.day());
    if birthday_passed {
        years
    } else {
        years - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parses_iso_dates() {
        assert_eq!(parse_birth_date("2005-11-06"), Some(date(2005, 11, 6)));
        assert_eq!(parse_birth_date(" 2005-11-06 "), Some(date(2005, 11, 6)));
    }

    #[test]
    fn test_rejects_empty_and_malformed_input() {
        assert_eq!(parse_birth_date(""), None);
        assert_eq!(parse_birth_date("   "), None);
        assert_eq!(parse_birth_date("06.11.2005"), None);
        assert_eq!(parse_birth_date("2005-13-01"), None);
        assert_eq!(parse_birth_date("not a date"), None);
    }

    #[test]
    fn test_age_after_birthday() {
        assert_eq!(age_on(date(2005, 11, 6), date(2025, 11, 10)), 20);
        assert_eq!(age_on(date(2015, 1, 1), date(2025, 6, 1)), 10);
    }

    #[test]
    fn test_age_counts_anniversary_day_as_passed() {
        assert_eq!(age_on(date(2012, 11, 10), date(2025, 11, 10)), 13);
    }

    #[test]
    fn test_age_before_birthday() {
        assert_eq!(age_on(date(2012, 11, 10), date(2025, 11, 9)), 12);
        assert_eq!(age_on(date(2005, 12, 24), date(2025, 11, 10)), 19);
    }

    #[test]
    fn test_leap_day_birthday_passes_on_march_first() {
        assert_eq!(age_on(date(2012, 2, 29), date(2025, 3, 1)), 13);
        assert_eq!(age_on(date(2012, 2, 29), date(2025, 2, 28)), 12);
    }

    #[test]
    fn test_future_birth_date_is_negative() {
        assert!(age_on(date(2030, 1, 1), date(2025, 6, 1)) < 0);
    }
}
