use chrono::{Datelike, NaiveDate};

pub const DEFAULT_DATE_PATTERN: &str = "%d.%m.";

/// Parses a year-less `value` such as `"05.03."` with `pattern` as a date in
/// `year`. Returns `None` unless the whole value matches and the day exists in
/// that year, so `"29.02."` is rejected outside leap years.
pub fn parse_day_month(value: &str, pattern: &str, year: i32) -> Option<NaiveDate> {
    let anchored = format!("{value}@{year}");
    let anchored_pattern = format!("{pattern}@%Y");
    NaiveDate::parse_from_str(&anchored, &anchored_pattern).ok()
}

/// Moves `date` to `year`, keeping month and day. February 29th falls back to
/// February 28th outside leap years.
pub fn anchor_to_year(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    if let Some(moved) = date.with_year(year) {
        return Some(moved);
    }

    if date.month() == 2 && date.day() == 29 && !is_leap_year(year) {
        return NaiveDate::from_ymd_opt(year, 2, 28);
    }

    None
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::{anchor_to_year, is_leap_year, parse_day_month, DEFAULT_DATE_PATTERN};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_day_month_uses_given_year() {
        let parsed = parse_day_month("05.03.", DEFAULT_DATE_PATTERN, 2024);
        assert_eq!(parsed, Some(date(2024, 3, 5)));
    }

    #[test]
    fn parse_day_month_rejects_trailing_input() {
        assert_eq!(parse_day_month("05.03.1990", DEFAULT_DATE_PATTERN, 2024), None);
        assert_eq!(parse_day_month("05.03", DEFAULT_DATE_PATTERN, 2024), None);
        assert_eq!(parse_day_month("March 5", DEFAULT_DATE_PATTERN, 2024), None);
    }

    #[test]
    fn parse_day_month_rejects_impossible_dates() {
        assert_eq!(parse_day_month("31.04.", DEFAULT_DATE_PATTERN, 2024), None);
        assert_eq!(parse_day_month("00.01.", DEFAULT_DATE_PATTERN, 2024), None);
        assert_eq!(parse_day_month("12.13.", DEFAULT_DATE_PATTERN, 2024), None);
    }

    #[test]
    fn parse_day_month_leap_day_needs_leap_year() {
        assert_eq!(
            parse_day_month("29.02.", DEFAULT_DATE_PATTERN, 2024),
            Some(date(2024, 2, 29))
        );
        assert_eq!(parse_day_month("29.02.", DEFAULT_DATE_PATTERN, 2023), None);
    }

    #[test]
    fn anchor_to_year_keeps_month_and_day() {
        assert_eq!(anchor_to_year(date(1990, 6, 15), 2024), Some(date(2024, 6, 15)));
        assert_eq!(anchor_to_year(date(1996, 2, 29), 2025), Some(date(2025, 2, 28)));
    }

    #[test]
    fn leap_year_logic() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }
}
