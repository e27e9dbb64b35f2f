use crate::domain::Birthday;
use crate::error::CoreError;
use chrono::{Datelike, Duration, NaiveDate};

pub const DEFAULT_WINDOW_DAYS: i64 = 14;
pub const MAX_WINDOW_DAYS: i64 = 366;

/// Inclusive date range starting on the Monday of the current week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl BirthdayWindow {
    pub fn current(today: NaiveDate, days: i64) -> Result<Self, CoreError> {
        let days = validate_window_days(days)?;
        let offset = i64::from(today.weekday().num_days_from_monday());
        let start = today - Duration::days(offset);
        let end = start + Duration::days(days - 1);
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

pub fn validate_window_days(days: i64) -> Result<i64, CoreError> {
    if (1..=MAX_WINDOW_DAYS).contains(&days) {
        Ok(days)
    } else {
        Err(CoreError::InvalidWindowDays(days))
    }
}

pub fn select_in_window<'a>(entries: &'a [Birthday], window: &BirthdayWindow) -> Vec<&'a Birthday> {
    entries
        .iter()
        .filter(|entry| window.contains(entry.this_year))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{select_in_window, validate_window_days, BirthdayWindow, DEFAULT_WINDOW_DAYS};
    use crate::domain::Birthday;
    use crate::error::CoreError;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(name: &str, this_year: NaiveDate) -> Birthday {
        Birthday {
            name: name.to_string(),
            birthday: this_year,
            this_year,
            age: None,
        }
    }

    #[test]
    fn window_starts_on_monday() {
        let window = BirthdayWindow::current(date(2024, 6, 10), DEFAULT_WINDOW_DAYS).unwrap();
        assert_eq!(window.start, date(2024, 6, 10));
        assert_eq!(window.end, date(2024, 6, 23));

        let sunday = BirthdayWindow::current(date(2024, 6, 16), DEFAULT_WINDOW_DAYS).unwrap();
        assert_eq!(sunday, window);

        let wednesday = BirthdayWindow::current(date(2024, 6, 12), DEFAULT_WINDOW_DAYS).unwrap();
        assert_eq!(wednesday, window);
    }

    #[test]
    fn window_crosses_month_boundary() {
        let window = BirthdayWindow::current(date(2024, 2, 29), DEFAULT_WINDOW_DAYS).unwrap();
        assert_eq!(window.start, date(2024, 2, 26));
        assert_eq!(window.end, date(2024, 3, 10));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let window = BirthdayWindow::current(date(2024, 6, 12), DEFAULT_WINDOW_DAYS).unwrap();
        assert!(window.contains(date(2024, 6, 10)));
        assert!(window.contains(date(2024, 6, 23)));
        assert!(!window.contains(date(2024, 6, 9)));
        assert!(!window.contains(date(2024, 6, 24)));
    }

    #[test]
    fn selection_keeps_source_order() {
        let window = BirthdayWindow::current(date(2024, 6, 10), DEFAULT_WINDOW_DAYS).unwrap();
        let entries = vec![
            entry("Late", date(2024, 6, 22)),
            entry("Outside", date(2024, 7, 1)),
            entry("Early", date(2024, 6, 11)),
        ];
        let names: Vec<&str> = select_in_window(&entries, &window)
            .into_iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(names, vec!["Late", "Early"]);
    }

    #[test]
    fn window_days_are_validated() {
        assert_eq!(validate_window_days(7), Ok(7));
        assert_eq!(validate_window_days(0), Err(CoreError::InvalidWindowDays(0)));
        assert_eq!(
            validate_window_days(400),
            Err(CoreError::InvalidWindowDays(400))
        );
    }
}
