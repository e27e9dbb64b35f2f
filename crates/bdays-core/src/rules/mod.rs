pub mod dates;
pub mod normalize;
pub mod window;

pub use dates::{anchor_to_year, is_leap_year, parse_day_month, DEFAULT_DATE_PATTERN};
pub use normalize::{normalize, normalize_row};
pub use window::{
    select_in_window, validate_window_days, BirthdayWindow, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS,
};
