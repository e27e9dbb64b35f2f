use crate::domain::{Birthday, RawBirthday, RawRow};
use crate::error::CoreError;
use crate::rules::dates::{anchor_to_year, parse_day_month};
use chrono::{Datelike, NaiveDate};

/// Drops incomplete rows and turns the rest into [`Birthday`] entries for the
/// year of `today`. Source order is kept. The first birthday that is neither a
/// date nor text matching `pattern` fails the whole table.
pub fn normalize(
    rows: &[RawRow],
    today: NaiveDate,
    pattern: &str,
) -> Result<Vec<Birthday>, CoreError> {
    rows.iter()
        .filter(|row| row.is_complete())
        .map(|row| normalize_row(row, today, pattern))
        .filter_map(Result::transpose)
        .collect()
}

/// Returns `Ok(None)` for a row with a missing name or birthday.
pub fn normalize_row(
    row: &RawRow,
    today: NaiveDate,
    pattern: &str,
) -> Result<Option<Birthday>, CoreError> {
    let (Some(name), Some(raw)) = (row.name.as_ref(), row.birthday.as_ref()) else {
        return Ok(None);
    };
    let year = today.year();

    let birthday = match raw {
        RawBirthday::Date(date) => *date,
        RawBirthday::Text(value) => {
            parse_day_month(value, pattern, year).ok_or_else(|| CoreError::DateParse {
                name: name.clone(),
                value: value.clone(),
                pattern: pattern.to_string(),
            })?
        }
    };
    let this_year = anchor_to_year(birthday, year).ok_or(CoreError::InvalidDate)?;

    Ok(Some(Birthday {
        name: name.clone(),
        birthday,
        this_year,
        age: age_in(year, birthday),
    }))
}

fn age_in(year: i32, birthday: NaiveDate) -> Option<u32> {
    let age = year - birthday.year();
    if age > 0 {
        u32::try_from(age).ok()
    } else {
        None
    }
}
