use crate::error::{Result, SheetError};
use bdays_core::domain::{RawBirthday, RawRow};
use calamine::{open_workbook_auto, Data, Range, Reader};
use chrono::NaiveDate;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Header names of the two required columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    pub name: String,
    pub birthday: String,
}

impl Columns {
    pub fn new(name: impl Into<String>, birthday: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birthday: birthday.into(),
        }
    }
}

/// Reads the first worksheet of the spreadsheet at `path`.
pub fn load_sheet(path: &Path, columns: &Columns) -> Result<Vec<RawRow>> {
    ensure_readable(path)?;

    let mut workbook = open_workbook_auto(path).map_err(|err| match err {
        calamine::Error::Io(source) => SheetError::FileAccess {
            path: path.to_path_buf(),
            source,
        },
        other => SheetError::Format {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    })?;

    let sheet_name = workbook.sheet_names().first().cloned();
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SheetError::Format {
            path: path.to_path_buf(),
            message: "no worksheet found".to_string(),
        })?
        .map_err(|err| SheetError::Format {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

    debug!(
        path = %path.display(),
        sheet = sheet_name.as_deref().unwrap_or("-"),
        "worksheet opened"
    );
    rows_from_range(&range, columns)
}

/// Converts a worksheet whose first row holds the column headers.
pub fn rows_from_range(range: &Range<Data>, columns: &Columns) -> Result<Vec<RawRow>> {
    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| SheetError::MissingColumn(columns.name.clone()))?;
    let name_idx = column_index(header, &columns.name)?;
    let birthday_idx = column_index(header, &columns.birthday)?;

    let mut out = Vec::new();
    let mut incomplete = 0usize;
    for row in rows {
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }
        let raw = RawRow {
            name: row.get(name_idx).and_then(cell_text),
            birthday: row.get(birthday_idx).and_then(cell_birthday),
        };
        if !raw.is_complete() {
            incomplete += 1;
        }
        out.push(raw);
    }

    debug!(rows = out.len(), incomplete, "worksheet rows read");
    Ok(out)
}

fn column_index(header: &[Data], wanted: &str) -> Result<usize> {
    header
        .iter()
        .position(|cell| matches!(cell_text(cell), Some(text) if text == wanted))
        .ok_or_else(|| SheetError::MissingColumn(wanted.to_string()))
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(value) if value.is_empty() => None,
        Data::String(value) => Some(value.clone()),
        other => Some(other.to_string()),
    }
}

fn cell_birthday(cell: &Data) -> Option<RawBirthday> {
    match cell {
        Data::DateTime(value) => match value.as_datetime() {
            Some(datetime) => Some(RawBirthday::Date(datetime.date())),
            None => Some(RawBirthday::Text(cell.to_string())),
        },
        Data::DateTimeIso(value) => Some(match parse_iso_date(value) {
            Some(date) => RawBirthday::Date(date),
            None => RawBirthday::Text(value.clone()),
        }),
        other => cell_text(other).map(RawBirthday::Text),
    }
}

fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn ensure_readable(path: &Path) -> Result<()> {
    let access_error = |source: std::io::Error| SheetError::FileAccess {
        path: path.to_path_buf(),
        source,
    };
    let metadata = std::fs::metadata(path).map_err(access_error)?;
    if !metadata.is_file() {
        return Err(access_error(std::io::Error::other("not a regular file")));
    }
    File::open(path).map_err(access_error)?;
    Ok(())
}
