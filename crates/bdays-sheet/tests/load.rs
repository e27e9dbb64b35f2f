use bdays_sheet::{load_sheet, Columns, SheetErrorKind};
use std::fs;
use tempfile::TempDir;

fn columns() -> Columns {
    Columns::new("Name", "Geburtstag")
}

#[test]
fn missing_file_is_file_access_error() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("missing.xlsx");

    let err = load_sheet(&path, &columns()).unwrap_err();
    assert_eq!(err.kind(), SheetErrorKind::FileAccess);
    assert!(err.to_string().contains("missing.xlsx"));
}

#[test]
fn directory_is_file_access_error() {
    let temp = TempDir::new().expect("temp dir");

    let err = load_sheet(temp.path(), &columns()).unwrap_err();
    assert_eq!(err.kind(), SheetErrorKind::FileAccess);
}

#[test]
fn plain_text_is_format_error() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("birthdays.xlsx");
    fs::write(&path, "Name,Geburtstag\nAlice,15.06.\n").expect("write");

    let err = load_sheet(&path, &columns()).unwrap_err();
    assert_eq!(err.kind(), SheetErrorKind::Format);
}

#[test]
fn unknown_extension_is_format_error() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("birthdays.txt");
    fs::write(&path, "not a workbook").expect("write");

    let err = load_sheet(&path, &columns()).unwrap_err();
    assert_eq!(err.kind(), SheetErrorKind::Format);
}
