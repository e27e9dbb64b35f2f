use crate::error::{Result, SheetError};
use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "bdays";
const INPUT_FILENAME: &str = "birthdays.xlsx";

pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os("XDG_DATA_HOME") {
        let path = PathBuf::from(dir);
        if path.as_os_str().is_empty() {
            return Err(SheetError::InvalidDataPath(path));
        }
        return Ok(path.join(APP_DIR));
    }

    let home = dirs::home_dir().ok_or(SheetError::MissingHomeDir)?;
    Ok(home.join(".local").join("share").join(APP_DIR))
}

pub fn default_input_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(INPUT_FILENAME))
}

/// Picks the spreadsheet to read: explicit path, then configured path, then
/// the file in the data directory.
pub fn resolve_input_path(
    explicit: Option<PathBuf>,
    configured: Option<PathBuf>,
) -> Result<PathBuf> {
    match explicit.or(configured) {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(SheetError::InvalidDataPath(path));
            }
            Ok(path)
        }
        None => default_input_path(),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_input_path;
    use std::path::PathBuf;

    #[test]
    fn explicit_path_wins() {
        let path = resolve_input_path(
            Some(PathBuf::from("cli.xlsx")),
            Some(PathBuf::from("config.xlsx")),
        )
        .expect("path");
        assert_eq!(path, PathBuf::from("cli.xlsx"));
    }

    #[test]
    fn configured_path_is_fallback() {
        let path = resolve_input_path(None, Some(PathBuf::from("config.xlsx"))).expect("path");
        assert_eq!(path, PathBuf::from("config.xlsx"));
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(resolve_input_path(Some(PathBuf::new()), None).is_err());
    }
}
