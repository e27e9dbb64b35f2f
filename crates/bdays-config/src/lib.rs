use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use bdays_core::report::DEFAULT_OUTPUT_TEMPLATE;
use bdays_core::rules::{validate_window_days, DEFAULT_DATE_PATTERN, DEFAULT_WINDOW_DAYS};
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "bdays";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_NAME_COLUMN: &str = "Name";
pub const DEFAULT_BIRTHDAY_COLUMN: &str = "Geburtstag";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub input: Option<PathBuf>,
    pub name_column: String,
    pub birthday_column: String,
    pub date_format: String,
    pub output_format: String,
    pub window_days: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: None,
            name_column: DEFAULT_NAME_COLUMN.to_string(),
            birthday_column: DEFAULT_BIRTHDAY_COLUMN.to_string(),
            date_format: DEFAULT_DATE_PATTERN.to_string(),
            output_format: DEFAULT_OUTPUT_TEMPLATE.to_string(),
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid input path: {0}")]
    InvalidInputPath(PathBuf),
    #[error("invalid {field}: column name cannot be empty")]
    EmptyColumnName { field: &'static str },
    #[error("invalid date_format value: {0:?}")]
    InvalidDateFormat(String),
    #[error("invalid output_format value: {0:?} (must contain {{name}})")]
    InvalidOutputFormat(String),
    #[error("invalid window_days value: {0}")]
    InvalidWindowDays(i64),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    input: Option<PathBuf>,
    name_column: Option<String>,
    birthday_column: Option<String>,
    date_format: Option<String>,
    output_format: Option<String>,
    window_days: Option<i64>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(input) = parsed.input {
        if input.as_os_str().is_empty() {
            return Err(ConfigError::InvalidInputPath(input));
        }
        config.input = Some(input);
    }

    if let Some(column) = parsed.name_column {
        config.name_column = validate_column(column, "name_column")?;
    }
    if let Some(column) = parsed.birthday_column {
        config.birthday_column = validate_column(column, "birthday_column")?;
    }

    if let Some(pattern) = parsed.date_format {
        if !is_day_month_pattern(&pattern) {
            return Err(ConfigError::InvalidDateFormat(pattern));
        }
        config.date_format = pattern;
    }

    if let Some(template) = parsed.output_format {
        if !template.contains("{name}") {
            return Err(ConfigError::InvalidOutputFormat(template));
        }
        config.output_format = template;
    }

    if let Some(days) = parsed.window_days {
        config.window_days =
            validate_window_days(days).map_err(|_| ConfigError::InvalidWindowDays(days))?;
    }

    Ok(config)
}

fn validate_column(column: String, field: &'static str) -> Result<String> {
    if column.trim().is_empty() {
        return Err(ConfigError::EmptyColumnName { field });
    }
    Ok(column)
}

// Text birthdays are parsed with the same pattern, so it must describe a
// day and a month and nothing that carries a year.
fn is_day_month_pattern(pattern: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return false;
    }
    const YEAR_SPECIFIERS: [&str; 8] = ["%Y", "%y", "%C", "%G", "%g", "%D", "%F", "%x"];
    let has_day = pattern.contains("%d") || pattern.contains("%e");
    let has_month = pattern.contains("%m") || pattern.contains("%b") || pattern.contains("%B");
    has_day && has_month && !YEAR_SPECIFIERS.iter().any(|spec| pattern.contains(spec))
}
