use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("cannot read {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("not a spreadsheet {path}: {message}")]
    Format { path: PathBuf, message: String },
    #[error("missing column {0:?}")]
    MissingColumn(String),
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, SheetError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetErrorKind {
    FileAccess,
    Format,
    MissingColumn,
    MissingHomeDir,
    InvalidDataPath,
}

impl SheetError {
    pub fn kind(&self) -> SheetErrorKind {
        match self {
            SheetError::FileAccess { .. } => SheetErrorKind::FileAccess,
            SheetError::Format { .. } => SheetErrorKind::Format,
            SheetError::MissingColumn(_) => SheetErrorKind::MissingColumn,
            SheetError::MissingHomeDir => SheetErrorKind::MissingHomeDir,
            SheetError::InvalidDataPath(_) => SheetErrorKind::InvalidDataPath,
        }
    }
}
