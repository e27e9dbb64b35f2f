use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid birthday for {name}: {value:?} does not match {pattern:?}")]
    DateParse {
        name: String,
        value: String,
        pattern: String,
    },
    #[error("invalid window days: {0}")]
    InvalidWindowDays(i64),
    #[error("invalid date")]
    InvalidDate,
}
