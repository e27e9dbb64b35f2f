pub mod domain;
pub mod dto;
pub mod error;
pub mod report;
pub mod rules;
pub mod time;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use report::{format_line, ReportFormat, DEFAULT_OUTPUT_TEMPLATE};
pub use rules::*;
