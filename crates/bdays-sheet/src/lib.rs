pub mod error;
pub mod loader;
pub mod paths;

pub use error::{Result, SheetError, SheetErrorKind};
pub use loader::{load_sheet, rows_from_range, Columns};
