pub mod birthday;
pub mod row;

pub use birthday::Birthday;
pub use row::{RawBirthday, RawRow};
