use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birthday {
    pub name: String,
    pub birthday: NaiveDate,
    /// Month and day of `birthday` in the processing year.
    pub this_year: NaiveDate,
    pub age: Option<u32>,
}
