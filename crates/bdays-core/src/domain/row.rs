use crate::domain::Birthday;
use chrono::NaiveDate;

/// Birthday cell as read from the source, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawBirthday {
    Date(NaiveDate),
    Text(String),
}

/// One source row. Missing cells are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub name: Option<String>,
    pub birthday: Option<RawBirthday>,
}

impl RawRow {
    pub fn new(name: impl Into<String>, birthday: RawBirthday) -> Self {
        Self {
            name: Some(name.into()),
            birthday: Some(birthday),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.birthday.is_some()
    }
}

impl From<&Birthday> for RawRow {
    fn from(entry: &Birthday) -> Self {
        Self::new(entry.name.clone(), RawBirthday::Date(entry.birthday))
    }
}
