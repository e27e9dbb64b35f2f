use crate::domain::Birthday;
use crate::report::ReportFormat;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayDto {
    pub name: String,
    pub date: String,
    pub this_year: NaiveDate,
    pub age: Option<u32>,
}

impl BirthdayDto {
    pub fn from_entry(entry: &Birthday, format: &ReportFormat) -> Self {
        Self {
            name: entry.name.clone(),
            date: entry.birthday.format(&format.date_pattern).to_string(),
            this_year: entry.this_year,
            age: entry.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BirthdayDto;
    use crate::domain::Birthday;
    use crate::report::ReportFormat;
    use chrono::NaiveDate;

    #[test]
    fn dto_serializes_dates_as_iso_strings() {
        let entry = Birthday {
            name: "Alice".to_string(),
            birthday: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
            this_year: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            age: Some(34),
        };
        let dto = BirthdayDto::from_entry(&entry, &ReportFormat::default());
        let value = serde_json::to_value(&dto).expect("serialize");
        assert_eq!(value["date"], "15.06.");
        assert_eq!(value["this_year"], "2024-06-15");
        assert_eq!(value["age"], 34);

        let back: BirthdayDto = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, dto);
    }
}
