use crate::domain::Birthday;
use crate::rules::dates::DEFAULT_DATE_PATTERN;

pub const DEFAULT_OUTPUT_TEMPLATE: &str = "{date}\t{name}";

/// How a selected birthday is rendered as one output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFormat {
    /// chrono pattern applied to the normalized birthday.
    pub date_pattern: String,
    /// Line template with `{date}` and `{name}` placeholders.
    pub template: String,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self {
            date_pattern: DEFAULT_DATE_PATTERN.to_string(),
            template: DEFAULT_OUTPUT_TEMPLATE.to_string(),
        }
    }
}

pub fn format_line(entry: &Birthday, format: &ReportFormat) -> String {
    let date = entry.birthday.format(&format.date_pattern).to_string();
    let name = match entry.age {
        Some(age) => format!("{} ({})", entry.name, age),
        None => entry.name.clone(),
    };
    format
        .template
        .replace("{date}", &date)
        .replace("{name}", &name)
}
