use crate::commands::print_json;
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use bdays_config::AppConfig;
use bdays_core::dto::BirthdayDto;
use bdays_core::rules::{normalize, select_in_window, BirthdayWindow};
use bdays_core::time::{local_today, parse_date};
use bdays_core::{format_line, Birthday, ReportFormat};
use bdays_sheet::paths::resolve_input_path;
use bdays_sheet::{load_sheet, Columns};
use chrono::NaiveDate;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Spreadsheet to read instead of the configured one
    #[arg(long, short, value_name = "PATH")]
    pub input: Option<PathBuf>,
    /// Report as of this date instead of today
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<String>,
    #[arg(long)]
    pub json: bool,
}

pub fn report(config: &AppConfig, args: ReportArgs) -> Result<()> {
    let today = resolve_today(args.today.as_deref())?;
    let input = resolve_input_path(args.input, config.input.clone())
        .with_context(|| "resolve input path")?;
    debug!(path = %input.display(), %today, "input resolved");

    let columns = Columns::new(&config.name_column, &config.birthday_column);
    let rows = load_sheet(&input, &columns)
        .with_context(|| format!("load spreadsheet {}", input.display()))?;
    let entries = normalize(&rows, today, &config.date_format)?;
    debug!(
        rows = rows.len(),
        kept = entries.len(),
        "birthdays normalized"
    );

    let window = BirthdayWindow::current(today, config.window_days)?;
    let selected = select_in_window(&entries, &window);
    debug!(
        start = %window.start,
        end = %window.end,
        selected = selected.len(),
        "window applied"
    );

    let format = ReportFormat {
        date_pattern: config.date_format.clone(),
        template: config.output_format.clone(),
    };
    if args.json {
        let dtos: Vec<BirthdayDto> = selected
            .iter()
            .map(|entry| BirthdayDto::from_entry(entry, &format))
            .collect();
        print_json(&dtos)
    } else {
        print_lines(&selected, &format)
    }
}

fn resolve_today(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(value) => parse_date(value).map_err(|err| invalid_input(err.to_string())),
        None => Ok(local_today()),
    }
}

fn print_lines(entries: &[&Birthday], format: &ReportFormat) -> Result<()> {
    let mut stdout = io::stdout().lock();
    for entry in entries {
        writeln!(stdout, "{}", format_line(entry, format))?;
    }
    Ok(())
}
