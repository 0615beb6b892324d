mod calendar;
mod config_cmd;
mod day;
mod history;
mod meal;
mod target;

pub use calendar::CalendarCommand;
pub use config_cmd::ConfigCommand;
pub use day::DayCommand;
pub use history::HistoryCommand;
pub use meal::MealCommand;
pub use target::TargetCommand;

use clap::ValueEnum;
use daily_carb_core::{normalize_date, today_date, DateError};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Resolves an optional `--date` argument to a normalized key, defaulting to
/// today.
pub fn resolve_date(date: Option<&str>) -> Result<String, DateError> {
    match date {
        Some(d) => normalize_date(d),
        None => Ok(today_date()),
    }
}
