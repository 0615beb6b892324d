use clap::Args;
use serde::Serialize;

use daily_carb_core::{CarbStore, DayData, StorageBackend, TargetRange, TargetStatus};

use super::day::status_marker;
use super::OutputFormat;

#[derive(Args)]
pub struct HistoryCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Show every meal under each day
    #[arg(long, short)]
    pub expand: bool,
}

/// One line of history output.
#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub date: String,
    pub total_actual: u32,
    pub target: TargetRange,
    pub target_source: &'static str,
    pub status: TargetStatus,
}

impl HistoryEntry {
    pub fn from_day(day: &DayData) -> Self {
        Self {
            date: day.date.clone(),
            total_actual: day.total_actual,
            target: day.effective_target(),
            target_source: if day.has_daily_target() {
                "Daily Target"
            } else {
                "Meal Target"
            },
            status: day.history_status(),
        }
    }
}

/// History entries for every stored day, newest first.
pub fn history_entries<B: StorageBackend>(store: &CarbStore<B>) -> Vec<(HistoryEntry, DayData)> {
    let mut data = store.get_all_data();
    store
        .get_all_dates_with_data()
        .into_iter()
        .filter_map(|date| data.remove(&date))
        .map(|day| (HistoryEntry::from_day(&day), day))
        .collect()
}

impl HistoryCommand {
    pub fn run<B: StorageBackend>(
        &self,
        store: &CarbStore<B>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let entries = history_entries(store);

        if entries.is_empty() {
            println!("No history yet. Start tracking your meals!");
            return Ok(());
        }

        match self.format {
            OutputFormat::Json => {
                let rows: Vec<&HistoryEntry> = entries.iter().map(|(entry, _)| entry).collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            }
            OutputFormat::Text => {
                for (entry, day) in &entries {
                    println!("[{}] {}", status_marker(entry.status), format_entry(entry));

                    if self.expand {
                        for meal in day.meals.iter().filter(|m| !m.is_empty()) {
                            println!("      {}", meal);
                        }
                    }
                }
                println!("\nTotal: {} day(s)", entries.len());
            }
        }

        Ok(())
    }
}

fn format_entry(entry: &HistoryEntry) -> String {
    let mut line = format!("{}  {:>5}g", entry.date, entry.total_actual);
    if entry.target.is_set() {
        line.push_str(&format!(" / {}: {}", entry.target_source, entry.target));
    }
    line
}
