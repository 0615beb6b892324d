use clap::{Args, Subcommand};
use std::io::{self, Write};

use daily_carb_core::{
    is_date_in_past, today_date, CarbStore, DayData, StorageBackend, TargetStatus,
};

use super::{resolve_date, OutputFormat};

#[derive(Args)]
pub struct DayCommand {
    #[command(subcommand)]
    pub command: DaySubcommand,
}

#[derive(Subcommand)]
pub enum DaySubcommand {
    /// Show all meals and totals for a day
    Show {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Delete all data for a day
    Delete {
        /// Date (YYYY-MM-DD)
        #[arg(long, short)]
        date: String,

        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// Copy meals from another day, replacing the target day
    Copy {
        /// Source date (YYYY-MM-DD)
        #[arg(long)]
        from: String,

        /// Target date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        to: Option<String>,
    },
}

impl DayCommand {
    pub fn run<B: StorageBackend>(
        &self,
        store: &CarbStore<B>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            DaySubcommand::Show { date, format } => {
                let date = resolve_date(date.as_deref())?;
                let day = store.get_data_for_date(&date);

                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&day)?),
                    OutputFormat::Text => print_day(&day),
                }
                Ok(())
            }

            DaySubcommand::Delete { date, force } => {
                let date = resolve_date(Some(date.as_str()))?;

                if !store.get_all_data().contains_key(&date) {
                    println!("No data recorded for {}", date);
                    return Ok(());
                }

                // Confirm unless --force
                if !force {
                    print!("Delete all data for {date}? This cannot be undone. [y/N] ");
                    io::stdout().flush()?;

                    let mut input = String::new();
                    io::stdin().read_line(&mut input)?;

                    if !input.trim().eq_ignore_ascii_case("y") {
                        println!("Deletion cancelled.");
                        return Ok(());
                    }
                }

                store.delete_data_for_date(&date);
                println!("Deleted data for {}", date);
                Ok(())
            }

            DaySubcommand::Copy { from, to } => {
                let from = resolve_date(Some(from.as_str()))?;
                let to = resolve_date(to.as_deref())?;
                copy_day(store, &from, &to)?;

                println!("Copied {} to {}", from, to);
                println!();
                print_day(&store.get_data_for_date(&to));
                Ok(())
            }
        }
    }
}

/// Copies `from` onto `to`, refusing to copy a day onto itself.
pub fn copy_day<B: StorageBackend>(
    store: &CarbStore<B>,
    from: &str,
    to: &str,
) -> Result<(), String> {
    if from == to {
        return Err(format!("Cannot copy {} onto itself", from));
    }
    store.copy_day_data(from, to);
    Ok(())
}

/// Heading for a day: "Today" for the current date, the date otherwise.
pub fn day_heading(date: &str) -> String {
    if date == today_date() {
        "Today".to_string()
    } else if is_date_in_past(date) {
        format!("{} (past)", date)
    } else {
        date.to_string()
    }
}

pub fn status_marker(status: TargetStatus) -> &'static str {
    match status {
        TargetStatus::NoData | TargetStatus::NoTarget => " ",
        TargetStatus::Under => "-",
        TargetStatus::Within => "=",
        TargetStatus::Over => "+",
    }
}

fn print_day(day: &DayData) {
    println!("{}", day_heading(&day.date));
    println!("{}", "=".repeat(60));

    for meal in &day.meals {
        let indicator = match meal.status() {
            Some(status) => format!("[{}] {:>3}%", status_marker(status), meal.progress_percent()),
            None => String::new(),
        };
        println!(
            "  {:20} {:>5}g   planned {:>4}-{:<4}g {}",
            meal.meal_type.label(),
            meal.actual,
            meal.planned_min,
            meal.planned_max,
            indicator
        );
    }

    println!("  {}", "-".repeat(56));
    println!("  {:20} {:>5}g", "Total Carbs", day.total_actual);

    if day.total_planned_max > 0 {
        println!("  Target: {}", day.planned_range());
    }
    if day.has_daily_target() {
        println!("  Daily Target: {}", day.effective_target());
    }
    if let status @ (TargetStatus::Over | TargetStatus::Under) = day.tracker_status() {
        println!("  Status: {}", status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daily_carb_core::{MealField, MealType, MemoryStorage};

    #[test]
    fn test_copy_day_refuses_same_date() {
        let store = CarbStore::new(MemoryStorage::new());
        let err = copy_day(&store, "2024-06-01", "2024-06-01").unwrap_err();
        assert!(err.contains("onto itself"));
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn test_copy_day() {
        let store = CarbStore::new(MemoryStorage::new());
        store.update_day("2024-06-01", |day| {
            day.set_meal_field(MealType::Lunch, MealField::Actual, 45);
        });

        copy_day(&store, "2024-06-01", "2024-06-02").unwrap();

        assert_eq!(store.get_data_for_date("2024-06-02").total_actual, 45);
    }

    #[test]
    fn test_day_heading() {
        assert_eq!(day_heading(&today_date()), "Today");
        assert_eq!(day_heading("2000-01-01"), "2000-01-01 (past)");
        assert_eq!(day_heading("2999-01-01"), "2999-01-01");
    }

    #[test]
    fn test_status_marker() {
        assert_eq!(status_marker(TargetStatus::Over), "+");
        assert_eq!(status_marker(TargetStatus::Within), "=");
        assert_eq!(status_marker(TargetStatus::Under), "-");
        assert_eq!(status_marker(TargetStatus::NoData), " ");
    }
}
