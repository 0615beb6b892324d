use clap::{Args, Subcommand};

use daily_carb_core::{CarbStore, StorageBackend};

use super::resolve_date;

#[derive(Args)]
pub struct TargetCommand {
    #[command(subcommand)]
    pub command: TargetSubcommand,
}

#[derive(Subcommand)]
pub enum TargetSubcommand {
    /// Set a whole-day target that overrides the sum of meal plans
    Set {
        /// Minimum grams for the day
        #[arg(long)]
        min: u32,

        /// Maximum grams for the day
        #[arg(long)]
        max: u32,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,
    },

    /// Remove the daily target, falling back to meal plans
    Clear {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,
    },
}

impl TargetCommand {
    pub fn run<B: StorageBackend>(
        &self,
        store: &CarbStore<B>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            TargetSubcommand::Set { min, max, date } => {
                let date = resolve_date(date.as_deref())?;
                if min > max {
                    tracing::warn!(min, max, "Daily target minimum is above maximum");
                }

                let day = store.update_day(&date, |day| day.set_daily_target(*min, *max));

                println!("Daily target for {}: {}", day.date, day.effective_target());
                println!("Status: {}", day.history_status());
                Ok(())
            }

            TargetSubcommand::Clear { date } => {
                let date = resolve_date(date.as_deref())?;
                let day = store.update_day(&date, |day| day.clear_daily_target());

                if day.effective_target().is_set() {
                    println!(
                        "Cleared daily target for {}. Using meal target: {}",
                        day.date,
                        day.effective_target()
                    );
                } else {
                    println!("Cleared daily target for {}", day.date);
                }
                Ok(())
            }
        }
    }
}
