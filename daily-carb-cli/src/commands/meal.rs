use clap::{Args, Subcommand};

use daily_carb_core::{CarbStore, DayData, MealField, MealType, StorageBackend};

use super::resolve_date;

#[derive(Args)]
pub struct MealCommand {
    #[command(subcommand)]
    pub command: MealSubcommand,
}

#[derive(Subcommand)]
pub enum MealSubcommand {
    /// Set planned and/or actual grams for a meal
    Set {
        /// Meal (breakfast, workout, lunch, snack1, snack2, snack3, dinner)
        #[arg(long = "type", short = 't', value_name = "TYPE")]
        meal_type: String,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,

        /// Planned minimum grams
        #[arg(long)]
        min: Option<u32>,

        /// Planned maximum grams
        #[arg(long)]
        max: Option<u32>,

        /// Actual grams eaten
        #[arg(long)]
        actual: Option<u32>,
    },

    /// Reset a meal to zero
    Clear {
        /// Meal (breakfast, workout, lunch, snack1, snack2, snack3, dinner)
        #[arg(long = "type", short = 't', value_name = "TYPE")]
        meal_type: String,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,
    },
}

impl MealCommand {
    pub fn run<B: StorageBackend>(
        &self,
        store: &CarbStore<B>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            MealSubcommand::Set {
                meal_type,
                date,
                min,
                max,
                actual,
            } => {
                let date = resolve_date(date.as_deref())?;
                let meal_type: MealType = meal_type.parse()?;

                let edits = field_edits(*min, *max, *actual);
                if edits.is_empty() {
                    return Err("Nothing to set. Use --min, --max or --actual.".into());
                }

                let day = set_meal_fields(store, &date, meal_type, &edits)?;
                print_summary(&day, meal_type);
                Ok(())
            }

            MealSubcommand::Clear { meal_type, date } => {
                let date = resolve_date(date.as_deref())?;
                let meal_type: MealType = meal_type.parse()?;

                let mut day = store.get_data_for_date(&date);
                if !day.clear_meal(meal_type) {
                    return Err(missing_slot(&date, meal_type).into());
                }
                store.save_data_for_date(&day);

                print_summary(&day, meal_type);
                Ok(())
            }
        }
    }
}

fn field_edits(min: Option<u32>, max: Option<u32>, actual: Option<u32>) -> Vec<(MealField, u32)> {
    [
        (MealField::PlannedMin, min),
        (MealField::PlannedMax, max),
        (MealField::Actual, actual),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.map(|v| (field, v)))
    .collect()
}

/// Applies each edit as its own save, one write per changed field.
fn set_meal_fields<B: StorageBackend>(
    store: &CarbStore<B>,
    date: &str,
    meal_type: MealType,
    edits: &[(MealField, u32)],
) -> Result<DayData, String> {
    let mut day = store.get_data_for_date(date);

    for (field, value) in edits {
        if !day.set_meal_field(meal_type, *field, *value) {
            return Err(missing_slot(date, meal_type));
        }
        store.save_data_for_date(&day);
    }

    Ok(day)
}

fn missing_slot(date: &str, meal_type: MealType) -> String {
    format!("Day {} has no {} slot", date, meal_type)
}

fn print_summary(day: &DayData, meal_type: MealType) {
    if let Some(meal) = day.meal(meal_type) {
        println!("{}  {}", day.date, meal);
    }
    println!(
        "Day total: {}g (planned {})",
        day.total_actual,
        day.planned_range()
    );
}
