mod day_data;
pub mod lenient;
mod meal;
mod meal_type;
mod status;
mod totals;

pub use day_data::DayData;
pub use meal::{Meal, MealField};
pub use meal_type::MealType;
pub use status::{TargetRange, TargetStatus};
pub use totals::{calculate_totals, Totals};
