use serde::{Deserialize, Serialize};

use super::meal::Meal;

/// Day-level sums derived from a day's meals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_actual: u32,
    pub total_planned_min: u32,
    pub total_planned_max: u32,
}

/// Sums `actual`, `planned_min` and `planned_max` across `meals`.
///
/// Bad values were already coerced to zero when the meals were decoded, so
/// this is a plain reduction. Sums saturate rather than wrap.
pub fn calculate_totals(meals: &[Meal]) -> Totals {
    meals.iter().fold(Totals::default(), |acc, meal| Totals {
        total_actual: acc.total_actual.saturating_add(meal.actual),
        total_planned_min: acc.total_planned_min.saturating_add(meal.planned_min),
        total_planned_max: acc.total_planned_max.saturating_add(meal.planned_max),
    })
}
