use serde::{Deserialize, Serialize};
use std::fmt;

use super::lenient;
use super::meal::{Meal, MealField};
use super::meal_type::MealType;
use super::status::{TargetRange, TargetStatus};
use super::totals::{calculate_totals, Totals};

/// Everything recorded for one calendar date.
///
/// The three `total_*` fields are derived from `meals`. The store recomputes
/// them on every write, so values supplied by callers are never trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayData {
    /// ISO `YYYY-MM-DD` key.
    pub date: String,
    #[serde(default)]
    pub meals: Vec<Meal>,
    #[serde(default, deserialize_with = "lenient::grams")]
    pub total_actual: u32,
    #[serde(default, deserialize_with = "lenient::grams")]
    pub total_planned_min: u32,
    #[serde(default, deserialize_with = "lenient::grams")]
    pub total_planned_max: u32,
    #[serde(
        default,
        deserialize_with = "lenient::optional_grams",
        skip_serializing_if = "Option::is_none"
    )]
    pub daily_target_min: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_grams",
        skip_serializing_if = "Option::is_none"
    )]
    pub daily_target_max: Option<u32>,
}

impl DayData {
    /// A day with one zeroed meal per slot, in canonical order, and no
    /// daily target.
    pub fn empty(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            meals: MealType::ALL.iter().map(|t| Meal::empty(*t)).collect(),
            total_actual: 0,
            total_planned_min: 0,
            total_planned_max: 0,
            daily_target_min: None,
            daily_target_max: None,
        }
    }

    /// The totals currently stored on the record.
    pub fn totals(&self) -> Totals {
        Totals {
            total_actual: self.total_actual,
            total_planned_min: self.total_planned_min,
            total_planned_max: self.total_planned_max,
        }
    }

    pub fn apply_totals(&mut self, totals: Totals) {
        self.total_actual = totals.total_actual;
        self.total_planned_min = totals.total_planned_min;
        self.total_planned_max = totals.total_planned_max;
    }

    /// Recomputes the derived totals from `meals`.
    pub fn recompute_totals(&mut self) {
        let totals = calculate_totals(&self.meals);
        self.apply_totals(totals);
    }

    pub fn meal(&self, meal_type: MealType) -> Option<&Meal> {
        self.meals.iter().find(|m| m.meal_type == meal_type)
    }

    pub fn meal_mut(&mut self, meal_type: MealType) -> Option<&mut Meal> {
        self.meals.iter_mut().find(|m| m.meal_type == meal_type)
    }

    /// Sets one field of one slot and refreshes the totals.
    ///
    /// Returns `false` if the record has no meal for `meal_type`, which only
    /// happens for hand-edited records.
    pub fn set_meal_field(&mut self, meal_type: MealType, field: MealField, value: u32) -> bool {
        match self.meal_mut(meal_type) {
            Some(meal) => meal.set(field, value),
            None => return false,
        }
        self.recompute_totals();
        true
    }

    /// Zeroes one slot and refreshes the totals.
    pub fn clear_meal(&mut self, meal_type: MealType) -> bool {
        match self.meal_mut(meal_type) {
            Some(meal) => meal.clear(),
            None => return false,
        }
        self.recompute_totals();
        true
    }

    pub fn set_daily_target(&mut self, min: u32, max: u32) {
        self.daily_target_min = Some(min);
        self.daily_target_max = Some(max);
    }

    pub fn clear_daily_target(&mut self) {
        self.daily_target_min = None;
        self.daily_target_max = None;
    }

    /// True when a non-zero daily target bound is set.
    pub fn has_daily_target(&self) -> bool {
        self.daily_target_min.is_some_and(|v| v > 0) || self.daily_target_max.is_some_and(|v| v > 0)
    }

    /// The daily target, with each unset bound falling back to the
    /// meal-sum total.
    pub fn effective_target(&self) -> TargetRange {
        TargetRange {
            min: self.daily_target_min.unwrap_or(self.total_planned_min),
            max: self.daily_target_max.unwrap_or(self.total_planned_max),
        }
    }

    /// The sum of planned meal ranges, ignoring any daily target.
    pub fn planned_range(&self) -> TargetRange {
        TargetRange {
            min: self.total_planned_min,
            max: self.total_planned_max,
        }
    }

    /// Classification used by the history list, against
    /// [`effective_target`](Self::effective_target).
    pub fn history_status(&self) -> TargetStatus {
        let target = self.effective_target();
        let actual = self.total_actual;

        if target.max > 0 && actual > target.max {
            TargetStatus::Over
        } else if target.min > 0 && actual < target.min {
            TargetStatus::Under
        } else if target.max > 0 && actual >= target.min && actual <= target.max {
            TargetStatus::Within
        } else {
            TargetStatus::NoTarget
        }
    }

    /// Classification used to colour calendar cells, against
    /// [`effective_target`](Self::effective_target). Days with no intake are
    /// left uncoloured.
    pub fn calendar_status(&self) -> TargetStatus {
        let target = self.effective_target();
        let actual = self.total_actual;

        if actual == 0 {
            TargetStatus::NoData
        } else if target.max == 0 {
            TargetStatus::NoTarget
        } else if actual > target.max {
            TargetStatus::Over
        } else if actual < target.min {
            TargetStatus::Under
        } else {
            TargetStatus::Within
        }
    }

    /// Classification shown on the day tracker.
    ///
    /// Compares only against the meal-sum maximum: the daily target and the
    /// planned minimum are not consulted, so any intake below the maximum
    /// counts as under.
    ///
    /// Only `Over` and `Under` are highlighted on the tracker. `Within` is
    /// reached solely when actual equals the maximum exactly, and is shown as
    /// neutrally as `NoData` and `NoTarget`.
    pub fn tracker_status(&self) -> TargetStatus {
        let max = self.total_planned_max;
        let actual = self.total_actual;

        if max > 0 && actual > max {
            TargetStatus::Over
        } else if actual > 0 && actual < max {
            TargetStatus::Under
        } else if actual == 0 {
            TargetStatus::NoData
        } else if max == 0 {
            TargetStatus::NoTarget
        } else {
            TargetStatus::Within
        }
    }
}

impl fmt::Display for DayData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.date)?;
        writeln!(f, "{}", "=".repeat(40))?;

        for meal in &self.meals {
            writeln!(
                f,
                "  {:20} {:>5}g  planned {}-{}g",
                meal.meal_type.label(),
                meal.actual,
                meal.planned_min,
                meal.planned_max
            )?;
        }

        writeln!(f, "  {}", "-".repeat(38))?;
        write!(f, "  {:20} {:>5}g", "Total", self.total_actual)?;

        let target = self.effective_target();
        if target.is_set() {
            let label = if self.has_daily_target() {
                "Daily Target"
            } else {
                "Meal Target"
            };
            write!(f, "  {}: {}", label, target)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_day() -> DayData {
        let mut day = DayData::empty("2024-06-01");
        day.set_meal_field(MealType::Breakfast, MealField::PlannedMin, 20);
        day.set_meal_field(MealType::Breakfast, MealField::PlannedMax, 40);
        day.set_meal_field(MealType::Breakfast, MealField::Actual, 30);
        day.set_meal_field(MealType::Lunch, MealField::Actual, 50);
        day
    }

    #[test]
    fn test_empty_day_shape() {
        let day = DayData::empty("2024-01-01");
        assert_eq!(day.date, "2024-01-01");
        assert_eq!(day.meals.len(), 7);

        let types: Vec<MealType> = day.meals.iter().map(|m| m.meal_type).collect();
        assert_eq!(types, MealType::ALL.to_vec());
        assert!(day.meals.iter().all(Meal::is_empty));
        assert_eq!(day.totals(), Totals::default());
        assert!(day.daily_target_min.is_none());
        assert!(day.daily_target_max.is_none());
    }

    #[test]
    fn test_set_meal_field_updates_totals() {
        let day = scenario_day();
        assert_eq!(day.total_actual, 80);
        assert_eq!(day.total_planned_min, 20);
        assert_eq!(day.total_planned_max, 40);
    }

    #[test]
    fn test_clear_meal() {
        let mut day = scenario_day();
        assert!(day.clear_meal(MealType::Breakfast));

        assert!(day.meal(MealType::Breakfast).unwrap().is_empty());
        assert_eq!(day.total_actual, 50);
        assert_eq!(day.total_planned_max, 0);
    }

    #[test]
    fn test_set_missing_slot_reports_false() {
        let mut day = DayData::empty("2024-01-01");
        day.meals.retain(|m| m.meal_type != MealType::Dinner);
        assert!(!day.set_meal_field(MealType::Dinner, MealField::Actual, 10));
        assert!(!day.clear_meal(MealType::Dinner));
    }

    #[test]
    fn test_effective_target_falls_back_per_bound() {
        let mut day = scenario_day();
        assert_eq!(day.effective_target(), TargetRange::new(20, 40));
        assert!(!day.has_daily_target());

        day.daily_target_max = Some(150);
        assert_eq!(day.effective_target(), TargetRange::new(20, 150));

        day.set_daily_target(100, 150);
        assert_eq!(day.effective_target(), TargetRange::new(100, 150));
        assert!(day.has_daily_target());

        day.clear_daily_target();
        assert_eq!(day.effective_target(), TargetRange::new(20, 40));
    }

    #[test]
    fn test_zero_daily_target_is_still_an_override() {
        let mut day = scenario_day();
        day.set_daily_target(0, 0);
        assert_eq!(day.effective_target(), TargetRange::new(0, 0));
        assert!(!day.has_daily_target());
    }

    #[test]
    fn test_daily_target_takes_precedence() {
        let mut day = DayData::empty("2024-06-02");
        day.set_meal_field(MealType::Lunch, MealField::PlannedMin, 10);
        day.set_meal_field(MealType::Lunch, MealField::PlannedMax, 20);
        day.set_meal_field(MealType::Lunch, MealField::Actual, 120);
        assert_eq!(day.history_status(), TargetStatus::Over);

        day.set_daily_target(100, 150);
        assert_eq!(day.history_status(), TargetStatus::Within);
        assert_eq!(day.calendar_status(), TargetStatus::Within);
    }

    #[test]
    fn test_history_status() {
        let mut day = DayData::empty("2024-06-03");
        assert_eq!(day.history_status(), TargetStatus::NoTarget);

        day.set_daily_target(100, 150);
        assert_eq!(day.history_status(), TargetStatus::Under);

        day.set_meal_field(MealType::Dinner, MealField::Actual, 100);
        assert_eq!(day.history_status(), TargetStatus::Within);

        day.set_meal_field(MealType::Dinner, MealField::Actual, 151);
        assert_eq!(day.history_status(), TargetStatus::Over);
    }

    #[test]
    fn test_calendar_status() {
        let mut day = DayData::empty("2024-06-04");
        day.set_daily_target(100, 150);
        assert_eq!(day.calendar_status(), TargetStatus::NoData);

        day.set_meal_field(MealType::Dinner, MealField::Actual, 50);
        assert_eq!(day.calendar_status(), TargetStatus::Under);

        day.clear_daily_target();
        assert_eq!(day.calendar_status(), TargetStatus::NoTarget);
    }

    #[test]
    fn test_tracker_status_ignores_min_and_daily_target() {
        let mut day = scenario_day();
        // 80g eaten against a 20-40g meal plan
        assert_eq!(day.tracker_status(), TargetStatus::Over);

        day.set_daily_target(100, 150);
        assert_eq!(day.tracker_status(), TargetStatus::Over);

        day.set_meal_field(MealType::Dinner, MealField::PlannedMax, 200);
        day.set_meal_field(MealType::Dinner, MealField::PlannedMin, 150);
        // Below the planned minimum, yet the tracker only checks the maximum.
        assert_eq!(day.tracker_status(), TargetStatus::Under);
        assert_eq!(day.history_status(), TargetStatus::Under);

        let empty = DayData::empty("2024-06-05");
        assert_eq!(empty.tracker_status(), TargetStatus::NoData);
    }

    #[test]
    fn test_tracker_status_boundaries() {
        let mut day = DayData::empty("2024-06-06");
        day.set_meal_field(MealType::Lunch, MealField::PlannedMin, 30);
        day.set_meal_field(MealType::Lunch, MealField::PlannedMax, 50);

        day.set_meal_field(MealType::Lunch, MealField::Actual, 50);
        assert_eq!(day.tracker_status(), TargetStatus::Within);

        // Inside the planned range still counts as under on the tracker
        day.set_meal_field(MealType::Lunch, MealField::Actual, 40);
        assert_eq!(day.tracker_status(), TargetStatus::Under);
        assert_eq!(day.history_status(), TargetStatus::Within);

        day.set_meal_field(MealType::Lunch, MealField::Actual, 51);
        assert_eq!(day.tracker_status(), TargetStatus::Over);

        day.set_meal_field(MealType::Lunch, MealField::PlannedMax, 0);
        assert_eq!(day.tracker_status(), TargetStatus::NoTarget);
    }

    #[test]
    fn test_json_field_names() {
        let mut day = scenario_day();
        day.set_daily_target(100, 150);
        let json = serde_json::to_value(&day).unwrap();

        assert_eq!(json["date"], "2024-06-01");
        assert_eq!(json["totalActual"], 80);
        assert_eq!(json["totalPlannedMin"], 20);
        assert_eq!(json["totalPlannedMax"], 40);
        assert_eq!(json["dailyTargetMin"], 100);
        assert_eq!(json["dailyTargetMax"], 150);
        assert_eq!(json["meals"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_json_omits_unset_target() {
        let json = serde_json::to_value(DayData::empty("2024-01-01")).unwrap();
        assert!(json.get("dailyTargetMin").is_none());
        assert!(json.get("dailyTargetMax").is_none());
    }

    #[test]
    fn test_legacy_record_without_target() {
        let json = r#"{
            "date": "2023-12-31",
            "meals": [{"type": "Breakfast", "plannedMin": 10, "plannedMax": 20, "actual": 15}],
            "totalActual": 15,
            "totalPlannedMin": 10,
            "totalPlannedMax": 20
        }"#;
        let day: DayData = serde_json::from_str(json).unwrap();
        assert_eq!(day.daily_target_min, None);
        assert_eq!(day.daily_target_max, None);
        assert_eq!(day.effective_target(), TargetRange::new(10, 20));
    }

    #[test]
    fn test_null_target_reads_as_unset() {
        let json = r#"{"date": "2023-12-31", "meals": [], "dailyTargetMin": null, "dailyTargetMax": 0}"#;
        let day: DayData = serde_json::from_str(json).unwrap();
        assert_eq!(day.daily_target_min, None);
        assert_eq!(day.daily_target_max, Some(0));
    }

    #[test]
    fn test_display_labels_target_source() {
        let mut day = scenario_day();
        let output = format!("{}", day);
        assert!(output.contains("2024-06-01"));
        assert!(output.contains("Intra/Post Workout"));
        assert!(output.contains("Meal Target: 20-40g"));

        day.set_daily_target(100, 150);
        assert!(format!("{}", day).contains("Daily Target: 100-150g"));
    }
}
