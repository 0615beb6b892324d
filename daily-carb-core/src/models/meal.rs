use serde::{Deserialize, Serialize};
use std::fmt;

use super::lenient;
use super::meal_type::MealType;
use super::status::TargetStatus;

/// Planned and actual carbohydrate grams for one meal slot.
///
/// `planned_min` is not required to be at most `planned_max`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    #[serde(rename = "type")]
    pub meal_type: MealType,
    #[serde(default, deserialize_with = "lenient::grams")]
    pub planned_min: u32,
    #[serde(default, deserialize_with = "lenient::grams")]
    pub planned_max: u32,
    #[serde(default, deserialize_with = "lenient::grams")]
    pub actual: u32,
}

/// The editable numeric fields of a [`Meal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealField {
    PlannedMin,
    PlannedMax,
    Actual,
}

impl Meal {
    /// A zeroed meal for the given slot.
    pub fn empty(meal_type: MealType) -> Self {
        Self {
            meal_type,
            planned_min: 0,
            planned_max: 0,
            actual: 0,
        }
    }

    pub fn with_planned(mut self, min: u32, max: u32) -> Self {
        self.planned_min = min;
        self.planned_max = max;
        self
    }

    pub fn with_actual(mut self, actual: u32) -> Self {
        self.actual = actual;
        self
    }

    pub fn set(&mut self, field: MealField, value: u32) {
        match field {
            MealField::PlannedMin => self.planned_min = value,
            MealField::PlannedMax => self.planned_max = value,
            MealField::Actual => self.actual = value,
        }
    }

    /// Zeroes all three amounts, keeping the slot.
    pub fn clear(&mut self) {
        self.planned_min = 0;
        self.planned_max = 0;
        self.actual = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.planned_min == 0 && self.planned_max == 0 && self.actual == 0
    }

    /// Progress indicator for a meal that has both a plan and an intake.
    ///
    /// Returns `None` unless `planned_max` and `actual` are both non-zero.
    pub fn status(&self) -> Option<TargetStatus> {
        if self.planned_max == 0 || self.actual == 0 {
            return None;
        }
        let status = if self.actual > self.planned_max {
            TargetStatus::Over
        } else if self.actual >= self.planned_min {
            TargetStatus::Within
        } else {
            TargetStatus::Under
        };
        Some(status)
    }

    /// Actual intake as a percentage of `planned_max`, capped at 100.
    pub fn progress_percent(&self) -> u32 {
        if self.planned_max == 0 {
            return 0;
        }
        let percent = u64::from(self.actual) * 100 / u64::from(self.planned_max);
        percent.min(100) as u32
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}g (planned {}-{}g)",
            self.meal_type, self.actual, self.planned_min, self.planned_max
        )
    }
}
