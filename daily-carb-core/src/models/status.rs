use serde::{Deserialize, Serialize};
use std::fmt;

/// A planned carbohydrate range in grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRange {
    pub min: u32,
    pub max: u32,
}

impl TargetRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// A range with a zero upper bound means no target was set.
    pub fn is_set(&self) -> bool {
        self.max > 0
    }
}

impl fmt::Display for TargetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}g", self.min, self.max)
    }
}

/// How a day's (or meal's) intake compares to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetStatus {
    /// Nothing eaten yet.
    NoData,
    /// No target range to compare against.
    NoTarget,
    Under,
    Within,
    Over,
}

impl fmt::Display for TargetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetStatus::NoData => write!(f, "no data"),
            TargetStatus::NoTarget => write!(f, "no target"),
            TargetStatus::Under => write!(f, "below target"),
            TargetStatus::Within => write!(f, "within target"),
            TargetStatus::Over => write!(f, "over target"),
        }
    }
}
