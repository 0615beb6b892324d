use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed meal slots tracked for every day.
///
/// Variant order is the canonical slot order within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum MealType {
    Breakfast,
    #[serde(rename = "Intra/Post Workout")]
    IntraPostWorkout,
    Lunch,
    #[serde(rename = "Snack 1")]
    Snack1,
    #[serde(rename = "Snack 2")]
    Snack2,
    #[serde(rename = "Snack 3")]
    Snack3,
    Dinner,
}

impl MealType {
    /// All meal slots in canonical order.
    pub const ALL: [MealType; 7] = [
        MealType::Breakfast,
        MealType::IntraPostWorkout,
        MealType::Lunch,
        MealType::Snack1,
        MealType::Snack2,
        MealType::Snack3,
        MealType::Dinner,
    ];

    /// The label stored on disk and shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::IntraPostWorkout => "Intra/Post Workout",
            MealType::Lunch => "Lunch",
            MealType::Snack1 => "Snack 1",
            MealType::Snack2 => "Snack 2",
            MealType::Snack3 => "Snack 3",
            MealType::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MealType {
    type Err = String;

    /// Accepts the stored label in any case, ignoring spaces and punctuation,
    /// so `"Snack 1"`, `"snack1"` and `"snack-1"` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "intrapostworkout" | "workout" => Ok(MealType::IntraPostWorkout),
            "lunch" => Ok(MealType::Lunch),
            "snack1" => Ok(MealType::Snack1),
            "snack2" => Ok(MealType::Snack2),
            "snack3" => Ok(MealType::Snack3),
            "dinner" => Ok(MealType::Dinner),
            _ => Err(format!(
                "Invalid meal type '{}'. Valid options: breakfast, workout, lunch, snack1, snack2, snack3, dinner",
                s
            )),
        }
    }
}

/// Stored labels are matched the same way as user input, so a hand-edited
/// `"breakfast"` or `"snack 1"` still loads.
impl<'de> Deserialize<'de> for MealType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
