//! Daily Carb Core Library
//!
//! Day records of planned and actual carbohydrate intake per meal, their
//! derived totals, and the local store that persists them.

pub mod calendar;
pub mod date;
pub mod models;
pub mod storage;
pub mod store;

pub use calendar::{CalendarCell, MonthCalendar};
pub use date::{
    format_date, is_date_in_past, normalize_date, parse_date, today_date, DateError,
};
pub use models::{
    calculate_totals, DayData, Meal, MealField, MealType, TargetRange, TargetStatus, Totals,
};
pub use storage::{
    DayCollection, JsonFileStorage, MemoryStorage, StorageBackend, StorageError, STORAGE_KEY,
};
pub use store::CarbStore;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
