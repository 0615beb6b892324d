//! The single gateway for reading, mutating and deleting day records.
//!
//! Every operation is a synchronous read-modify-write of the whole
//! collection through the injected [`StorageBackend`]. There is no locking:
//! two writers that interleave a load and a save lose one another's changes,
//! and the last save wins.
//!
//! Backend failures never reach callers. A failed read behaves like an empty
//! collection and a failed write is dropped; both are logged. The `try_*`
//! methods expose the underlying results.

use crate::models::{calculate_totals, DayData, Meal, Totals};
use crate::storage::{DayCollection, StorageBackend, StorageError};

pub struct CarbStore<B> {
    backend: B,
}

impl<B: StorageBackend> CarbStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Loads the collection, reporting backend failures.
    pub fn try_get_all_data(&self) -> Result<DayCollection, StorageError> {
        self.backend.load()
    }

    /// Persists the collection, reporting backend failures.
    pub fn try_save_all_data(&self, data: &DayCollection) -> Result<(), StorageError> {
        self.backend.save(data)
    }

    /// Loads the collection. Any failure yields an empty collection.
    pub fn get_all_data(&self) -> DayCollection {
        match self.try_get_all_data() {
            Ok(data) => data,
            Err(e) => {
                tracing::error!("Error reading day data: {}", e);
                DayCollection::new()
            }
        }
    }

    /// Persists the collection. A failed write is logged and dropped.
    pub fn save_all_data(&self, data: &DayCollection) {
        match self.try_save_all_data(data) {
            Ok(()) => tracing::debug!("Saved {} day record(s)", data.len()),
            Err(e) => tracing::error!("Error writing day data: {}", e),
        }
    }

    /// The stored record for `date`, or a fresh default that is not
    /// persisted.
    pub fn get_data_for_date(&self, date: &str) -> DayData {
        self.get_all_data()
            .remove(date)
            .unwrap_or_else(|| DayData::empty(date))
    }

    /// Recomputes the derived totals, upserts the record under its date and
    /// persists the collection. Totals carried by `day` are ignored.
    pub fn save_data_for_date(&self, day: &DayData) {
        let mut data = self.get_all_data();

        let mut updated = day.clone();
        updated.recompute_totals();
        tracing::debug!(
            date = %updated.date,
            total_actual = updated.total_actual,
            "Saving day"
        );
        data.insert(updated.date.clone(), updated);

        self.save_all_data(&data);
    }

    /// Loads the record for `date` (or a default), applies `update`, saves
    /// it and returns what was saved.
    pub fn update_day<F>(&self, date: &str, update: F) -> DayData
    where
        F: FnOnce(&mut DayData),
    {
        let mut day = self.get_data_for_date(date);
        update(&mut day);
        day.recompute_totals();
        self.save_data_for_date(&day);
        day
    }

    /// Removes the record for `date` if present and persists the result.
    pub fn delete_data_for_date(&self, date: &str) {
        let mut data = self.get_all_data();
        if data.remove(date).is_none() {
            tracing::debug!(date, "No record to delete");
        }
        self.save_all_data(&data);
    }

    /// Copies the meals and daily target of `from_date` onto `to_date`,
    /// replacing whatever was stored there.
    ///
    /// A missing source copies the default (all zeros).
    pub fn copy_day_data(&self, from_date: &str, to_date: &str) {
        let source = self.get_data_for_date(from_date);
        if source.meals.is_empty() {
            tracing::warn!(from_date, "Source day has no meals, nothing copied");
            return;
        }

        let copied = DayData {
            date: to_date.to_string(),
            ..source
        };
        self.save_data_for_date(&copied);
    }

    /// All persisted dates, newest first.
    ///
    /// Sorted by string comparison, which matches date order for
    /// zero-padded ISO keys only.
    pub fn get_all_dates_with_data(&self) -> Vec<String> {
        let mut dates: Vec<String> = self.get_all_data().into_keys().collect();
        dates.sort_by(|a, b| b.cmp(a));
        dates
    }

    /// See [`calculate_totals`].
    pub fn calculate_totals(&self, meals: &[Meal]) -> Totals {
        calculate_totals(meals)
    }
}
