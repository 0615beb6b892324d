//! Persistence backends for the day collection.
//!
//! The whole collection is stored as one JSON object under a single key,
//! mapping `YYYY-MM-DD` to a day record:
//!
//! ```text
//! dailycarb_data = {
//!   "2024-06-01": { "date": "2024-06-01", "meals": [...], "totalActual": 80, ... },
//!   "2024-06-02": { ... }
//! }
//! ```
//!
//! There is no schema version. Backends read and write the collection as a
//! unit; the [`CarbStore`](crate::CarbStore) decides what to do on failure.
//! Records are decoded one at a time, so a single unreadable day is dropped
//! without taking the rest of the collection with it.

mod error;
mod file;
mod memory;

use std::collections::BTreeMap;

use crate::models::DayData;

pub use error::StorageError;
pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

/// The fixed key the collection is stored under.
pub const STORAGE_KEY: &str = "dailycarb_data";

/// All persisted day records, keyed by date.
pub type DayCollection = BTreeMap<String, DayData>;

/// A medium that can load and save the whole day collection.
pub trait StorageBackend {
    /// Loads the collection. A medium with nothing stored yet yields an
    /// empty collection, not an error.
    fn load(&self) -> Result<DayCollection, StorageError>;

    /// Replaces the stored collection with `data` in a single write.
    fn save(&self, data: &DayCollection) -> Result<(), StorageError>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for Box<B> {
    fn load(&self) -> Result<DayCollection, StorageError> {
        (**self).load()
    }

    fn save(&self, data: &DayCollection) -> Result<(), StorageError> {
        (**self).save(data)
    }
}

/// Decodes a stored blob. Blank input is an empty collection.
///
/// Only a blob that is not a JSON object fails. Records that cannot be read
/// as a day are logged and left out.
pub fn decode_collection(raw: &str) -> Result<DayCollection, StorageError> {
    if raw.trim().is_empty() {
        return Ok(DayCollection::new());
    }

    let records: BTreeMap<String, serde_json::Value> =
        serde_json::from_str(raw).map_err(|e| StorageError::Parse(e.to_string()))?;

    let mut data = DayCollection::new();
    for (date, record) in records {
        match serde_json::from_value::<DayData>(record) {
            Ok(day) => {
                data.insert(date, day);
            }
            Err(e) => tracing::warn!(date = %date, "Skipping unreadable day record: {}", e),
        }
    }
    Ok(data)
}

pub fn encode_collection(data: &DayCollection) -> Result<String, StorageError> {
    serde_json::to_string(data).map_err(|e| StorageError::Serialize(e.to_string()))
}
