//! In-memory blob storage.
//!
//! Behaves like a browser-style key-value store holding the serialized
//! collection under [`STORAGE_KEY`]. Clones share the same underlying blob,
//! so two stores built from clones see each other's writes. Reads and writes
//! can be made to fail to exercise the store's degraded paths.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{
    decode_collection, encode_collection, DayCollection, StorageBackend, StorageError, STORAGE_KEY,
};

#[derive(Debug, Default)]
struct MemoryState {
    blobs: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage whose blob already holds `raw`, e.g. a legacy or
    /// hand-edited collection.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.set_raw(raw);
        storage
    }

    /// The stored blob, if anything has been written.
    pub fn raw(&self) -> Option<String> {
        self.lock().blobs.get(STORAGE_KEY).cloned()
    }

    pub fn set_raw(&self, raw: impl Into<String>) {
        self.lock().blobs.insert(STORAGE_KEY.to_string(), raw.into());
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.lock().fail_reads = fail;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self) -> Result<DayCollection, StorageError> {
        let state = self.lock();
        if state.fail_reads {
            return Err(StorageError::Unavailable("reads disabled".to_string()));
        }
        match state.blobs.get(STORAGE_KEY) {
            Some(raw) => decode_collection(raw),
            None => Ok(DayCollection::new()),
        }
    }

    fn save(&self, data: &DayCollection) -> Result<(), StorageError> {
        let raw = encode_collection(data)?;
        let mut state = self.lock();
        if state.fail_writes {
            return Err(StorageError::Unavailable("writes disabled".to_string()));
        }
        state.blobs.insert(STORAGE_KEY.to_string(), raw);
        state.writes += 1;
        Ok(())
    }
}
