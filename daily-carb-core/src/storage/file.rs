//! JSON file storage for persisting the day collection to disk.

use std::fs;
use std::io;
use std::path::PathBuf;

use super::{
    decode_collection, encode_collection, DayCollection, StorageBackend, StorageError, STORAGE_KEY,
};

/// Stores the collection as `<data_dir>/dailycarb_data.json`.
#[derive(Clone, Debug)]
pub struct JsonFileStorage {
    data_dir: PathBuf,
}

impl JsonFileStorage {
    /// Creates a new storage instance with a custom data directory.
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Returns the full path of the data file.
    pub fn path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", STORAGE_KEY))
    }

    /// Checks if the data file exists on disk.
    pub fn exists(&self) -> bool {
        self.path().exists()
    }
}

impl StorageBackend for JsonFileStorage {
    /// Returns an empty collection if the file doesn't exist.
    /// Returns `Err` for other I/O or parsing errors.
    fn load(&self) -> Result<DayCollection, StorageError> {
        let path = self.path();

        match fs::read_to_string(&path) {
            Ok(raw) => decode_collection(&raw),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(DayCollection::new()),
            Err(e) => Err(StorageError::Io { path, source: e }),
        }
    }

    /// Creates the data directory if it doesn't exist.
    fn save(&self, data: &DayCollection) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir).map_err(|e| StorageError::Io {
            path: self.data_dir.clone(),
            source: e,
        })?;

        let path = self.path();
        let raw = encode_collection(data)?;

        fs::write(&path, raw).map_err(|e| StorageError::Io { path, source: e })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayData;
    use tempfile::TempDir;

    fn test_storage() -> (JsonFileStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path().to_path_buf());
        (storage, temp_dir)
    }

    fn one_day(date: &str) -> DayCollection {
        let mut data = DayCollection::new();
        data.insert(date.to_string(), DayData::empty(date));
        data
    }

    #[test]
    fn test_storage_path() {
        let (storage, _temp) = test_storage();
        assert!(storage.path().ends_with("dailycarb_data.json"));
    }

    #[test]
    fn test_load_nonexistent_returns_empty() {
        let (storage, _temp) = test_storage();
        assert!(!storage.exists());
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested_dir = temp_dir.path().join("nested").join("data");
        let storage = JsonFileStorage::new(nested_dir.clone());

        storage.save(&DayCollection::new()).unwrap();

        assert!(nested_dir.exists());
        assert!(storage.exists());
    }

    #[test]
    fn test_save_then_load() {
        let (storage, _temp) = test_storage();
        let data = one_day("2024-06-01");

        storage.save(&data).unwrap();

        assert_eq!(storage.load().unwrap(), data);
    }

    #[test]
    fn test_overwrite_existing_file() {
        let (storage, _temp) = test_storage();

        storage.save(&one_day("2024-06-01")).unwrap();
        storage.save(&one_day("2024-06-02")).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.contains_key("2024-06-02"));
    }

    #[test]
    fn test_load_corrupt_file() {
        let (storage, _temp) = test_storage();
        fs::write(storage.path(), "{\"2024-06-01\": ").unwrap();

        assert!(matches!(storage.load(), Err(StorageError::Parse(_))));
    }

    #[test]
    fn test_load_empty_file() {
        let (storage, _temp) = test_storage();
        fs::write(storage.path(), "").unwrap();

        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_into_unwritable_location() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where the data directory should be.
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let storage = JsonFileStorage::new(blocker);

        let err = storage.save(&DayCollection::new()).unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
        assert!(err.to_string().contains("blocker"));
    }
}
