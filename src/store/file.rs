//! File-backed key-value store
//! One JSON document per key under a storage directory

use std::fs;
use std::path::PathBuf;

use crate::errors::{PagerError, Result};
use crate::store::{validate_key, KeyValueStore};

/// Store keeping each entry in `<storage_dir>/<key>.json`
pub struct FileStore {
    storage_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at a directory, creating it if missing
    pub fn new(storage_dir: PathBuf) -> Result<Self> {
        if !storage_dir.exists() {
            fs::create_dir_all(&storage_dir)
                .map_err(|e| PagerError::StoreError(format!("Failed to create store directory: {}", e)))?;
        }

        Ok(Self { storage_dir })
    }

    /// Get storage directory
    pub fn storage_dir(&self) -> &PathBuf {
        &self.storage_dir
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.storage_dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let value = fs::read_to_string(&path)
            .map_err(|e| PagerError::StoreError(format!("Failed to read entry '{}': {}", key, e)))?;

        Ok(Some(value))
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key)?;

        fs::write(&path, value)
            .map_err(|e| PagerError::StoreError(format!("Failed to write entry '{}': {}", key, e)))?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.entry_path(key)?;

        if path.exists() {
            fs::remove_file(&path)
                .map_err(|e| PagerError::StoreError(format!("Failed to delete entry '{}': {}", key, e)))?;
        }

        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        if !self.storage_dir.exists() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();

        for entry in fs::read_dir(&self.storage_dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() {
                if let Some(filename) = path.file_name().and_then(|n| n.to_str()) {
                    if let Some(key) = filename.strip_suffix(".json") {
                        keys.push(key.to_string());
                    }
                }
            }
        }

        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("store")).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_store_creates_directory() {
        let (store, _temp) = create_test_store();
        assert!(store.storage_dir().exists());
    }

    #[test]
    fn test_put_and_get() {
        let (mut store, _temp) = create_test_store();
        store.put("inventory", "{\"items_per_page\":50}").unwrap();
        let value = store.get("inventory").unwrap();
        assert_eq!(value.as_deref(), Some("{\"items_per_page\":50}"));
    }

    #[test]
    fn test_get_missing_key() {
        let (store, _temp) = create_test_store();
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn test_put_overwrites() {
        let (mut store, _temp) = create_test_store();
        store.put("view", "first").unwrap();
        store.put("view", "second").unwrap();
        assert_eq!(store.get("view").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_remove() {
        let (mut store, _temp) = create_test_store();
        store.put("view", "value").unwrap();
        store.remove("view").unwrap();
        assert_eq!(store.get("view").unwrap(), None);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let (mut store, _temp) = create_test_store();
        assert!(store.remove("absent").is_ok());
    }

    #[test]
    fn test_keys_sorted() {
        let (mut store, _temp) = create_test_store();
        store.put("orders", "a").unwrap();
        store.put("customers", "b").unwrap();
        store.put("inventory", "c").unwrap();
        let keys = store.keys().unwrap();
        assert_eq!(keys, vec!["customers", "inventory", "orders"]);
    }

    #[test]
    fn test_keys_ignore_foreign_files() {
        let (mut store, _temp) = create_test_store();
        store.put("inventory", "a").unwrap();
        std::fs::write(store.storage_dir().join("notes.txt"), "ignored").unwrap();
        assert_eq!(store.keys().unwrap(), vec!["inventory"]);
    }

    #[test]
    fn test_invalid_key_rejected() {
        let (mut store, _temp) = create_test_store();
        assert!(store.put("../escape", "value").is_err());
        assert!(store.get("../escape").is_err());
    }
}
