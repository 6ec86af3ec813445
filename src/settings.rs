//! Per-view display settings
//! Remembers each view's chosen page size across runs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::store::KeyValueStore;

/// Display settings remembered for one named view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewSettings {
    /// Rows shown per page
    pub items_per_page: usize,

    /// When the settings were last written
    pub updated_at: DateTime<Utc>,
}

impl ViewSettings {
    /// Settings carrying the given page size, stamped now
    pub fn new(items_per_page: usize) -> Self {
        Self {
            items_per_page,
            updated_at: Utc::now(),
        }
    }
}

/// Loads and saves view settings through an injected store
///
/// The store is handed in by the caller; nothing here reaches for a
/// global location on its own.
pub struct SettingsManager {
    store: Box<dyn KeyValueStore>,
}

impl SettingsManager {
    /// Create a manager over any key-value store
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the saved settings for a view, if any
    pub fn load_view(&self, view: &str) -> Result<Option<ViewSettings>> {
        match self.store.get(view)? {
            Some(json) => {
                let settings: ViewSettings = serde_json::from_str(&json)?;
                Ok(Some(settings))
            }
            None => Ok(None),
        }
    }

    /// Save settings for a view
    pub fn save_view(&mut self, view: &str, settings: &ViewSettings) -> Result<()> {
        let json = serde_json::to_string_pretty(settings)?;
        self.store.put(view, &json)
    }

    /// Record a freshly chosen page size for a view
    pub fn remember(&mut self, view: &str, items_per_page: usize) -> Result<()> {
        self.save_view(view, &ViewSettings::new(items_per_page))
    }

    /// Forget one view's settings; idempotent
    pub fn clear_view(&mut self, view: &str) -> Result<()> {
        self.store.remove(view)
    }

    /// Forget every saved view, returning how many were removed
    pub fn clear_all(&mut self) -> Result<usize> {
        let views = self.store.keys()?;
        for view in &views {
            self.store.remove(view)?;
        }
        Ok(views.len())
    }

    /// Names of all views with saved settings, sorted
    pub fn list_views(&self) -> Result<Vec<String>> {
        self.store.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn create_test_manager() -> SettingsManager {
        SettingsManager::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_save_and_load_view() {
        let mut manager = create_test_manager();
        manager.save_view("inventory", &ViewSettings::new(50)).unwrap();

        let loaded = manager.load_view("inventory").unwrap();
        assert_eq!(loaded.map(|s| s.items_per_page), Some(50));
    }

    #[test]
    fn test_load_missing_view() {
        let manager = create_test_manager();
        assert!(manager.load_view("absent").unwrap().is_none());
    }

    #[test]
    fn test_remember_stamps_settings() {
        let mut manager = create_test_manager();
        manager.remember("orders", 100).unwrap();

        let loaded = manager.load_view("orders").unwrap().unwrap();
        assert_eq!(loaded.items_per_page, 100);
        assert!(loaded.updated_at <= Utc::now());
    }

    #[test]
    fn test_clear_view() {
        let mut manager = create_test_manager();
        manager.remember("orders", 25).unwrap();
        manager.clear_view("orders").unwrap();
        assert!(manager.load_view("orders").unwrap().is_none());
    }

    #[test]
    fn test_clear_all_reports_count() {
        let mut manager = create_test_manager();
        manager.remember("orders", 25).unwrap();
        manager.remember("inventory", 50).unwrap();
        assert_eq!(manager.clear_all().unwrap(), 2);
        assert!(manager.list_views().unwrap().is_empty());
    }

    #[test]
    fn test_list_views_sorted() {
        let mut manager = create_test_manager();
        manager.remember("orders", 25).unwrap();
        manager.remember("customers", 10).unwrap();
        assert_eq!(manager.list_views().unwrap(), vec!["customers", "orders"]);
    }

    #[test]
    fn test_corrupt_payload_is_an_error() {
        let mut store = MemoryStore::new();
        store.put("broken", "not json").unwrap();
        let manager = SettingsManager::new(Box::new(store));
        assert!(manager.load_view("broken").is_err());
    }
}
