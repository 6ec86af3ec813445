//! Key-value settings storage
//! The injected persistence seam behind per-view display settings

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::errors::{PagerError, Result};

/// String key-value store the settings layer persists through
///
/// Implementations move raw strings; callers own serialization. Missing
/// keys read as `None` and removing one is not an error.
pub trait KeyValueStore {
    /// Read the value stored under a key
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value under a key, replacing any previous value
    fn put(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; idempotent
    fn remove(&mut self, key: &str) -> Result<()>;

    /// All stored keys, sorted
    fn keys(&self) -> Result<Vec<String>>;
}

/// Reject keys that cannot double as file names
///
/// Every backend enforces the same alphabet so stores stay swappable.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(PagerError::InvalidKey {
            key: key.to_string(),
            reason: "empty key".to_string(),
        });
    }

    if key.starts_with('.') {
        return Err(PagerError::InvalidKey {
            key: key.to_string(),
            reason: "leading dot".to_string(),
        });
    }

    if let Some(bad) = key
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && !matches!(c, '-' | '_' | '.'))
    {
        return Err(PagerError::InvalidKey {
            key: key.to_string(),
            reason: format!("disallowed character '{}'", bad),
        });
    }

    Ok(())
}
