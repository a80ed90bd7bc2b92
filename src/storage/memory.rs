//! In-process storage.

use super::{Storage, StorageError};
use std::collections::HashMap;

/// `Storage` backed by a `HashMap`. Nothing survives the process.
///
/// # Example
///
/// ```rust
/// use educalc::storage::{MemoryStorage, Storage};
///
/// let mut storage = MemoryStorage::new();
/// storage.set("key", "value").unwrap();
/// assert_eq!(storage.get("key").unwrap().as_deref(), Some("value"));
/// assert_eq!(storage.get("other").unwrap(), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one value.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self { values }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
