//! Persistent history repository.
//!
//! `HistoryStore` is the imperative shell around [`HistoryLog`]: it loads
//! the log from a [`Storage`] at startup and writes it back after every
//! change. Persistence failures never reach the caller; the log in memory
//! stays authoritative and the failure is logged.

use crate::config::HistoryConfig;
use crate::history::{HistoryItem, HistoryLog};
use crate::storage::Storage;
use tracing::{debug, warn};

/// History log bound to a storage key.
#[derive(Debug)]
pub struct HistoryStore<S: Storage> {
    storage: S,
    key: String,
    log: HistoryLog,
}

impl<S: Storage> HistoryStore<S> {
    /// Load the log stored under `config.storage_key`.
    ///
    /// A missing value, a read failure, or unparsable data all give an
    /// empty log. Entries beyond `config.limit` are dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use educalc::config::HistoryConfig;
    /// use educalc::storage::MemoryStorage;
    /// use educalc::store::HistoryStore;
    ///
    /// let storage = MemoryStorage::with_value("eduCalcHistory", "not json");
    /// let store = HistoryStore::load(storage, &HistoryConfig::default());
    /// assert!(store.log().is_empty());
    /// ```
    pub fn load(storage: S, config: &HistoryConfig) -> Self {
        let key = config.storage_key.clone();
        let items = match storage.get(&key) {
            Ok(Some(json)) => serde_json::from_str::<Vec<HistoryItem>>(&json).unwrap_or_else(|e| {
                warn!(key = %key, error = %e, "discarding unreadable history");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key = %key, error = %e, "history storage unavailable");
                Vec::new()
            }
        };

        let log = HistoryLog::from_items(items, config.limit);
        debug!(key = %key, entries = log.len(), "history loaded");
        Self { storage, key, log }
    }

    /// Current log, newest first.
    pub fn log(&self) -> &HistoryLog {
        &self.log
    }

    /// Insert `item` at the head and persist.
    pub fn record(&mut self, item: HistoryItem) {
        debug!(id = %item.id, expression = %item.expression, result = %item.result, "history entry recorded");
        self.replace(self.log.record(item));
    }

    /// Remove the entry with `id` and persist. Unknown ids change nothing.
    pub fn delete(&mut self, id: &str) {
        if self.log.get(id).is_none() {
            return;
        }
        self.replace(self.log.delete(id));
    }

    /// Remove every entry and persist.
    pub fn clear(&mut self) {
        self.replace(self.log.clear());
    }

    /// Storage backing this store.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn replace(&mut self, log: HistoryLog) {
        self.log = log;
        self.persist();
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(self.log.items()) {
            Ok(json) => json,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to serialize history");
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.key, &json) {
            warn!(key = %self.key, error = %e, "failed to persist history");
        }
    }
}
