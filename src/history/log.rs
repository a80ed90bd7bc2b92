//! Bounded, most-recent-first log of calculations.
//!
//! The log is immutable - every operation returns a new log, following
//! the same pure-core approach as the reducer.

use super::item::HistoryItem;

/// Number of entries kept when no other limit is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Ordered history of evaluations, newest first, capped at `limit` items.
///
/// # Example
///
/// ```rust
/// use educalc::history::{HistoryItem, HistoryLog};
/// use chrono::Utc;
///
/// let log = HistoryLog::new(2);
/// let log = log.record(HistoryItem::new("1 + 1", "2", Utc::now()));
/// let log = log.record(HistoryItem::new("2 + 2", "4", Utc::now()));
/// let log = log.record(HistoryItem::new("3 + 3", "6", Utc::now()));
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.latest().map(|i| i.result.as_str()), Some("6"));
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HistoryLog {
    items: Vec<HistoryItem>,
    limit: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl HistoryLog {
    /// Create an empty log.
    pub fn new(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            limit,
        }
    }

    /// Build a log from items already ordered newest first, dropping any
    /// beyond `limit`.
    pub fn from_items(mut items: Vec<HistoryItem>, limit: usize) -> Self {
        items.truncate(limit);
        Self { items, limit }
    }

    /// Insert an item at the head, returning a new log.
    ///
    /// The oldest items beyond the limit are discarded. The existing log
    /// is unchanged.
    pub fn record(&self, item: HistoryItem) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.push(item);
        items.extend(self.items.iter().cloned());
        Self::from_items(items, self.limit)
    }

    /// Remove the item with `id`. Unknown ids leave the log as is.
    pub fn delete(&self, id: &str) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|item| item.id != id)
                .cloned()
                .collect(),
            limit: self.limit,
        }
    }

    /// An empty log with the same limit.
    pub fn clear(&self) -> Self {
        Self::new(self.limit)
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&HistoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The most recent item.
    pub fn latest(&self) -> Option<&HistoryItem> {
        self.items.first()
    }

    /// All items, newest first.
    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
