//! A single recorded calculation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record of one completed evaluation.
///
/// Items are immutable once created. The persisted form is
/// `{"id", "expression", "result", "timestamp"}` with the timestamp in
/// epoch milliseconds.
///
/// # Example
///
/// ```rust
/// use educalc::history::HistoryItem;
/// use chrono::Utc;
///
/// let item = HistoryItem::new("7 + 3", "10", Utc::now());
/// assert_eq!(item.expression, "7 + 3");
/// assert!(!item.id.is_empty());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Unique, time-ordered identifier
    pub id: String,
    /// Formatted `"<previous> <op> <current>"`
    pub expression: String,
    /// Formatted result
    pub result: String,
    /// When the evaluation happened
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl HistoryItem {
    /// Create an item with a fresh UUIDv7 id.
    pub fn new(
        expression: impl Into<String>,
        result: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            expression: expression.into(),
            result: result.into(),
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn ids_are_unique() {
        let now = Utc::now();
        let a = HistoryItem::new("1 + 1", "2", now);
        let b = HistoryItem::new("1 + 1", "2", now);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn timestamp_serializes_as_epoch_millis() {
        let timestamp = Utc.timestamp_millis_opt(1_712_345_678_901).unwrap();
        let item = HistoryItem {
            id: "1712345678901".to_string(),
            expression: "7 + 3".to_string(),
            result: "10".to_string(),
            timestamp,
        };

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"timestamp\":1712345678901"));

        let deserialized: HistoryItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, deserialized);
    }

    #[test]
    fn reads_entries_written_with_millisecond_ids() {
        let json = r#"{"id":"1712345678901","expression":"1.000 × 2","result":"2.000","timestamp":1712345678901}"#;
        let item: HistoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "1712345678901");
        assert_eq!(item.result, "2.000");
        assert_eq!(item.timestamp.timestamp_millis(), 1_712_345_678_901);
    }
}
