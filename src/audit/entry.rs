//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::StoreKind;

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the record was appended (UTC)
    pub timestamp: DateTime<Utc>,

    /// Store the record was appended to
    pub store: StoreKind,

    /// Transfer code, deposit signature, or IBAN of a balance snapshot
    pub record_id: String,

    /// JSON representation of the appended record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create an entry for a record appended to `store`
    ///
    /// A record that cannot be represented as JSON is left out of the entry.
    pub fn append<T: Serialize>(store: StoreKind, record_id: impl Into<String>, record: &T) -> Self {
        let record_id = record_id.into();
        let record = match serde_json::to_value(record) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(
                    store = %store,
                    record_id = %record_id,
                    error = %e,
                    "audit record could not be serialized"
                );
                None
            }
        };

        Self {
            timestamp: Utc::now(),
            store,
            record_id,
            record,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] APPEND {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.store,
            self.record_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_append_entry() {
        let data = json!({"IBAN": "ES9121000418450200051332", "BALANCE": 30.0});
        let entry = AuditEntry::append(StoreKind::Balances, "ES9121000418450200051332", &data);

        assert_eq!(entry.store, StoreKind::Balances);
        assert_eq!(entry.record_id, "ES9121000418450200051332");
        assert_eq!(entry.record, Some(data));
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::append(StoreKind::Deposits, "abc123", &json!({"n": 1}));

        let text = serde_json::to_string(&entry).unwrap();
        assert!(text.contains("\"store\":\"deposits\""));

        let deserialized: AuditEntry = serde_json::from_str(&text).unwrap();
        assert_eq!(deserialized.store, StoreKind::Deposits);
        assert_eq!(deserialized.record_id, "abc123");
    }

    #[test]
    fn test_human_readable_format() {
        let mut entry = AuditEntry::append(StoreKind::Transfers, "f00d", &json!({}));
        entry.timestamp = Utc.with_ymd_and_hms(2026, 3, 15, 9, 30, 0).unwrap();

        assert_eq!(
            entry.format_human_readable(),
            "[2026-03-15 09:30:00 UTC] APPEND transfers f00d"
        );
    }

    #[test]
    fn test_unserializable_record_is_omitted() {
        let mut record = std::collections::HashMap::new();
        record.insert((1, 2), "tuple keys are not JSON object keys");

        let entry = AuditEntry::append(StoreKind::Deposits, "sig", &record);

        assert!(entry.record.is_none());
        assert_eq!(entry.record_id, "sig");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("\"record\""));
    }
}
