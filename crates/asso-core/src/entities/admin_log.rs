//! Admin log entity - an append-only record of an admin action

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

/// Admin log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminLogEntry {
    pub id: Uuid,
    pub action: String,
    pub details: Option<Value>,
    pub created_at: DateTime<Utc>,
}

impl AdminLogEntry {
    /// Create a new log entry for an admin action
    pub fn new(action: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            id: Uuid::new_v4(),
            action: action.into(),
            details,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_carries_detail_payload() {
        let entry = AdminLogEntry::new("CREATE_PUBLICATION", Some(json!({"titre": "Rapport"})));
        assert_eq!(entry.action, "CREATE_PUBLICATION");
        assert_eq!(entry.details.unwrap()["titre"], "Rapport");
    }
}
