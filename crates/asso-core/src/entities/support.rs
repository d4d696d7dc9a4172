//! Support info entity - a donation/support channel shown on the support page

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

/// Support info entity
///
/// `details` is a free-form JSON payload whose shape depends on `kind`
/// (bank transfer coordinates, mobile money numbers, postal address, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportInfo {
    pub id: Uuid,
    pub kind: String,
    pub name: String,
    pub details: Value,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SupportInfo {
    /// Create a new active SupportInfo entry
    pub fn new(id: Uuid, kind: String, name: String, details: Value) -> Self {
        let now = Utc::now();
        Self {
            id,
            kind,
            name,
            details,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
