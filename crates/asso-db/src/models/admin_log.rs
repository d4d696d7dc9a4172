//! Admin log database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the append-only admin_logs table
#[derive(Debug, Clone, FromRow)]
pub struct AdminLogModel {
    pub id: Uuid,
    pub action: String,
    pub details: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}
