//! Support info database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the support_info table.
///
/// `type` is a reserved word, so the column is selected with an alias.
/// `details` is free-form JSON whose shape depends on the entry kind
/// (bank coordinates, contact hours, ...).
#[derive(Debug, Clone, FromRow)]
pub struct SupportInfoModel {
    pub id: Uuid,
    pub type_info: String,
    pub nom: String,
    pub details: serde_json::Value,
    pub actif: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
