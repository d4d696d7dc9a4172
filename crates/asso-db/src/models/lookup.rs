//! Lookup table database models (categories, teams, event types)

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the categories table
#[derive(Debug, Clone, FromRow)]
pub struct CategoryModel {
    pub id: Uuid,
    pub nom: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for the teams table
#[derive(Debug, Clone, FromRow)]
pub struct TeamModel {
    pub id: Uuid,
    pub nom: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for the event_types table
#[derive(Debug, Clone, FromRow)]
pub struct EventTypeModel {
    pub id: Uuid,
    pub nom: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
