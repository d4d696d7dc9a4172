//! Media database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the media table.
///
/// `type` is a reserved word, so the column is selected with an alias.
#[derive(Debug, Clone, FromRow)]
pub struct MediaModel {
    pub id: Uuid,
    pub nom_fichier: String,
    pub url: String,
    pub type_media: String,
    pub taille: Option<i64>,
    pub mime_type: Option<String>,
    pub uploaded_by: String,
    pub created_at: DateTime<Utc>,
}
