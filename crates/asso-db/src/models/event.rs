//! Event database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the events table.
///
/// `statut` holds the legacy values `'a_venir'` and `'termine'`. The
/// `type_nom`, `media_url` and `media_type` columns are joined in by the
/// repository queries.
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: Uuid,
    pub titre: String,
    pub description_long: String,
    pub statut: String,
    pub date_debut: DateTime<Utc>,
    pub date_fin: Option<DateTime<Utc>>,
    pub heure: Option<String>,
    pub lieu: String,
    pub type_event_id: Option<Uuid>,
    pub keywords: Vec<String>,
    pub media_id: Option<Uuid>,
    pub participants_count: i32,
    pub max_participants: i32,
    pub prix: Option<String>,
    pub gratuit: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    // Joined columns
    pub type_nom: Option<String>,
    pub media_url: Option<String>,
    pub media_type: Option<String>,
}

impl EventModel {
    /// Check if the row carries the legacy upcoming marker
    #[inline]
    pub fn is_upcoming(&self) -> bool {
        self.statut == "a_venir"
    }
}
