//! Participant database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the participants table.
///
/// The `event_titre`/`event_date_debut` columns are joined from the events
/// table by the admin list query; plain inserts never touch them.
#[derive(Debug, Clone, FromRow)]
pub struct ParticipantModel {
    pub id: Uuid,
    pub event_id: Uuid,
    pub nom: String,
    pub email: String,
    pub inscription_date: DateTime<Utc>,
    pub confirmed: bool,
    // Joined columns
    pub event_titre: Option<String>,
    pub event_date_debut: Option<DateTime<Utc>>,
}
