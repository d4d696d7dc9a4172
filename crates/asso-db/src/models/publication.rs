//! Publication database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the publications table.
///
/// The `categorie_nom`, `equipe_nom`, `media_url` and `media_type` columns
/// come from LEFT JOINs against the lookup and media tables; every query in
/// the repository selects them so lists render without extra round trips.
#[derive(Debug, Clone, FromRow)]
pub struct PublicationModel {
    pub id: Uuid,
    pub slug: String,
    pub titre: String,
    pub chapeau: String,
    pub contenu_long: String,
    pub date_publication: DateTime<Utc>,
    pub categorie_id: Option<Uuid>,
    pub equipe_id: Option<Uuid>,
    pub media_id: Option<Uuid>,
    pub featured: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    // Joined columns
    pub categorie_nom: Option<String>,
    pub equipe_nom: Option<String>,
    pub media_url: Option<String>,
    pub media_type: Option<String>,
}

impl PublicationModel {
    /// Check if this row is visible on the public site
    #[inline]
    pub fn is_public(&self) -> bool {
        self.published
    }
}
