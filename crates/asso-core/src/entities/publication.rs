//! Publication entity - a news/article content item shown on the public site

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::Slug;

use super::media::MediaKind;

/// Publication entity
///
/// The reference-name fields (`category_name`, `team_name`, `media_url`,
/// `media_kind`) are populated by list/detail queries that join the lookup
/// tables; they are `None` on freshly constructed instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    pub id: Uuid,
    pub slug: Slug,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub published_at: DateTime<Utc>,
    pub category_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub media_id: Option<Uuid>,
    pub featured: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    // Joined reference names (read-only)
    pub category_name: Option<String>,
    pub team_name: Option<String>,
    pub media_url: Option<String>,
    pub media_kind: Option<MediaKind>,
}

impl Publication {
    /// Create a new unpublished Publication with a slug derived from the title
    pub fn new(id: Uuid, title: String, summary: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            slug: Slug::from_title(&title),
            title,
            summary,
            content,
            published_at: now,
            category_id: None,
            team_id: None,
            media_id: None,
            featured: false,
            published: false,
            created_at: now,
            updated_at: now,
            category_name: None,
            team_name: None,
            media_url: None,
            media_kind: None,
        }
    }

    /// Check whether the publication is visible on the public site
    #[inline]
    pub fn is_public(&self) -> bool {
        self.published
    }

    /// Update the title, regenerating the slug
    pub fn set_title(&mut self, title: String) {
        self.slug = Slug::from_title(&title);
        self.title = title;
        self.updated_at = Utc::now();
    }

    /// Toggle the published flag
    pub fn set_published(&mut self, published: bool) {
        self.published = published;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_publication_is_unpublished() {
        let publication = Publication::new(
            Uuid::new_v4(),
            "Rapport annuel".to_string(),
            "Résumé".to_string(),
            "Contenu".to_string(),
        );
        assert!(!publication.is_public());
        assert!(!publication.featured);
        assert_eq!(publication.slug.as_str(), "rapport-annuel");
    }

    #[test]
    fn test_set_title_regenerates_slug() {
        let mut publication = Publication::new(
            Uuid::new_v4(),
            "Ancien titre".to_string(),
            String::new(),
            String::new(),
        );
        publication.set_title("Nouveau titre 2025".to_string());
        assert_eq!(publication.slug.as_str(), "nouveau-titre-2025");
    }
}
