//! Publication entity <-> model mapper

use asso_core::entities::Publication;
use asso_core::error::DomainError;
use asso_core::value_objects::Slug;

use crate::models::PublicationModel;

/// Convert PublicationModel to Publication entity.
///
/// Fails only if the stored slug does not satisfy the slug rules, which
/// would mean the row was written by something other than this backend.
impl TryFrom<PublicationModel> for Publication {
    type Error = DomainError;

    fn try_from(model: PublicationModel) -> Result<Self, Self::Error> {
        let slug: Slug = model
            .slug
            .parse()
            .map_err(|_| DomainError::ValidationError(format!("Corrupt slug: {}", model.slug)))?;

        Ok(Publication {
            id: model.id,
            slug,
            title: model.titre,
            summary: model.chapeau,
            content: model.contenu_long,
            published_at: model.date_publication,
            category_id: model.categorie_id,
            team_id: model.equipe_id,
            media_id: model.media_id,
            featured: model.featured,
            published: model.published,
            created_at: model.created_at,
            updated_at: model.updated_at,
            category_name: model.categorie_nom,
            team_name: model.equipe_nom,
            media_url: model.media_url,
            media_kind: model.media_type.and_then(|s| s.parse().ok()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_model() -> PublicationModel {
        let now = Utc::now();
        PublicationModel {
            id: Uuid::new_v4(),
            slug: "rapport-annuel-2025".to_string(),
            titre: "Rapport annuel 2025".to_string(),
            chapeau: "Résumé".to_string(),
            contenu_long: "Contenu".to_string(),
            date_publication: now,
            categorie_id: None,
            equipe_id: None,
            media_id: None,
            featured: false,
            published: true,
            created_at: now,
            updated_at: now,
            categorie_nom: Some("Actualités".to_string()),
            equipe_nom: None,
            media_url: Some("https://example.org/uploads/media/x.jpg".to_string()),
            media_type: Some("image".to_string()),
        }
    }

    #[test]
    fn test_model_to_entity() {
        let model = sample_model();
        let publication = Publication::try_from(model).unwrap();

        assert_eq!(publication.slug.as_str(), "rapport-annuel-2025");
        assert_eq!(publication.title, "Rapport annuel 2025");
        assert_eq!(publication.category_name.as_deref(), Some("Actualités"));
        assert_eq!(
            publication.media_kind,
            Some(asso_core::entities::MediaKind::Image)
        );
        assert!(publication.is_public());
    }

    #[test]
    fn test_corrupt_slug_rejected() {
        let mut model = sample_model();
        model.slug = "Not A Slug!".to_string();
        assert!(Publication::try_from(model).is_err());
    }
}
