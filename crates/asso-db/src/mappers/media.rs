//! Media entity <-> model mapper

use asso_core::entities::Media;
use asso_core::error::DomainError;

use crate::models::MediaModel;

/// Convert MediaModel to Media entity
impl TryFrom<MediaModel> for Media {
    type Error = DomainError;

    fn try_from(model: MediaModel) -> Result<Self, Self::Error> {
        Ok(Media {
            id: model.id,
            file_name: model.nom_fichier,
            url: model.url,
            kind: model.type_media.parse()?,
            size_bytes: model.taille,
            mime_type: model.mime_type,
            uploaded_by: model.uploaded_by,
            created_at: model.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asso_core::entities::MediaKind;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_model_to_entity() {
        let model = MediaModel {
            id: Uuid::new_v4(),
            nom_fichier: "affiche.pdf".to_string(),
            url: "https://example.org/uploads/media/123-abc.pdf".to_string(),
            type_media: "document".to_string(),
            taille: Some(2048),
            mime_type: Some("application/pdf".to_string()),
            uploaded_by: "admin".to_string(),
            created_at: Utc::now(),
        };

        let media = Media::try_from(model).unwrap();
        assert_eq!(media.kind, MediaKind::Document);
        assert_eq!(media.object_path().as_deref(), Some("media/123-abc.pdf"));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let model = MediaModel {
            id: Uuid::new_v4(),
            nom_fichier: "x".to_string(),
            url: "https://example.org/a/b".to_string(),
            type_media: "archive".to_string(),
            taille: None,
            mime_type: None,
            uploaded_by: "admin".to_string(),
            created_at: Utc::now(),
        };

        assert!(matches!(
            Media::try_from(model),
            Err(DomainError::UnknownMediaKind(_))
        ));
    }
}
