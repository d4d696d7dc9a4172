//! PostgreSQL implementation of MediaRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use asso_core::entities::Media;
use asso_core::traits::{MediaRepository, RepoResult};

use crate::models::MediaModel;

use super::error::{map_db_error, media_not_found};

/// Shared SELECT clause; `type` is aliased because it is a reserved word
const SELECT_MEDIA: &str = r#"
    SELECT id, nom_fichier, url, type AS type_media, taille, mime_type,
           uploaded_by, created_at
    FROM media
"#;

/// PostgreSQL implementation of MediaRepository
#[derive(Clone)]
pub struct PgMediaRepository {
    pool: PgPool,
}

impl PgMediaRepository {
    /// Create a new PgMediaRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MediaRepository for PgMediaRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Media>> {
        let models = sqlx::query_as::<_, MediaModel>(&format!(
            "{SELECT_MEDIA} ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(Media::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Media>> {
        let model = sqlx::query_as::<_, MediaModel>(&format!("{SELECT_MEDIA} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        model.map(Media::try_from).transpose()
    }

    #[instrument(skip(self, media))]
    async fn create(&self, media: &Media) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO media
                (id, nom_fichier, url, type, taille, mime_type, uploaded_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(media.id)
        .bind(&media.file_name)
        .bind(&media.url)
        .bind(media.kind.as_str())
        .bind(media.size_bytes)
        .bind(&media.mime_type)
        .bind(&media.uploaded_by)
        .bind(media.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM media WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(media_not_found(id));
        }

        Ok(())
    }
}
