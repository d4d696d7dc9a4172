//! PostgreSQL implementation of PublicationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use asso_core::entities::Publication;
use asso_core::traits::{PublicationRepository, RepoResult};

use crate::models::PublicationModel;

use super::error::{map_db_error, map_unique_violation, publication_not_found};

/// Shared SELECT clause joining reference names and media onto each row
const SELECT_PUBLICATION: &str = r#"
    SELECT p.id, p.slug, p.titre, p.chapeau, p.contenu_long, p.date_publication,
           p.categorie_id, p.equipe_id, p.media_id, p.featured, p.published,
           p.created_at, p.updated_at,
           c.nom AS categorie_nom,
           e.nom AS equipe_nom,
           m.url AS media_url,
           m.type AS media_type
    FROM publications p
    LEFT JOIN categories c ON c.id = p.categorie_id
    LEFT JOIN teams e ON e.id = p.equipe_id
    LEFT JOIN media m ON m.id = p.media_id
"#;

/// PostgreSQL implementation of PublicationRepository
#[derive(Clone)]
pub struct PgPublicationRepository {
    pool: PgPool,
}

impl PgPublicationRepository {
    /// Create a new PgPublicationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn collect(models: Vec<PublicationModel>) -> RepoResult<Vec<Publication>> {
    models.into_iter().map(Publication::try_from).collect()
}

#[async_trait]
impl PublicationRepository for PgPublicationRepository {
    #[instrument(skip(self))]
    async fn list_published(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> RepoResult<Vec<Publication>> {
        let models = if let Some(limit) = limit {
            sqlx::query_as::<_, PublicationModel>(&format!(
                "{SELECT_PUBLICATION} WHERE p.published = TRUE \
                 ORDER BY p.date_publication DESC LIMIT $1 OFFSET $2"
            ))
            .bind(limit)
            .bind(offset.unwrap_or(0))
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, PublicationModel>(&format!(
                "{SELECT_PUBLICATION} WHERE p.published = TRUE \
                 ORDER BY p.date_publication DESC"
            ))
            .fetch_all(&self.pool)
            .await
        }
        .map_err(map_db_error)?;

        collect(models)
    }

    #[instrument(skip(self))]
    async fn find_published_by_slug(&self, slug: &str) -> RepoResult<Option<Publication>> {
        let model = sqlx::query_as::<_, PublicationModel>(&format!(
            "{SELECT_PUBLICATION} WHERE p.slug = $1 AND p.published = TRUE"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(Publication::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_featured(&self) -> RepoResult<Vec<Publication>> {
        let models = sqlx::query_as::<_, PublicationModel>(&format!(
            "{SELECT_PUBLICATION} WHERE p.published = TRUE AND p.featured = TRUE \
             ORDER BY p.date_publication DESC LIMIT 3"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        collect(models)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Publication>> {
        let models = sqlx::query_as::<_, PublicationModel>(&format!(
            "{SELECT_PUBLICATION} ORDER BY p.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        collect(models)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Publication>> {
        let model = sqlx::query_as::<_, PublicationModel>(&format!(
            "{SELECT_PUBLICATION} WHERE p.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(Publication::try_from).transpose()
    }

    #[instrument(skip(self, publication))]
    async fn create(&self, publication: &Publication) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO publications
                (id, slug, titre, chapeau, contenu_long, date_publication,
                 categorie_id, equipe_id, media_id, featured, published,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(publication.id)
        .bind(publication.slug.as_str())
        .bind(&publication.title)
        .bind(&publication.summary)
        .bind(&publication.content)
        .bind(publication.published_at)
        .bind(publication.category_id)
        .bind(publication.team_id)
        .bind(publication.media_id)
        .bind(publication.featured)
        .bind(publication.published)
        .bind(publication.created_at)
        .bind(publication.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                asso_core::DomainError::SlugTaken(publication.slug.as_str().to_string())
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self, publication))]
    async fn update(&self, publication: &Publication) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE publications
            SET slug = $2, titre = $3, chapeau = $4, contenu_long = $5,
                date_publication = $6, categorie_id = $7, equipe_id = $8,
                media_id = $9, featured = $10, published = $11, updated_at = $12
            WHERE id = $1
            "#,
        )
        .bind(publication.id)
        .bind(publication.slug.as_str())
        .bind(&publication.title)
        .bind(&publication.summary)
        .bind(&publication.content)
        .bind(publication.published_at)
        .bind(publication.category_id)
        .bind(publication.team_id)
        .bind(publication.media_id)
        .bind(publication.featured)
        .bind(publication.published)
        .bind(publication.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                asso_core::DomainError::SlugTaken(publication.slug.as_str().to_string())
            })
        })?;

        if result.rows_affected() == 0 {
            return Err(publication_not_found(publication.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM publications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(publication_not_found(id));
        }

        Ok(())
    }
}
