//! Publication service
//!
//! Public reads carry the published filter; admin operations see everything
//! and record their actions in the admin log.

use chrono::Utc;
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use asso_core::entities::Publication;

use crate::dto::{CreatePublicationRequest, PublicationResponse, UpdatePublicationRequest};

use super::admin_log::AdminLogService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Publication service
pub struct PublicationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PublicationService<'a> {
    /// Create a new PublicationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // === Public reads ===

    /// List published publications, newest publication date first
    #[instrument(skip(self))]
    pub async fn list_published(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> ServiceResult<Vec<PublicationResponse>> {
        let publications = self
            .ctx
            .publication_repo()
            .list_published(limit, offset)
            .await?;
        Ok(publications.iter().map(PublicationResponse::from).collect())
    }

    /// Get a published publication by slug
    #[instrument(skip(self))]
    pub async fn get_published_by_slug(&self, slug: &str) -> ServiceResult<PublicationResponse> {
        let publication = self
            .ctx
            .publication_repo()
            .find_published_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Publication", slug))?;
        Ok(PublicationResponse::from(publication))
    }

    /// List published featured publications (at most 3)
    #[instrument(skip(self))]
    pub async fn list_featured(&self) -> ServiceResult<Vec<PublicationResponse>> {
        let publications = self.ctx.publication_repo().list_featured().await?;
        Ok(publications.iter().map(PublicationResponse::from).collect())
    }

    // === Admin operations ===

    /// List every publication regardless of flags
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<PublicationResponse>> {
        let publications = self.ctx.publication_repo().list_all().await?;
        Ok(publications.iter().map(PublicationResponse::from).collect())
    }

    /// Create a new publication
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        request: CreatePublicationRequest,
    ) -> ServiceResult<PublicationResponse> {
        let mut publication = Publication::new(
            Uuid::new_v4(),
            request.title,
            request.summary,
            request.content,
        );
        publication.published_at = request.published_at.unwrap_or_else(Utc::now);
        publication.category_id = request.category_id;
        publication.team_id = request.team_id;
        publication.media_id = request.media_id;
        publication.featured = request.featured;
        publication.published = request.published;

        if publication.slug.as_str().is_empty() {
            return Err(ServiceError::validation("Title produces an empty slug"));
        }

        self.ctx.publication_repo().create(&publication).await?;

        info!(publication_id = %publication.id, slug = %publication.slug.as_str(), "Publication created");

        AdminLogService::new(self.ctx)
            .record(
                "publication.create",
                Some(json!({ "id": publication.id, "slug": publication.slug.as_str() })),
            )
            .await;

        Ok(PublicationResponse::from(&publication))
    }

    /// Update an existing publication; changing the title regenerates the slug
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdatePublicationRequest,
    ) -> ServiceResult<PublicationResponse> {
        let mut publication = self
            .ctx
            .publication_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Publication", id.to_string()))?;

        if let Some(title) = request.title {
            publication.set_title(title);
        }
        if let Some(summary) = request.summary {
            publication.summary = summary;
        }
        if let Some(content) = request.content {
            publication.content = content;
        }
        if let Some(published_at) = request.published_at {
            publication.published_at = published_at;
        }
        if let Some(category_id) = request.category_id {
            publication.category_id = category_id;
        }
        if let Some(team_id) = request.team_id {
            publication.team_id = team_id;
        }
        if let Some(media_id) = request.media_id {
            publication.media_id = media_id;
        }
        if let Some(featured) = request.featured {
            publication.featured = featured;
        }
        if let Some(published) = request.published {
            publication.set_published(published);
        }
        publication.updated_at = Utc::now();

        self.ctx.publication_repo().update(&publication).await?;

        info!(publication_id = %id, "Publication updated");

        AdminLogService::new(self.ctx)
            .record(
                "publication.update",
                Some(json!({ "id": id, "slug": publication.slug.as_str() })),
            )
            .await;

        Ok(PublicationResponse::from(&publication))
    }

    /// Delete a publication
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.publication_repo().delete(id).await?;

        info!(publication_id = %id, "Publication deleted");

        AdminLogService::new(self.ctx)
            .record("publication.delete", Some(json!({ "id": id })))
            .await;

        Ok(())
    }
}
