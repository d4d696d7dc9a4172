//! Media service
//!
//! Uploads store the object first and then insert the metadata row; deletes
//! remove the metadata row after a best-effort object removal, mirroring how
//! the public URL is the source of truth for the object path.

use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use asso_core::entities::{generate_object_name, Media};

use crate::dto::{MediaResponse, UploadedMediaResponse};

use super::admin_log::AdminLogService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Objects live under this prefix in the store
const OBJECT_PREFIX: &str = "media";

/// Media service
pub struct MediaService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MediaService<'a> {
    /// Create a new MediaService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all media metadata rows, newest first
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<MediaResponse>> {
        let media = self.ctx.media_repo().list().await?;
        Ok(media.iter().map(MediaResponse::from).collect())
    }

    /// Store an uploaded file and insert its metadata row
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload(
        &self,
        original_name: &str,
        mime_type: &str,
        bytes: &[u8],
    ) -> ServiceResult<UploadedMediaResponse> {
        if bytes.is_empty() {
            return Err(ServiceError::validation("Uploaded file is empty"));
        }

        let object_name = generate_object_name(original_name);
        let path = format!("{OBJECT_PREFIX}/{object_name}");

        self.ctx.object_store().put(&path, bytes).await?;
        let url = self.ctx.object_store().public_url(&path);

        let media = Media::new(
            Uuid::new_v4(),
            original_name.to_string(),
            url,
            mime_type.to_string(),
            bytes.len() as i64,
        );
        self.ctx.media_repo().create(&media).await?;

        info!(media_id = %media.id, path, "Media uploaded");

        AdminLogService::new(self.ctx)
            .record(
                "media.upload",
                Some(json!({ "id": media.id, "file_name": media.file_name })),
            )
            .await;

        Ok(UploadedMediaResponse {
            media: MediaResponse::from(&media),
            original_name: original_name.to_string(),
        })
    }

    /// Delete a media row, removing the stored object best-effort first
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        let media = self
            .ctx
            .media_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Media", id.to_string()))?;

        // The object path is derived from the stored URL; if it cannot be
        // derived or removal fails, the row is deleted anyway
        if let Some(path) = media.object_path() {
            if let Err(e) = self.ctx.object_store().remove(&path).await {
                warn!(media_id = %id, path, error = %e, "Failed to remove stored object");
            }
        } else {
            warn!(media_id = %id, url = %media.url, "Could not derive object path from URL");
        }

        self.ctx.media_repo().delete(id).await?;

        info!(media_id = %id, "Media deleted");

        AdminLogService::new(self.ctx)
            .record("media.delete", Some(json!({ "id": id })))
            .await;

        Ok(())
    }
}
