//! Media handlers
//!
//! Uploads arrive as multipart form data with a single `file` field.
//! Files are written to the object store sequentially, one per request.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use asso_service::{MediaResponse, MediaService, UploadedMediaResponse};
use uuid::Uuid;

use crate::extractors::AdminAuth;
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Fallback when the client sends no content type for the file part
const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// List all media, newest first (admin)
///
/// GET /admin/media
pub async fn list(
    State(state): State<AppState>,
    _auth: AdminAuth,
) -> ApiResult<Json<Vec<MediaResponse>>> {
    let service = MediaService::new(state.service_context());
    let media = service.list().await?;
    Ok(Json(media))
}

/// Upload a media file (admin)
///
/// POST /admin/media
pub async fn upload(
    State(state): State<AppState>,
    _auth: AdminAuth,
    mut multipart: Multipart,
) -> ApiResult<Created<Json<UploadedMediaResponse>>> {
    let max_bytes = u64::from(state.config().storage.max_file_size_mb) * 1024 * 1024;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid_query(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field
            .file_name()
            .map(ToString::to_string)
            .ok_or_else(|| ApiError::invalid_query("File part is missing a filename"))?;
        let mime_type = field
            .content_type()
            .map_or(DEFAULT_MIME_TYPE, |ct| ct)
            .to_string();

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        if bytes.len() as u64 > max_bytes {
            return Err(ApiError::PayloadTooLarge(format!(
                "File exceeds the {} MB limit",
                state.config().storage.max_file_size_mb
            )));
        }

        let service = MediaService::new(state.service_context());
        let uploaded = service.upload(&original_name, &mime_type, &bytes).await?;
        return Ok(Created(Json(uploaded)));
    }

    Err(ApiError::invalid_query("Missing 'file' field in form data"))
}

/// Delete a media row and its stored object (admin)
///
/// DELETE /admin/media/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path(id): Path<Uuid>,
) -> ApiResult<NoContent> {
    let service = MediaService::new(state.service_context());
    service.delete(id).await?;
    Ok(NoContent)
}
