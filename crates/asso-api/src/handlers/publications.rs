//! Publication handlers
//!
//! Public listing endpoints only expose published publications; the
//! admin endpoints see everything.

use axum::{
    extract::{Path, State},
    Json,
};
use asso_service::{
    CreatePublicationRequest, PublicationResponse, PublicationService, UpdatePublicationRequest,
};
use uuid::Uuid;

use crate::extractors::{AdminAuth, ListWindow, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List published publications, newest first
///
/// GET /publications
pub async fn list(
    State(state): State<AppState>,
    window: ListWindow,
) -> ApiResult<Json<Vec<PublicationResponse>>> {
    let service = PublicationService::new(state.service_context());
    let publications = service.list_published(window.limit, window.offset).await?;
    Ok(Json(publications))
}

/// List featured publications (at most three)
///
/// GET /publications/featured
pub async fn list_featured(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PublicationResponse>>> {
    let service = PublicationService::new(state.service_context());
    let publications = service.list_featured().await?;
    Ok(Json(publications))
}

/// Get a published publication by slug
///
/// GET /publications/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<PublicationResponse>> {
    let service = PublicationService::new(state.service_context());
    let publication = service.get_published_by_slug(&slug).await?;
    Ok(Json(publication))
}

/// List all publications including drafts (admin)
///
/// GET /admin/publications
pub async fn list_all(
    State(state): State<AppState>,
    _auth: AdminAuth,
) -> ApiResult<Json<Vec<PublicationResponse>>> {
    let service = PublicationService::new(state.service_context());
    let publications = service.list_all().await?;
    Ok(Json(publications))
}

/// Create a publication (admin)
///
/// POST /admin/publications
pub async fn create(
    State(state): State<AppState>,
    _auth: AdminAuth,
    ValidatedJson(request): ValidatedJson<CreatePublicationRequest>,
) -> ApiResult<Created<Json<PublicationResponse>>> {
    let service = PublicationService::new(state.service_context());
    let publication = service.create(request).await?;
    Ok(Created(Json(publication)))
}

/// Update a publication (admin)
///
/// PATCH /admin/publications/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdatePublicationRequest>,
) -> ApiResult<Json<PublicationResponse>> {
    let service = PublicationService::new(state.service_context());
    let publication = service.update(id, request).await?;
    Ok(Json(publication))
}

/// Delete a publication (admin)
///
/// DELETE /admin/publications/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path(id): Path<Uuid>,
) -> ApiResult<NoContent> {
    let service = PublicationService::new(state.service_context());
    service.delete(id).await?;
    Ok(NoContent)
}
