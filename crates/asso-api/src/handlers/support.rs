//! Support info handlers

use axum::{
    extract::{Path, State},
    Json,
};
use asso_service::{SupportInfoResponse, SupportInfoService, UpdateSupportInfoRequest};
use uuid::Uuid;

use crate::extractors::{AdminAuth, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// List active support info entries
///
/// GET /support
pub async fn list_active(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<SupportInfoResponse>>> {
    let service = SupportInfoService::new(state.service_context());
    let entries = service.list_active().await?;
    Ok(Json(entries))
}

/// List all support info entries including inactive ones (admin)
///
/// GET /admin/support
pub async fn list_all(
    State(state): State<AppState>,
    _auth: AdminAuth,
) -> ApiResult<Json<Vec<SupportInfoResponse>>> {
    let service = SupportInfoService::new(state.service_context());
    let entries = service.list_all().await?;
    Ok(Json(entries))
}

/// Update a support info entry (admin)
///
/// PATCH /admin/support/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateSupportInfoRequest>,
) -> ApiResult<Json<SupportInfoResponse>> {
    let service = SupportInfoService::new(state.service_context());
    let entry = service.update(id, request).await?;
    Ok(Json(entry))
}
