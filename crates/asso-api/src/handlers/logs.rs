//! Admin action log handlers

use axum::{extract::State, Json};
use asso_service::{AdminLogResponse, AdminLogService};

use crate::extractors::AdminAuth;
use crate::response::ApiResult;
use crate::state::AppState;

/// List the most recent admin actions (admin)
///
/// GET /admin/logs
pub async fn list(
    State(state): State<AppState>,
    _auth: AdminAuth,
) -> ApiResult<Json<Vec<AdminLogResponse>>> {
    let service = AdminLogService::new(state.service_context());
    let entries = service.list_recent().await?;
    Ok(Json(entries))
}
