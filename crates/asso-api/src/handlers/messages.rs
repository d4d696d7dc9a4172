//! Contact message handlers

use axum::{
    extract::{Path, State},
    Json,
};
use asso_service::{ContactMessageRequest, ContactMessageResponse, ContactMessageService};
use uuid::Uuid;

use crate::extractors::{AdminAuth, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Submit a contact message
///
/// POST /messages
pub async fn submit(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ContactMessageRequest>,
) -> ApiResult<Created<Json<ContactMessageResponse>>> {
    let service = ContactMessageService::new(state.service_context());
    let message = service.submit(request).await?;
    Ok(Created(Json(message)))
}

/// List all contact messages, newest first (admin)
///
/// GET /admin/messages
pub async fn list(
    State(state): State<AppState>,
    _auth: AdminAuth,
) -> ApiResult<Json<Vec<ContactMessageResponse>>> {
    let service = ContactMessageService::new(state.service_context());
    let messages = service.list().await?;
    Ok(Json(messages))
}

/// Mark a contact message as read (admin)
///
/// POST /admin/messages/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path(id): Path<Uuid>,
) -> ApiResult<NoContent> {
    let service = ContactMessageService::new(state.service_context());
    service.mark_read(id).await?;
    Ok(NoContent)
}
