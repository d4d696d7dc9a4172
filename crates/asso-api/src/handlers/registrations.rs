//! Event registration handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use asso_service::{ParticipantResponse, RegisterParticipantRequest, RegistrationService};
use uuid::Uuid;

use crate::extractors::{AdminAuth, RegistrationListParams, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a participant for an event
///
/// POST /events/{event_id}/registrations
pub async fn register(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<RegisterParticipantRequest>,
) -> ApiResult<Created<Json<ParticipantResponse>>> {
    let service = RegistrationService::new(state.service_context());
    let participant = service.register(event_id, request).await?;
    Ok(Created(Json(participant)))
}

/// List registrations, optionally for a single event (admin)
///
/// GET /admin/registrations?event_id={id}
pub async fn list(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Query(params): Query<RegistrationListParams>,
) -> ApiResult<Json<Vec<ParticipantResponse>>> {
    let service = RegistrationService::new(state.service_context());
    let participants = service.list(params.event_id).await?;
    Ok(Json(participants))
}
