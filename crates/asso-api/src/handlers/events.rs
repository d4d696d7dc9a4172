//! Event handlers
//!
//! Public listings default to every event; the status filter keeps
//! upcoming events in ascending date order and past events descending.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use asso_service::{CreateEventRequest, EventResponse, EventService, UpdateEventRequest};
use uuid::Uuid;

use crate::extractors::{AdminAuth, EventListParams, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List events, optionally filtered by status
///
/// GET /events?status=upcoming
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<EventListParams>,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let service = EventService::new(state.service_context());
    let events = service.list(params.status.as_deref()).await?;
    Ok(Json(events))
}

/// Get an event by id
///
/// GET /events/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<EventResponse>> {
    let service = EventService::new(state.service_context());
    let event = service.get(id).await?;
    Ok(Json(event))
}

/// List all events (admin)
///
/// GET /admin/events
pub async fn list_all(
    State(state): State<AppState>,
    _auth: AdminAuth,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let service = EventService::new(state.service_context());
    let events = service.list_all().await?;
    Ok(Json(events))
}

/// Create an event (admin)
///
/// POST /admin/events
pub async fn create(
    State(state): State<AppState>,
    _auth: AdminAuth,
    ValidatedJson(request): ValidatedJson<CreateEventRequest>,
) -> ApiResult<Created<Json<EventResponse>>> {
    let service = EventService::new(state.service_context());
    let event = service.create(request).await?;
    Ok(Created(Json(event)))
}

/// Update an event (admin)
///
/// PATCH /admin/events/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateEventRequest>,
) -> ApiResult<Json<EventResponse>> {
    let service = EventService::new(state.service_context());
    let event = service.update(id, request).await?;
    Ok(Json(event))
}

/// Delete an event (admin)
///
/// DELETE /admin/events/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path(id): Path<Uuid>,
) -> ApiResult<NoContent> {
    let service = EventService::new(state.service_context());
    service.delete(id).await?;
    Ok(NoContent)
}
