//! Event service

use chrono::Utc;
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use asso_core::entities::{Event, EventStatus};

use crate::dto::{CreateEventRequest, EventResponse, UpdateEventRequest};

use super::admin_log::AdminLogService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // === Public reads ===

    /// List events, optionally filtered by status ("upcoming" or "past")
    #[instrument(skip(self))]
    pub async fn list(&self, status: Option<&str>) -> ServiceResult<Vec<EventResponse>> {
        let status = status
            .map(str::parse::<EventStatus>)
            .transpose()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let events = self.ctx.event_repo().list(status).await?;
        Ok(events.iter().map(EventResponse::from).collect())
    }

    /// Get an event by id
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ServiceResult<EventResponse> {
        let event = self
            .ctx
            .event_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Event", id.to_string()))?;
        Ok(EventResponse::from(event))
    }

    // === Admin operations ===

    /// List every event, newest created first
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<EventResponse>> {
        let events = self.ctx.event_repo().list_all().await?;
        Ok(events.iter().map(EventResponse::from).collect())
    }

    /// Create a new event
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateEventRequest) -> ServiceResult<EventResponse> {
        let mut event = Event::new(
            Uuid::new_v4(),
            request.title,
            request.description,
            request.date,
            request.location,
        );
        event.end_date = request.end_date;
        event.time = request.time;
        event.type_id = request.type_id;
        event.set_keywords(request.keywords)?;
        event.media_id = request.media_id;
        event.max_participants = request.max_participants;
        event.price = request.price;
        event.is_free = request.is_free;

        self.ctx.event_repo().create(&event).await?;

        info!(event_id = %event.id, "Event created");

        AdminLogService::new(self.ctx)
            .record(
                "event.create",
                Some(json!({ "id": event.id, "title": event.title })),
            )
            .await;

        Ok(EventResponse::from(&event))
    }

    /// Update an existing event
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: Uuid, request: UpdateEventRequest) -> ServiceResult<EventResponse> {
        let mut event = self
            .ctx
            .event_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Event", id.to_string()))?;

        if let Some(title) = request.title {
            event.title = title;
        }
        if let Some(description) = request.description {
            event.description = description;
        }
        if let Some(status) = request.status {
            event.status = status
                .parse()
                .map_err(|e: asso_core::DomainError| ServiceError::validation(e.to_string()))?;
        }
        if let Some(date) = request.date {
            event.date = date;
        }
        if let Some(end_date) = request.end_date {
            event.end_date = end_date;
        }
        if let Some(time) = request.time {
            event.time = time;
        }
        if let Some(location) = request.location {
            event.location = location;
        }
        if let Some(type_id) = request.type_id {
            event.type_id = type_id;
        }
        if let Some(keywords) = request.keywords {
            event.set_keywords(keywords)?;
        }
        if let Some(media_id) = request.media_id {
            event.media_id = media_id;
        }
        if let Some(max_participants) = request.max_participants {
            event.max_participants = max_participants;
        }
        if let Some(price) = request.price {
            event.price = price;
        }
        if let Some(is_free) = request.is_free {
            event.is_free = is_free;
        }
        event.updated_at = Utc::now();

        self.ctx.event_repo().update(&event).await?;

        info!(event_id = %id, "Event updated");

        AdminLogService::new(self.ctx)
            .record("event.update", Some(json!({ "id": id })))
            .await;

        Ok(EventResponse::from(&event))
    }

    /// Delete an event
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.event_repo().delete(id).await?;

        info!(event_id = %id, "Event deleted");

        AdminLogService::new(self.ctx)
            .record("event.delete", Some(json!({ "id": id })))
            .await;

        Ok(())
    }
}
