//! Registration service
//!
//! Handles event registrations. A registration is a single pending insert;
//! the event's stored participant counter is never touched and capacity is
//! not checked, matching how the site has always behaved.

use tracing::{info, instrument};
use uuid::Uuid;

use asso_core::entities::Participant;

use crate::dto::{ParticipantResponse, RegisterParticipantRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Registration service
pub struct RegistrationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RegistrationService<'a> {
    /// Create a new RegistrationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a participant for an event
    #[instrument(skip(self, request))]
    pub async fn register(
        &self,
        event_id: Uuid,
        request: RegisterParticipantRequest,
    ) -> ServiceResult<ParticipantResponse> {
        // The event must exist; everything else about it (capacity, status)
        // is deliberately not checked
        let event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Event", event_id.to_string()))?;

        let participant =
            Participant::new(Uuid::new_v4(), event_id, request.name, request.email);
        self.ctx.participant_repo().create(&participant).await?;

        info!(participant_id = %participant.id, event_id = %event_id, "Registration recorded");

        // Confirmation email is a stub; the address and event are logged so
        // the send can be replayed once a mailer exists
        info!(
            email = %participant.email,
            event_title = %event.title,
            "Would send registration confirmation email"
        );

        Ok(ParticipantResponse::from(&participant))
    }

    /// List registrations, optionally for a single event (admin)
    #[instrument(skip(self))]
    pub async fn list(&self, event_id: Option<Uuid>) -> ServiceResult<Vec<ParticipantResponse>> {
        let participants = self.ctx.participant_repo().list(event_id).await?;
        Ok(participants.iter().map(ParticipantResponse::from).collect())
    }
}
