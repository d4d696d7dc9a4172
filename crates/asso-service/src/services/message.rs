//! Contact message service

use tracing::{info, instrument};
use uuid::Uuid;

use asso_core::entities::{ContactMessage, HelpType};

use crate::dto::{ContactMessageRequest, ContactMessageResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Contact message service
pub struct ContactMessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContactMessageService<'a> {
    /// Create a new ContactMessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a contact form submission (exactly one insert)
    #[instrument(skip(self, request))]
    pub async fn submit(
        &self,
        request: ContactMessageRequest,
    ) -> ServiceResult<ContactMessageResponse> {
        let help_type: HelpType = request
            .help_type
            .parse()
            .map_err(|e: asso_core::DomainError| ServiceError::validation(e.to_string()))?;

        let mut message = ContactMessage::new(
            Uuid::new_v4(),
            request.name,
            request.email,
            request.message,
            help_type,
        );
        message.subject = request.subject;

        self.ctx.message_repo().create(&message).await?;

        info!(message_id = %message.id, help_type = %help_type, "Contact message received");

        Ok(ContactMessageResponse::from(&message))
    }

    /// List all messages, newest first (admin)
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ContactMessageResponse>> {
        let messages = self.ctx.message_repo().list().await?;
        Ok(messages.iter().map(ContactMessageResponse::from).collect())
    }

    /// Mark a message as read (admin)
    #[instrument(skip(self))]
    pub async fn mark_read(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.message_repo().mark_read(id).await?;
        Ok(())
    }
}
