//! Contact message entity <-> model mapper

use asso_core::entities::ContactMessage;
use asso_core::error::DomainError;

use crate::models::MessageModel;

/// Convert MessageModel to ContactMessage entity
impl TryFrom<MessageModel> for ContactMessage {
    type Error = DomainError;

    fn try_from(model: MessageModel) -> Result<Self, Self::Error> {
        Ok(ContactMessage {
            id: model.id,
            name: model.nom,
            email: model.email,
            subject: model.sujet,
            body: model.message,
            help_type: model.origine.parse()?,
            read: model.lu,
            created_at: model.created_at,
        })
    }
}
