//! Participant entity <-> model mapper

use asso_core::entities::{Participant, RegistrationStatus};

use crate::models::ParticipantModel;

/// Convert ParticipantModel to Participant entity
impl From<ParticipantModel> for Participant {
    fn from(model: ParticipantModel) -> Self {
        let status = if model.confirmed {
            RegistrationStatus::Confirmed
        } else {
            RegistrationStatus::Pending
        };

        Participant {
            id: model.id,
            event_id: model.event_id,
            name: model.nom,
            email: model.email,
            registered_at: model.inscription_date,
            status,
            event_title: model.event_titre,
            event_date: model.event_date_debut,
        }
    }
}
