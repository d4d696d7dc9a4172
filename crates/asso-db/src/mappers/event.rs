//! Event entity <-> model mapper

use asso_core::entities::{Event, EventStatus};
use asso_core::error::DomainError;

use crate::models::EventModel;

/// Legacy status marker for events that have not happened yet
const STATUT_A_VENIR: &str = "a_venir";
/// Legacy status marker for finished events
const STATUT_TERMINE: &str = "termine";

/// Translate the legacy `statut` column value into the domain status
pub fn statut_from_column(statut: &str) -> Result<EventStatus, DomainError> {
    match statut {
        STATUT_A_VENIR => Ok(EventStatus::Upcoming),
        STATUT_TERMINE => Ok(EventStatus::Past),
        other => Err(DomainError::UnknownEventStatus(other.to_string())),
    }
}

/// Translate the domain status into the legacy `statut` column value
#[must_use]
pub fn statut_to_column(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Upcoming => STATUT_A_VENIR,
        EventStatus::Past => STATUT_TERMINE,
    }
}

/// Convert EventModel to Event entity
impl TryFrom<EventModel> for Event {
    type Error = DomainError;

    fn try_from(model: EventModel) -> Result<Self, Self::Error> {
        let status = statut_from_column(&model.statut)?;

        Ok(Event {
            id: model.id,
            title: model.titre,
            description: model.description_long,
            status,
            date: model.date_debut,
            end_date: model.date_fin,
            time: model.heure,
            location: model.lieu,
            type_id: model.type_event_id,
            keywords: model.keywords,
            media_id: model.media_id,
            current_participants: model.participants_count,
            max_participants: model.max_participants,
            price: model.prix,
            is_free: model.gratuit,
            created_at: model.created_at,
            updated_at: model.updated_at,
            type_name: model.type_nom,
            media_url: model.media_url,
            media_kind: model.media_type.and_then(|s| s.parse().ok()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_statut_codec() {
        assert_eq!(statut_from_column("a_venir").unwrap(), EventStatus::Upcoming);
        assert_eq!(statut_from_column("termine").unwrap(), EventStatus::Past);
        assert!(statut_from_column("upcoming").is_err());

        assert_eq!(statut_to_column(EventStatus::Upcoming), "a_venir");
        assert_eq!(statut_to_column(EventStatus::Past), "termine");
    }

    #[test]
    fn test_model_to_entity() {
        let now = Utc::now();
        let model = EventModel {
            id: Uuid::new_v4(),
            titre: "Conférence annuelle".to_string(),
            description_long: "Description".to_string(),
            statut: "a_venir".to_string(),
            date_debut: now,
            date_fin: None,
            heure: Some("18h30".to_string()),
            lieu: "Genève".to_string(),
            type_event_id: None,
            keywords: vec!["droits".to_string(), "plaidoyer".to_string()],
            media_id: None,
            participants_count: 12,
            max_participants: 50,
            prix: None,
            gratuit: true,
            created_at: now,
            updated_at: now,
            type_nom: Some("Conférence".to_string()),
            media_url: None,
            media_type: None,
        };

        let event = Event::try_from(model).unwrap();
        assert_eq!(event.status, EventStatus::Upcoming);
        assert_eq!(event.location, "Genève");
        assert_eq!(event.current_participants, 12);
        assert_eq!(event.keywords.len(), 2);
        assert_eq!(event.type_name.as_deref(), Some("Conférence"));
    }

    #[test]
    fn test_unknown_statut_rejected() {
        let now = Utc::now();
        let model = EventModel {
            id: Uuid::new_v4(),
            titre: "E".to_string(),
            description_long: "D".to_string(),
            statut: "annule".to_string(),
            date_debut: now,
            date_fin: None,
            heure: None,
            lieu: "L".to_string(),
            type_event_id: None,
            keywords: vec![],
            media_id: None,
            participants_count: 0,
            max_participants: 0,
            prix: None,
            gratuit: true,
            created_at: now,
            updated_at: now,
            type_nom: None,
            media_url: None,
            media_type: None,
        };

        assert!(matches!(
            Event::try_from(model),
            Err(DomainError::UnknownEventStatus(_))
        ));
    }
}
