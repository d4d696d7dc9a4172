//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use asso_core::entities::{
    AdminLogEntry, Category, ContactMessage, Event, EventType, Media, Participant, Publication,
    SupportInfo, Team,
};

use super::responses::{
    AdminLogResponse, ContactMessageResponse, EventResponse, LookupResponse, MediaResponse,
    ParticipantResponse, PublicationResponse, SupportInfoResponse,
};

// ============================================================================
// Publication Mappers
// ============================================================================

impl From<&Publication> for PublicationResponse {
    fn from(publication: &Publication) -> Self {
        Self {
            id: publication.id,
            slug: publication.slug.as_str().to_string(),
            title: publication.title.clone(),
            summary: publication.summary.clone(),
            content: publication.content.clone(),
            published_at: publication.published_at,
            category_id: publication.category_id,
            team_id: publication.team_id,
            media_id: publication.media_id,
            featured: publication.featured,
            published: publication.published,
            created_at: publication.created_at,
            updated_at: publication.updated_at,
            category_name: publication.category_name.clone(),
            team_name: publication.team_name.clone(),
            media_url: publication.media_url.clone(),
            media_kind: publication.media_kind.map(|k| k.as_str().to_string()),
        }
    }
}

impl From<Publication> for PublicationResponse {
    fn from(publication: Publication) -> Self {
        Self::from(&publication)
    }
}

// ============================================================================
// Event Mappers
// ============================================================================

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            title: event.title.clone(),
            description: event.description.clone(),
            status: event.status.as_str().to_string(),
            date: event.date,
            end_date: event.end_date,
            time: event.time.clone(),
            location: event.location.clone(),
            type_id: event.type_id,
            keywords: event.keywords.clone(),
            media_id: event.media_id,
            current_participants: event.current_participants,
            max_participants: event.max_participants,
            price: event.price.clone(),
            is_free: event.is_free,
            created_at: event.created_at,
            updated_at: event.updated_at,
            type_name: event.type_name.clone(),
            media_url: event.media_url.clone(),
            media_kind: event.media_kind.map(|k| k.as_str().to_string()),
        }
    }
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self::from(&event)
    }
}

// ============================================================================
// Lookup Mappers
// ============================================================================

macro_rules! lookup_response {
    ($entity:ty) => {
        impl From<&$entity> for LookupResponse {
            fn from(entry: &$entity) -> Self {
                Self {
                    id: entry.id,
                    name: entry.name.clone(),
                    description: entry.description.clone(),
                    created_at: entry.created_at,
                    updated_at: entry.updated_at,
                }
            }
        }

        impl From<$entity> for LookupResponse {
            fn from(entry: $entity) -> Self {
                Self::from(&entry)
            }
        }
    };
}

lookup_response!(Category);
lookup_response!(Team);
lookup_response!(EventType);

// ============================================================================
// Media Mappers
// ============================================================================

impl From<&Media> for MediaResponse {
    fn from(media: &Media) -> Self {
        Self {
            id: media.id,
            file_name: media.file_name.clone(),
            url: media.url.clone(),
            kind: media.kind.as_str().to_string(),
            size_bytes: media.size_bytes,
            mime_type: media.mime_type.clone(),
            uploaded_by: media.uploaded_by.clone(),
            created_at: media.created_at,
        }
    }
}

impl From<Media> for MediaResponse {
    fn from(media: Media) -> Self {
        Self::from(&media)
    }
}

// ============================================================================
// Participant Mappers
// ============================================================================

impl From<&Participant> for ParticipantResponse {
    fn from(participant: &Participant) -> Self {
        Self {
            id: participant.id,
            event_id: participant.event_id,
            name: participant.name.clone(),
            email: participant.email.clone(),
            registered_at: participant.registered_at,
            status: participant.status.as_str().to_string(),
            event_title: participant.event_title.clone(),
            event_date: participant.event_date,
        }
    }
}

impl From<Participant> for ParticipantResponse {
    fn from(participant: Participant) -> Self {
        Self::from(&participant)
    }
}

// ============================================================================
// Contact Message Mappers
// ============================================================================

impl From<&ContactMessage> for ContactMessageResponse {
    fn from(message: &ContactMessage) -> Self {
        Self {
            id: message.id,
            name: message.name.clone(),
            email: message.email.clone(),
            subject: message.subject.clone(),
            message: message.body.clone(),
            help_type: message.help_type.as_str().to_string(),
            read: message.read,
            created_at: message.created_at,
        }
    }
}

impl From<ContactMessage> for ContactMessageResponse {
    fn from(message: ContactMessage) -> Self {
        Self::from(&message)
    }
}

// ============================================================================
// Support Info Mappers
// ============================================================================

impl From<&SupportInfo> for SupportInfoResponse {
    fn from(info: &SupportInfo) -> Self {
        Self {
            id: info.id,
            kind: info.kind.clone(),
            name: info.name.clone(),
            details: info.details.clone(),
            active: info.active,
            created_at: info.created_at,
            updated_at: info.updated_at,
        }
    }
}

impl From<SupportInfo> for SupportInfoResponse {
    fn from(info: SupportInfo) -> Self {
        Self::from(&info)
    }
}

// ============================================================================
// Admin Log Mappers
// ============================================================================

impl From<&AdminLogEntry> for AdminLogResponse {
    fn from(entry: &AdminLogEntry) -> Self {
        Self {
            id: entry.id,
            action: entry.action.clone(),
            details: entry.details.clone(),
            created_at: entry.created_at,
        }
    }
}

impl From<AdminLogEntry> for AdminLogResponse {
    fn from(entry: AdminLogEntry) -> Self {
        Self::from(&entry)
    }
}
