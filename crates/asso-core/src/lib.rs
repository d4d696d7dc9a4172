//! # asso-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    generate_object_name, AdminLogEntry, Category, ContactMessage, Event, EventStatus, EventType,
    HelpType, Media, MediaKind, Participant, Publication, RegistrationStatus, SupportInfo, Team,
};
pub use error::DomainError;
pub use traits::{
    AdminLogRepository, EventRepository, LookupRepository, MediaRepository, MessageRepository,
    ObjectStore, ParticipantRepository, PublicationRepository, RepoResult, SupportInfoRepository,
};
pub use value_objects::{Slug, SlugError};
