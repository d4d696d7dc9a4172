//! Domain entities - core business objects

mod admin_log;
mod event;
mod lookup;
mod media;
mod message;
mod participant;
mod publication;
mod support;

pub use admin_log::AdminLogEntry;
pub use event::{Event, EventStatus, MAX_KEYWORDS};
pub use lookup::{Category, EventType, Team};
pub use media::{generate_object_name, Media, MediaKind};
pub use message::{ContactMessage, HelpType};
pub use participant::{Participant, RegistrationStatus};
pub use publication::Publication;
pub use support::SupportInfo;
