//! PostgreSQL repository implementations

mod admin_log;
mod error;
mod event;
mod lookup;
mod media;
mod message;
mod participant;
mod publication;
mod support;

pub use admin_log::PgAdminLogRepository;
pub use event::PgEventRepository;
pub use lookup::{PgCategoryRepository, PgEventTypeRepository, PgTeamRepository};
pub use media::PgMediaRepository;
pub use message::PgMessageRepository;
pub use participant::PgParticipantRepository;
pub use publication::PgPublicationRepository;
pub use support::PgSupportInfoRepository;
