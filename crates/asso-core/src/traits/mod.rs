//! Ports - traits implemented by the infrastructure layer

mod object_store;
mod repositories;

pub use object_store::ObjectStore;
pub use repositories::{
    AdminLogRepository, EventRepository, LookupRepository, MediaRepository, MessageRepository,
    ParticipantRepository, PublicationRepository, RepoResult, SupportInfoRepository,
};
