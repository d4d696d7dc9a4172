//! Database models mirroring the legacy French-named schema
//!
//! Column names stay exactly as the historical site created them
//! (`titre`, `chapeau`, `statut`, `lu`, ...). Normalization to the English
//! domain vocabulary happens only in the mappers.

mod admin_log;
mod event;
mod lookup;
mod media;
mod message;
mod participant;
mod publication;
mod support;

pub use admin_log::AdminLogModel;
pub use event::EventModel;
pub use lookup::{CategoryModel, EventTypeModel, TeamModel};
pub use media::MediaModel;
pub use message::MessageModel;
pub use participant::ParticipantModel;
pub use publication::PublicationModel;
pub use support::SupportInfoModel;
