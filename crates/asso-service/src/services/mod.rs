//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod admin_log;
pub mod auth;
pub mod context;
pub mod error;
pub mod event;
pub mod lookup;
pub mod media;
pub mod message;
pub mod publication;
pub mod registration;
pub mod support;

// Re-export all services for convenience
pub use admin_log::AdminLogService;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use event::EventService;
pub use lookup::LookupService;
pub use media::MediaService;
pub use message::ContactMessageService;
pub use publication::PublicationService;
pub use registration::RegistrationService;
pub use support::SupportInfoService;
