//! Axum extractors for request handling
//!
//! Custom extractors for admin authentication, validation, and list queries.

mod auth;
mod query;
mod validated;

pub use auth::AdminAuth;
pub use query::{EventListParams, ListWindow, ListWindowParams, RegistrationListParams};
pub use validated::ValidatedJson;
