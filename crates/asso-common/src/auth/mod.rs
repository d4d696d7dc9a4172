//! Admin authentication utilities

mod admin_token;
mod gate;

pub use admin_token::{AdminClaims, AdminToken, AdminTokenService};
pub use gate::AdminGate;
