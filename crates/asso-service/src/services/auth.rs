//! Admin authentication service
//!
//! Exchanges the shared admin password for a short-lived session token.

use tracing::{info, instrument, warn};

use crate::dto::{AdminAuthResponse, AdminLoginRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Admin authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Verify the submitted password and issue a session token
    #[instrument(skip(self, request))]
    pub fn login(&self, request: &AdminLoginRequest) -> ServiceResult<AdminAuthResponse> {
        if let Err(e) = self.ctx.admin_gate().verify(&request.password) {
            warn!("Admin login rejected");
            return Err(e.into());
        }

        let issued = self.ctx.token_service().issue()?;
        info!(expires_in = issued.expires_in, "Admin session opened");

        Ok(AdminAuthResponse {
            token: issued.token,
            token_type: issued.token_type,
            expires_in: issued.expires_in,
        })
    }
}
