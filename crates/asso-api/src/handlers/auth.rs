//! Admin authentication handlers
//!
//! The admin panel is gated by a single shared password; a successful
//! login issues a short lived session token.

use axum::{extract::State, Json};
use asso_service::{AdminAuthResponse, AdminLoginRequest, AuthService};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Admin login
///
/// POST /admin/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AdminLoginRequest>,
) -> ApiResult<Json<AdminAuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(&request)?;
    Ok(Json(response))
}
