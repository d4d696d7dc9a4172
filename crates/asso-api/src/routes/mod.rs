//! Route definitions
//!
//! Public site routes and admin routes, all mounted under /api/v1.
//! Uploaded files are served statically under /uploads.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers::{
    auth, events, health, logs, lookups, media, messages, publications, registrations, support,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Static file serving for uploaded media
pub fn upload_routes(upload_dir: &str) -> Router<AppState> {
    Router::new().nest_service("/uploads", ServeDir::new(upload_dir))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(public_routes())
        .nest("/admin", admin_routes())
}

/// Public site routes
fn public_routes() -> Router<AppState> {
    Router::new()
        // Publications
        .route("/publications", get(publications::list))
        .route("/publications/featured", get(publications::list_featured))
        .route("/publications/:slug", get(publications::get_by_slug))
        // Events and registrations
        .route("/events", get(events::list))
        .route("/events/:id", get(events::get))
        .route("/events/:id/registrations", post(registrations::register))
        // Lookups
        .route("/categories", get(lookups::categories::list))
        .route("/teams", get(lookups::teams::list))
        .route("/event-types", get(lookups::event_types::list))
        // Contact and support
        .route("/messages", post(messages::submit))
        .route("/support", get(support::list_active))
}

/// Admin routes, gated per handler by the admin token extractor
fn admin_routes() -> Router<AppState> {
    Router::new()
        // Session
        .route("/auth/login", post(auth::login))
        // Publications
        .route("/publications", get(publications::list_all))
        .route("/publications", post(publications::create))
        .route("/publications/:id", patch(publications::update))
        .route("/publications/:id", delete(publications::delete))
        // Events
        .route("/events", get(events::list_all))
        .route("/events", post(events::create))
        .route("/events/:id", patch(events::update))
        .route("/events/:id", delete(events::delete))
        // Registrations
        .route("/registrations", get(registrations::list))
        // Lookups
        .route("/categories", post(lookups::categories::create))
        .route("/categories/:id", delete(lookups::categories::delete))
        .route("/teams", post(lookups::teams::create))
        .route("/teams/:id", delete(lookups::teams::delete))
        .route("/event-types", post(lookups::event_types::create))
        .route("/event-types/:id", delete(lookups::event_types::delete))
        // Media
        .route("/media", get(media::list))
        .route("/media", post(media::upload))
        .route("/media/:id", delete(media::delete))
        // Contact messages
        .route("/messages", get(messages::list))
        .route("/messages/:id/read", post(messages::mark_read))
        // Support info
        .route("/support", get(support::list_all))
        .route("/support/:id", patch(support::update))
        // Action log
        .route("/logs", get(logs::list))
}
