//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use asso_common::{AdminGate, AdminTokenService, AppConfig, AppError};
use asso_db::{
    create_pool, PgAdminLogRepository, PgCategoryRepository, PgEventRepository,
    PgEventTypeRepository, PgMediaRepository, PgMessageRepository, PgParticipantRepository,
    PgPublicationRepository, PgSupportInfoRepository, PgTeamRepository,
};
use asso_service::ServiceContextBuilder;
use asso_storage::LocalObjectStore;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes, upload_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config().clone();

    // Multipart bodies need headroom beyond the raw file size
    let body_limit = usize::try_from(u64::from(config.storage.max_file_size_mb))
        .unwrap_or(usize::MAX)
        .saturating_mul(1024 * 1024)
        .saturating_add(64 * 1024);

    let api = create_router().layer(DefaultBodyLimit::max(body_limit));
    let api = apply_middleware_with_config(
        api,
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );

    // Health probes and static uploads bypass the rate limiter
    let plain = apply_middleware(health_routes().merge(upload_routes(&config.storage.upload_dir)));

    api.merge(plain).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = asso_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Local object store backing media uploads
    let object_store = Arc::new(LocalObjectStore::new(
        &config.storage.upload_dir,
        &config.storage.public_base_url,
    ));

    // Admin gate and session token signing
    let admin_gate = AdminGate::new(config.admin.password.clone());
    let token_service = Arc::new(AdminTokenService::new(
        &config.jwt.secret,
        config.jwt.token_expiry,
    ));

    // Repositories
    let publication_repo = Arc::new(PgPublicationRepository::new(pool.clone()));
    let event_repo = Arc::new(PgEventRepository::new(pool.clone()));
    let category_repo = Arc::new(PgCategoryRepository::new(pool.clone()));
    let team_repo = Arc::new(PgTeamRepository::new(pool.clone()));
    let event_type_repo = Arc::new(PgEventTypeRepository::new(pool.clone()));
    let media_repo = Arc::new(PgMediaRepository::new(pool.clone()));
    let participant_repo = Arc::new(PgParticipantRepository::new(pool.clone()));
    let message_repo = Arc::new(PgMessageRepository::new(pool.clone()));
    let support_info_repo = Arc::new(PgSupportInfoRepository::new(pool.clone()));
    let admin_log_repo = Arc::new(PgAdminLogRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .publication_repo(publication_repo)
        .event_repo(event_repo)
        .category_repo(category_repo)
        .team_repo(team_repo)
        .event_type_repo(event_type_repo)
        .media_repo(media_repo)
        .participant_repo(participant_repo)
        .message_repo(message_repo)
        .support_info_repo(support_info_repo)
        .admin_log_repo(admin_log_repo)
        .object_store(object_store)
        .admin_gate(admin_gate)
        .token_service(token_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
