//! Service context - dependency container for services
//!
//! Holds all repositories, the object store, and the admin authentication
//! pieces needed by services.

use std::sync::Arc;

use asso_common::auth::{AdminGate, AdminTokenService};
use asso_core::entities::{Category, EventType, Team};
use asso_core::traits::{
    AdminLogRepository, EventRepository, LookupRepository, MediaRepository, MessageRepository,
    ObjectStore, ParticipantRepository, PublicationRepository, SupportInfoRepository,
};
use asso_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The object store for uploaded media
/// - The admin gate and token service
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    publication_repo: Arc<dyn PublicationRepository>,
    event_repo: Arc<dyn EventRepository>,
    category_repo: Arc<dyn LookupRepository<Category>>,
    team_repo: Arc<dyn LookupRepository<Team>>,
    event_type_repo: Arc<dyn LookupRepository<EventType>>,
    media_repo: Arc<dyn MediaRepository>,
    participant_repo: Arc<dyn ParticipantRepository>,
    message_repo: Arc<dyn MessageRepository>,
    support_info_repo: Arc<dyn SupportInfoRepository>,
    admin_log_repo: Arc<dyn AdminLogRepository>,

    // Object storage
    object_store: Arc<dyn ObjectStore>,

    // Admin authentication
    admin_gate: AdminGate,
    token_service: Arc<AdminTokenService>,
}

impl ServiceContext {
    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the publication repository
    pub fn publication_repo(&self) -> &dyn PublicationRepository {
        self.publication_repo.as_ref()
    }

    /// Get the event repository
    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    /// Get the category repository
    pub fn category_repo(&self) -> &dyn LookupRepository<Category> {
        self.category_repo.as_ref()
    }

    /// Get the team repository
    pub fn team_repo(&self) -> &dyn LookupRepository<Team> {
        self.team_repo.as_ref()
    }

    /// Get the event type repository
    pub fn event_type_repo(&self) -> &dyn LookupRepository<EventType> {
        self.event_type_repo.as_ref()
    }

    /// Get the media repository
    pub fn media_repo(&self) -> &dyn MediaRepository {
        self.media_repo.as_ref()
    }

    /// Get the participant repository
    pub fn participant_repo(&self) -> &dyn ParticipantRepository {
        self.participant_repo.as_ref()
    }

    /// Get the contact message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the support info repository
    pub fn support_info_repo(&self) -> &dyn SupportInfoRepository {
        self.support_info_repo.as_ref()
    }

    /// Get the admin log repository
    pub fn admin_log_repo(&self) -> &dyn AdminLogRepository {
        self.admin_log_repo.as_ref()
    }

    /// Get the object store
    pub fn object_store(&self) -> &dyn ObjectStore {
        self.object_store.as_ref()
    }

    /// Get the admin gate
    pub fn admin_gate(&self) -> &AdminGate {
        &self.admin_gate
    }

    /// Get the admin token service
    pub fn token_service(&self) -> &AdminTokenService {
        self.token_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("object_store", &"...")
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    publication_repo: Option<Arc<dyn PublicationRepository>>,
    event_repo: Option<Arc<dyn EventRepository>>,
    category_repo: Option<Arc<dyn LookupRepository<Category>>>,
    team_repo: Option<Arc<dyn LookupRepository<Team>>>,
    event_type_repo: Option<Arc<dyn LookupRepository<EventType>>>,
    media_repo: Option<Arc<dyn MediaRepository>>,
    participant_repo: Option<Arc<dyn ParticipantRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    support_info_repo: Option<Arc<dyn SupportInfoRepository>>,
    admin_log_repo: Option<Arc<dyn AdminLogRepository>>,
    object_store: Option<Arc<dyn ObjectStore>>,
    admin_gate: Option<AdminGate>,
    token_service: Option<Arc<AdminTokenService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn publication_repo(mut self, repo: Arc<dyn PublicationRepository>) -> Self {
        self.publication_repo = Some(repo);
        self
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn category_repo(mut self, repo: Arc<dyn LookupRepository<Category>>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn team_repo(mut self, repo: Arc<dyn LookupRepository<Team>>) -> Self {
        self.team_repo = Some(repo);
        self
    }

    pub fn event_type_repo(mut self, repo: Arc<dyn LookupRepository<EventType>>) -> Self {
        self.event_type_repo = Some(repo);
        self
    }

    pub fn media_repo(mut self, repo: Arc<dyn MediaRepository>) -> Self {
        self.media_repo = Some(repo);
        self
    }

    pub fn participant_repo(mut self, repo: Arc<dyn ParticipantRepository>) -> Self {
        self.participant_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn support_info_repo(mut self, repo: Arc<dyn SupportInfoRepository>) -> Self {
        self.support_info_repo = Some(repo);
        self
    }

    pub fn admin_log_repo(mut self, repo: Arc<dyn AdminLogRepository>) -> Self {
        self.admin_log_repo = Some(repo);
        self
    }

    pub fn object_store(mut self, store: Arc<dyn ObjectStore>) -> Self {
        self.object_store = Some(store);
        self
    }

    pub fn admin_gate(mut self, gate: AdminGate) -> Self {
        self.admin_gate = Some(gate);
        self
    }

    pub fn token_service(mut self, service: Arc<AdminTokenService>) -> Self {
        self.token_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext {
            pool: self
                .pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            publication_repo: self
                .publication_repo
                .ok_or_else(|| ServiceError::validation("publication_repo is required"))?,
            event_repo: self
                .event_repo
                .ok_or_else(|| ServiceError::validation("event_repo is required"))?,
            category_repo: self
                .category_repo
                .ok_or_else(|| ServiceError::validation("category_repo is required"))?,
            team_repo: self
                .team_repo
                .ok_or_else(|| ServiceError::validation("team_repo is required"))?,
            event_type_repo: self
                .event_type_repo
                .ok_or_else(|| ServiceError::validation("event_type_repo is required"))?,
            media_repo: self
                .media_repo
                .ok_or_else(|| ServiceError::validation("media_repo is required"))?,
            participant_repo: self
                .participant_repo
                .ok_or_else(|| ServiceError::validation("participant_repo is required"))?,
            message_repo: self
                .message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            support_info_repo: self
                .support_info_repo
                .ok_or_else(|| ServiceError::validation("support_info_repo is required"))?,
            admin_log_repo: self
                .admin_log_repo
                .ok_or_else(|| ServiceError::validation("admin_log_repo is required"))?,
            object_store: self
                .object_store
                .ok_or_else(|| ServiceError::validation("object_store is required"))?,
            admin_gate: self
                .admin_gate
                .ok_or_else(|| ServiceError::validation("admin_gate is required"))?,
            token_service: self
                .token_service
                .ok_or_else(|| ServiceError::validation("token_service is required"))?,
        })
    }
}
