//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. All reads that feed public listings carry
//! their visibility filters here so no caller can forget them.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    AdminLogEntry, ContactMessage, Event, EventStatus, Media, Participant, Publication,
    SupportInfo,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Publication Repository
// ============================================================================

#[async_trait]
pub trait PublicationRepository: Send + Sync {
    /// List published publications, newest publication date first.
    /// `offset` is only honored together with `limit` (range pagination).
    async fn list_published(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> RepoResult<Vec<Publication>>;

    /// Find a published publication by slug
    async fn find_published_by_slug(&self, slug: &str) -> RepoResult<Option<Publication>>;

    /// List published + featured publications, capped at 3, newest first
    async fn list_featured(&self) -> RepoResult<Vec<Publication>>;

    /// List every publication regardless of flags, newest created first (admin)
    async fn list_all(&self) -> RepoResult<Vec<Publication>>;

    /// Find a publication by id regardless of flags (admin)
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Publication>>;

    /// Insert a new publication
    async fn create(&self, publication: &Publication) -> RepoResult<()>;

    /// Update an existing publication
    async fn update(&self, publication: &Publication) -> RepoResult<()>;

    /// Hard delete a publication
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Event Repository
// ============================================================================

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// List events, optionally filtered by status.
    ///
    /// Ordering direction depends on the filter: ascending for upcoming
    /// (soonest first), descending otherwise (most recent first).
    async fn list(&self, status: Option<EventStatus>) -> RepoResult<Vec<Event>>;

    /// List every event, newest created first (admin)
    async fn list_all(&self) -> RepoResult<Vec<Event>>;

    /// Find an event by id
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Event>>;

    /// Insert a new event
    async fn create(&self, event: &Event) -> RepoResult<()>;

    /// Update an existing event
    async fn update(&self, event: &Event) -> RepoResult<()>;

    /// Hard delete an event
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Lookup Repository (categories, teams, event types)
// ============================================================================

/// Repository for the simple named lookup tables.
///
/// Categories, teams, and event types share one access shape; the type
/// parameter selects the entity (and, in the implementation, the table).
#[async_trait]
pub trait LookupRepository<T>: Send + Sync {
    /// List all entries ordered by name
    async fn list(&self) -> RepoResult<Vec<T>>;

    /// Insert a new entry
    async fn create(&self, entry: &T) -> RepoResult<()>;

    /// Hard delete an entry
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Media Repository
// ============================================================================

#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// List all media rows, newest first
    async fn list(&self) -> RepoResult<Vec<Media>>;

    /// Find a media row by id
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Media>>;

    /// Insert a metadata row for a stored object
    async fn create(&self, media: &Media) -> RepoResult<()>;

    /// Hard delete the metadata row (the object itself is the caller's concern)
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Participant Repository
// ============================================================================

#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// List registrations newest first, optionally for a single event,
    /// with the event title/date joined on
    async fn list(&self, event_id: Option<Uuid>) -> RepoResult<Vec<Participant>>;

    /// Insert a new registration.
    ///
    /// Deliberately does NOT touch the event's `current_participants`
    /// counter and performs no capacity check.
    async fn create(&self, participant: &Participant) -> RepoResult<()>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// List messages, newest first (admin)
    async fn list(&self) -> RepoResult<Vec<ContactMessage>>;

    /// Insert a contact submission
    async fn create(&self, message: &ContactMessage) -> RepoResult<()>;

    /// Flip the read flag on
    async fn mark_read(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Support Info Repository
// ============================================================================

#[async_trait]
pub trait SupportInfoRepository: Send + Sync {
    /// List active entries, oldest first (public support page)
    async fn list_active(&self) -> RepoResult<Vec<SupportInfo>>;

    /// List all entries, oldest first (admin)
    async fn list_all(&self) -> RepoResult<Vec<SupportInfo>>;

    /// Find an entry by id
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<SupportInfo>>;

    /// Update an existing entry
    async fn update(&self, info: &SupportInfo) -> RepoResult<()>;
}

// ============================================================================
// Admin Log Repository
// ============================================================================

#[async_trait]
pub trait AdminLogRepository: Send + Sync {
    /// Append an entry (the log is append-only; there is no update/delete)
    async fn append(&self, entry: &AdminLogEntry) -> RepoResult<()>;

    /// List the most recent entries, newest first
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<AdminLogEntry>>;
}
