//! Error handling utilities for repositories

use asso_core::error::DomainError;
use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "publication not found" error
pub fn publication_not_found(id: Uuid) -> DomainError {
    DomainError::PublicationNotFound(id)
}

/// Create an "event not found" error
pub fn event_not_found(id: Uuid) -> DomainError {
    DomainError::EventNotFound(id)
}

/// Create a "media not found" error
pub fn media_not_found(id: Uuid) -> DomainError {
    DomainError::MediaNotFound(id)
}

/// Create a "message not found" error
pub fn message_not_found(id: Uuid) -> DomainError {
    DomainError::MessageNotFound(id)
}

/// Create a "support info not found" error
pub fn support_info_not_found(id: Uuid) -> DomainError {
    DomainError::SupportInfoNotFound(id)
}
