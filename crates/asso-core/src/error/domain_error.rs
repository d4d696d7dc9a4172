//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Publication not found: {0}")]
    PublicationNotFound(Uuid),

    #[error("Publication not found for slug: {0}")]
    PublicationSlugNotFound(String),

    #[error("Event not found: {0}")]
    EventNotFound(Uuid),

    #[error("Category not found: {0}")]
    CategoryNotFound(Uuid),

    #[error("Team not found: {0}")]
    TeamNotFound(Uuid),

    #[error("Event type not found: {0}")]
    EventTypeNotFound(Uuid),

    #[error("Media not found: {0}")]
    MediaNotFound(Uuid),

    #[error("Message not found: {0}")]
    MessageNotFound(Uuid),

    #[error("Support info not found: {0}")]
    SupportInfoNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Title produces an empty slug")]
    EmptySlug,

    #[error("Too many keywords: max {max}")]
    TooManyKeywords { max: usize },

    #[error("Unknown media kind: {0}")]
    UnknownMediaKind(String),

    #[error("Unknown event status: {0}")]
    UnknownEventStatus(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Slug already in use: {0}")]
    SlugTaken(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::PublicationNotFound(_) | Self::PublicationSlugNotFound(_) => {
                "UNKNOWN_PUBLICATION"
            }
            Self::EventNotFound(_) => "UNKNOWN_EVENT",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::TeamNotFound(_) => "UNKNOWN_TEAM",
            Self::EventTypeNotFound(_) => "UNKNOWN_EVENT_TYPE",
            Self::MediaNotFound(_) => "UNKNOWN_MEDIA",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::SupportInfoNotFound(_) => "UNKNOWN_SUPPORT_INFO",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::EmptySlug => "EMPTY_SLUG",
            Self::TooManyKeywords { .. } => "TOO_MANY_KEYWORDS",
            Self::UnknownMediaKind(_) => "UNKNOWN_MEDIA_KIND",
            Self::UnknownEventStatus(_) => "UNKNOWN_EVENT_STATUS",

            // Conflict
            Self::SlugTaken(_) => "SLUG_TAKEN",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PublicationNotFound(_)
                | Self::PublicationSlugNotFound(_)
                | Self::EventNotFound(_)
                | Self::CategoryNotFound(_)
                | Self::TeamNotFound(_)
                | Self::EventTypeNotFound(_)
                | Self::MediaNotFound(_)
                | Self::MessageNotFound(_)
                | Self::SupportInfoNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::EmptySlug
                | Self::TooManyKeywords { .. }
                | Self::UnknownMediaKind(_)
                | Self::UnknownEventStatus(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::SlugTaken(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let id = Uuid::nil();
        assert!(DomainError::PublicationNotFound(id).is_not_found());
        assert!(DomainError::PublicationSlugNotFound("x".into()).is_not_found());
        assert!(!DomainError::SlugTaken("x".into()).is_not_found());
    }

    #[test]
    fn test_conflict_classification() {
        let err = DomainError::SlugTaken("mon-article".into());
        assert!(err.is_conflict());
        assert_eq!(err.code(), "SLUG_TAKEN");
    }

    #[test]
    fn test_validation_classification() {
        assert!(DomainError::TooManyKeywords { max: 4 }.is_validation());
        assert!(DomainError::EmptySlug.is_validation());
        assert!(!DomainError::DatabaseError("x".into()).is_validation());
    }
}
