//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Admin Auth Requests
// ============================================================================

/// Admin login request (single shared password)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdminLoginRequest {
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

// ============================================================================
// Publication Requests
// ============================================================================

/// Create publication request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePublicationRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(max = 500, message = "Summary must be at most 500 characters"))]
    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub content: String,

    /// Defaults to now when omitted
    pub published_at: Option<DateTime<Utc>>,

    pub category_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub media_id: Option<Uuid>,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub published: bool,
}

/// Update publication request (partial)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePublicationRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 500, message = "Summary must be at most 500 characters"))]
    pub summary: Option<String>,

    pub content: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub category_id: Option<Option<Uuid>>,
    pub team_id: Option<Option<Uuid>>,
    pub media_id: Option<Option<Uuid>>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
}

// ============================================================================
// Event Requests
// ============================================================================

/// Create event request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,

    #[validate(length(max = 50, message = "Time must be at most 50 characters"))]
    pub time: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Location must be 1-200 characters"))]
    pub location: String,

    pub type_id: Option<Uuid>,

    #[validate(length(max = 4, message = "At most 4 keywords"))]
    #[serde(default)]
    pub keywords: Vec<String>,

    pub media_id: Option<Uuid>,

    #[serde(default)]
    pub max_participants: i32,

    pub price: Option<String>,

    #[serde(default = "default_is_free")]
    pub is_free: bool,
}

fn default_is_free() -> bool {
    true
}

/// Update event request (partial)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    pub description: Option<String>,

    /// "upcoming" or "past"
    pub status: Option<String>,

    pub date: Option<DateTime<Utc>>,
    pub end_date: Option<Option<DateTime<Utc>>>,
    pub time: Option<Option<String>>,

    #[validate(length(min = 1, max = 200, message = "Location must be 1-200 characters"))]
    pub location: Option<String>,

    pub type_id: Option<Option<Uuid>>,

    #[validate(length(max = 4, message = "At most 4 keywords"))]
    pub keywords: Option<Vec<String>>,

    pub media_id: Option<Option<Uuid>>,
    pub max_participants: Option<i32>,
    pub price: Option<Option<String>>,
    pub is_free: Option<bool>,
}

// ============================================================================
// Lookup Requests
// ============================================================================

/// Create request shared by categories, teams, and event types
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLookupRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
}

// ============================================================================
// Registration Requests
// ============================================================================

/// Event registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterParticipantRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

// ============================================================================
// Contact Requests
// ============================================================================

/// Contact form submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactMessageRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 200, message = "Subject must be at most 200 characters"))]
    pub subject: Option<String>,

    #[validate(length(min = 1, max = 5000, message = "Message must be 1-5000 characters"))]
    pub message: String,

    /// "donation", "volunteer", "partnership", or "other"
    pub help_type: String,
}

// ============================================================================
// Support Info Requests
// ============================================================================

/// Update support info request (partial)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSupportInfoRequest {
    #[validate(length(min = 1, max = 100, message = "Kind must be 1-100 characters"))]
    pub kind: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    pub details: Option<serde_json::Value>,
    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_request_validation() {
        let request = ContactMessageRequest {
            name: "Jean".to_string(),
            email: "not-an-email".to_string(),
            subject: None,
            message: "Bonjour".to_string(),
            help_type: "donation".to_string(),
        };
        assert!(request.validate().is_err());

        let request = ContactMessageRequest {
            email: "jean@example.org".to_string(),
            ..request
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_event_keyword_cap_validation() {
        let request = CreateEventRequest {
            title: "Conférence".to_string(),
            description: String::new(),
            date: Utc::now(),
            end_date: None,
            time: None,
            location: "Genève".to_string(),
            type_id: None,
            keywords: vec!["a".into(), "b".into(), "c".into(), "d".into(), "e".into()],
            media_id: None,
            max_participants: 0,
            price: None,
            is_free: true,
        };
        assert!(request.validate().is_err());
    }
}
