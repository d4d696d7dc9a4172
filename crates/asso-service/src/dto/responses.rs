//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Admin Auth Responses
// ============================================================================

/// Admin session token response
#[derive(Debug, Serialize)]
pub struct AdminAuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

// ============================================================================
// Publication Responses
// ============================================================================

/// Publication response
#[derive(Debug, Serialize)]
pub struct PublicationResponse {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub published_at: DateTime<Utc>,
    pub category_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub media_id: Option<Uuid>,
    pub featured: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_kind: Option<String>,
}

// ============================================================================
// Event Responses
// ============================================================================

/// Event response
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: String,
    pub date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub time: Option<String>,
    pub location: String,
    pub type_id: Option<Uuid>,
    pub keywords: Vec<String>,
    pub media_id: Option<Uuid>,
    pub current_participants: i32,
    pub max_participants: i32,
    pub price: Option<String>,
    pub is_free: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_kind: Option<String>,
}

// ============================================================================
// Lookup Responses
// ============================================================================

/// Response shared by categories, teams, and event types
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Media Responses
// ============================================================================

/// Media metadata response
#[derive(Debug, Serialize)]
pub struct MediaResponse {
    pub id: Uuid,
    pub file_name: String,
    pub url: String,
    pub kind: String,
    pub size_bytes: Option<i64>,
    pub mime_type: Option<String>,
    pub uploaded_by: String,
    pub created_at: DateTime<Utc>,
}

/// Upload result returned by the multipart endpoint
#[derive(Debug, Serialize)]
pub struct UploadedMediaResponse {
    pub media: MediaResponse,
    /// The original file name as submitted
    pub original_name: String,
}

// ============================================================================
// Participant Responses
// ============================================================================

/// Registration response
#[derive(Debug, Serialize)]
pub struct ParticipantResponse {
    pub id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub email: String,
    pub registered_at: DateTime<Utc>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<DateTime<Utc>>,
}

// ============================================================================
// Contact Message Responses
// ============================================================================

/// Contact message response (admin inbox)
#[derive(Debug, Serialize)]
pub struct ContactMessageResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub help_type: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Support Info Responses
// ============================================================================

/// Support info response
#[derive(Debug, Serialize)]
pub struct SupportInfoResponse {
    pub id: Uuid,
    pub kind: String,
    pub name: String,
    pub details: serde_json::Value,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Admin Log Responses
// ============================================================================

/// Admin log entry response
#[derive(Debug, Serialize)]
pub struct AdminLogResponse {
    pub id: Uuid,
    pub action: String,
    pub details: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Per-dependency health status
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
