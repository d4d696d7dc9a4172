//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create publication request
#[derive(Debug, Serialize)]
pub struct CreatePublicationBody {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub featured: bool,
    pub published: bool,
}

impl CreatePublicationBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test publication {suffix}"),
            summary: "A short summary".to_string(),
            content: "Full body of the publication".to_string(),
            featured: false,
            published: true,
        }
    }

    pub fn draft() -> Self {
        Self {
            published: false,
            ..Self::unique()
        }
    }
}

/// Create event request
#[derive(Debug, Serialize)]
pub struct CreateEventBody {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub keywords: Vec<String>,
    pub is_free: bool,
}

impl CreateEventBody {
    pub fn unique() -> Self {
        Self::days_from_now(30)
    }

    pub fn days_from_now(days: i64) -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test event {suffix}"),
            description: "An event for testing".to_string(),
            date: Utc::now() + Duration::days(days),
            location: "Community hall".to_string(),
            keywords: vec!["test".to_string()],
            is_free: true,
        }
    }
}

/// Event registration request
#[derive(Debug, Serialize)]
pub struct RegisterBody {
    pub name: String,
    pub email: String,
}

impl RegisterBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Participant {suffix}"),
            email: format!("participant{suffix}@example.com"),
        }
    }
}

/// Contact form submission
#[derive(Debug, Serialize)]
pub struct ContactBody {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub help_type: String,
}

impl ContactBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Sender {suffix}"),
            email: format!("sender{suffix}@example.com"),
            subject: Some("Question".to_string()),
            message: "Hello, I would like to help.".to_string(),
            help_type: "volunteer".to_string(),
        }
    }
}

/// Publication response
#[derive(Debug, Deserialize)]
pub struct PublicationBody {
    pub id: uuid::Uuid,
    pub slug: String,
    pub title: String,
    pub published_at: DateTime<Utc>,
    pub featured: bool,
    pub published: bool,
}

/// Event response
#[derive(Debug, Deserialize)]
pub struct EventBody {
    pub id: uuid::Uuid,
    pub title: String,
    pub status: String,
    pub date: DateTime<Utc>,
    pub current_participants: i32,
}

/// Participant response
#[derive(Debug, Deserialize)]
pub struct ParticipantBody {
    pub id: uuid::Uuid,
    pub event_id: uuid::Uuid,
    pub name: String,
    pub email: String,
    pub status: String,
}

/// Contact message response
#[derive(Debug, Deserialize)]
pub struct ContactMessageBody {
    pub id: uuid::Uuid,
    pub name: String,
    pub help_type: String,
    pub read: bool,
}
