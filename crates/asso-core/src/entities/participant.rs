//! Participant entity - a registration for an event

use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Registration confirmation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStatus {
    Pending,
    Confirmed,
}

impl RegistrationStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
        }
    }

    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Participant entity
///
/// The joined `event_title`/`event_date` fields are populated by admin list
/// queries; registration inserts leave them `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub email: String,
    pub registered_at: DateTime<Utc>,
    pub status: RegistrationStatus,
    // Joined event fields (read-only)
    pub event_title: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
}

impl Participant {
    /// Create a new pending registration
    pub fn new(id: Uuid, event_id: Uuid, name: String, email: String) -> Self {
        Self {
            id,
            event_id,
            name,
            email,
            registered_at: Utc::now(),
            status: RegistrationStatus::Pending,
            event_title: None,
            event_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registration_is_pending() {
        let participant = Participant::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Alice".to_string(),
            "alice@example.com".to_string(),
        );
        assert_eq!(participant.status, RegistrationStatus::Pending);
        assert!(!participant.status.is_confirmed());
    }
}
