//! Event entity - a scheduled activity with registration capacity

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::DomainError;

use super::media::MediaKind;

/// Maximum number of keywords an event may carry
pub const MAX_KEYWORDS: usize = 4;

/// Event lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Upcoming,
    Past,
}

impl EventStatus {
    /// API-facing lowercase name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Past => "past",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(Self::Upcoming),
            "past" => Ok(Self::Past),
            other => Err(DomainError::UnknownEventStatus(other.to_string())),
        }
    }
}

/// Event entity
///
/// `current_participants` is a stored counter that registration does NOT
/// update; capacity is informational, not enforced (see the registration
/// service).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: EventStatus,
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
    // Joined reference names (read-only)
    pub type_name: Option<String>,
    pub media_url: Option<String>,
    pub media_kind: Option<MediaKind>,
}

impl Event {
    /// Create a new upcoming Event
    pub fn new(
        id: Uuid,
        title: String,
        description: String,
        date: DateTime<Utc>,
        location: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description,
            status: EventStatus::Upcoming,
            date,
            end_date: None,
            time: None,
            location,
            type_id: None,
            keywords: Vec::new(),
            media_id: None,
            current_participants: 0,
            max_participants: 0,
            price: None,
            is_free: true,
            created_at: now,
            updated_at: now,
            type_name: None,
            media_url: None,
            media_kind: None,
        }
    }

    /// Replace the keyword list, enforcing the cap
    pub fn set_keywords(&mut self, keywords: Vec<String>) -> Result<(), DomainError> {
        if keywords.len() > MAX_KEYWORDS {
            return Err(DomainError::TooManyKeywords { max: MAX_KEYWORDS });
        }
        self.keywords = keywords;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Mark the event as finished
    pub fn mark_past(&mut self) {
        self.status = EventStatus::Past;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        assert_eq!("upcoming".parse::<EventStatus>().unwrap(), EventStatus::Upcoming);
        assert_eq!("past".parse::<EventStatus>().unwrap(), EventStatus::Past);
        assert!("a_venir".parse::<EventStatus>().is_err());
        assert_eq!(EventStatus::Past.to_string(), "past");
    }

    #[test]
    fn test_new_event_defaults() {
        let event = Event::new(
            Uuid::new_v4(),
            "Conférence".to_string(),
            "Description".to_string(),
            Utc::now(),
            "Paris".to_string(),
        );
        assert_eq!(event.status, EventStatus::Upcoming);
        assert_eq!(event.current_participants, 0);
        assert!(event.is_free);
    }

    #[test]
    fn test_keyword_cap() {
        let mut event = Event::new(
            Uuid::new_v4(),
            "E".to_string(),
            "D".to_string(),
            Utc::now(),
            "L".to_string(),
        );
        let four = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        assert!(event.set_keywords(four).is_ok());

        let five = vec!["a".into(), "b".into(), "c".into(), "d".into(), "e".into()];
        assert!(matches!(
            event.set_keywords(five),
            Err(DomainError::TooManyKeywords { max: MAX_KEYWORDS })
        ));
    }
}
