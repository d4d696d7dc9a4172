//! Contact message entity - a submission from the public contact form

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::DomainError;

/// Kind of help the sender is offering or asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpType {
    Donation,
    Volunteer,
    Partnership,
    Other,
}

impl HelpType {
    /// Lowercase name as stored in the category column
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Donation => "donation",
            Self::Volunteer => "volunteer",
            Self::Partnership => "partnership",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for HelpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HelpType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "donation" => Ok(Self::Donation),
            "volunteer" => Ok(Self::Volunteer),
            "partnership" => Ok(Self::Partnership),
            "other" => Ok(Self::Other),
            other => Err(DomainError::ValidationError(format!(
                "Unknown help type: {other}"
            ))),
        }
    }
}

/// Contact message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub body: String,
    pub help_type: HelpType,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Create a new unread ContactMessage
    pub fn new(id: Uuid, name: String, email: String, body: String, help_type: HelpType) -> Self {
        Self {
            id,
            name,
            email,
            subject: None,
            body,
            help_type,
            read: false,
            created_at: Utc::now(),
        }
    }

    /// Mark the message as read
    pub fn mark_read(&mut self) {
        self.read = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_is_unread() {
        let message = ContactMessage::new(
            Uuid::new_v4(),
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "Bonjour".to_string(),
            HelpType::Volunteer,
        );
        assert!(!message.read);
        assert_eq!(message.help_type, HelpType::Volunteer);
    }

    #[test]
    fn test_help_type_roundtrip() {
        for help_type in [
            HelpType::Donation,
            HelpType::Volunteer,
            HelpType::Partnership,
            HelpType::Other,
        ] {
            assert_eq!(help_type.as_str().parse::<HelpType>().unwrap(), help_type);
        }
        assert!("sponsor".parse::<HelpType>().is_err());
    }
}
