//! Contact message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the messages table.
///
/// `origine` is the legacy category column; it stores the help-type names.
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: Uuid,
    pub nom: String,
    pub email: String,
    pub sujet: Option<String>,
    pub message: String,
    pub origine: String,
    pub lu: bool,
    pub created_at: DateTime<Utc>,
}

impl MessageModel {
    /// Check if the message has been read by an admin
    #[inline]
    pub fn is_read(&self) -> bool {
        self.lu
    }
}
