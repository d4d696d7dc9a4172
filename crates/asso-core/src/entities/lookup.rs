//! Lookup entities - simple named references used by publications and events
//!
//! Categories, teams, and event types share the same shape: a name and an
//! optional description.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Publication category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Author team credited on publications
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Event type referenced by events
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventType {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

macro_rules! lookup_ctor {
    ($ty:ident) => {
        impl $ty {
            /// Create a new named lookup entry
            pub fn new(id: Uuid, name: String, description: Option<String>) -> Self {
                let now = Utc::now();
                Self {
                    id,
                    name,
                    description,
                    created_at: now,
                    updated_at: now,
                }
            }
        }
    };
}

lookup_ctor!(Category);
lookup_ctor!(Team);
lookup_ctor!(EventType);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_creation() {
        let category = Category::new(Uuid::new_v4(), "Justice".to_string(), None);
        assert_eq!(category.name, "Justice");
        assert!(category.description.is_none());
    }
}
