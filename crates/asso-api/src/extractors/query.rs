//! List query extractors
//!
//! Extracts limit/offset windows and list filters from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::response::ApiError;

/// Maximum page size
const MAX_LIMIT: i64 = 100;

/// Raw limit/offset query parameters
#[derive(Debug, Deserialize)]
pub struct ListWindowParams {
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
}

/// Validated limit/offset window
///
/// Both bounds are optional; an absent limit means the full list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListWindow {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl TryFrom<ListWindowParams> for ListWindow {
    type Error = ApiError;

    fn try_from(params: ListWindowParams) -> Result<Self, Self::Error> {
        let limit = params
            .limit
            .map(|l| {
                if l < 1 {
                    Err(ApiError::invalid_query("'limit' must be at least 1"))
                } else {
                    Ok(l.min(MAX_LIMIT))
                }
            })
            .transpose()?;

        let offset = params
            .offset
            .map(|o| {
                if o < 0 {
                    Err(ApiError::invalid_query("'offset' must not be negative"))
                } else {
                    Ok(o)
                }
            })
            .transpose()?;

        Ok(ListWindow { limit, offset })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ListWindow
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ListWindowParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        ListWindow::try_from(params)
    }
}

/// Query parameters for event listings
#[derive(Debug, Deserialize)]
pub struct EventListParams {
    /// Filter by status ("upcoming" or "past")
    #[serde(default)]
    pub status: Option<String>,
}

/// Query parameters for registration listings
#[derive(Debug, Deserialize)]
pub struct RegistrationListParams {
    /// Restrict to registrations for a single event
    #[serde(default)]
    pub event_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_is_unbounded() {
        let window = ListWindow::default();
        assert!(window.limit.is_none());
        assert!(window.offset.is_none());
    }

    #[test]
    fn test_limit_capped() {
        let params = ListWindowParams {
            limit: Some(500),
            offset: None,
        };
        let window = ListWindow::try_from(params).unwrap();
        assert_eq!(window.limit, Some(MAX_LIMIT));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let params = ListWindowParams {
            limit: Some(0),
            offset: None,
        };
        assert!(ListWindow::try_from(params).is_err());
    }

    #[test]
    fn test_negative_offset_rejected() {
        let params = ListWindowParams {
            limit: None,
            offset: Some(-1),
        };
        assert!(ListWindow::try_from(params).is_err());
    }
}
