//! Admin session tokens
//!
//! Token encoding, decoding, and validation using the `jsonwebtoken` crate.
//! There is a single admin identity, so the claims carry a fixed subject
//! rather than a user id.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Subject carried by every admin token
const ADMIN_SUBJECT: &str = "admin";

/// JWT claims structure for admin sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Subject (always "admin")
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl AdminClaims {
    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Issued admin token returned to the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminToken {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Service for issuing and validating admin session tokens
#[derive(Clone)]
pub struct AdminTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: i64,
}

impl AdminTokenService {
    /// Create a new token service with the given secret and expiry in seconds
    #[must_use]
    pub fn new(secret: &str, token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry,
        }
    }

    /// Issue a new admin session token
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self) -> Result<AdminToken, AppError> {
        let now = Utc::now();
        let claims = AdminClaims {
            sub: ADMIN_SUBJECT.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.token_expiry)).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode admin token")))?;

        Ok(AdminToken {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.token_expiry,
        })
    }

    /// Decode and validate an admin session token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn validate(&self, token: &str) -> Result<AdminClaims, AppError> {
        let validation = Validation::default();

        let token_data =
            decode::<AdminClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                    _ => AppError::InvalidToken,
                }
            })?;

        if token_data.claims.sub != ADMIN_SUBJECT {
            return Err(AppError::InvalidToken);
        }

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for AdminTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminTokenService")
            .field("token_expiry", &self.token_expiry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> AdminTokenService {
        AdminTokenService::new("test-secret-key-that-is-long-enough", 3600)
    }

    #[test]
    fn test_issue_token() {
        let service = create_test_service();

        let issued = service.issue().unwrap();

        assert!(!issued.token.is_empty());
        assert_eq!(issued.token_type, "Bearer");
        assert_eq!(issued.expires_in, 3600);
    }

    #[test]
    fn test_validate_issued_token() {
        let service = create_test_service();

        let issued = service.issue().unwrap();
        let claims = service.validate(&issued.token).unwrap();

        assert_eq!(claims.sub, "admin");
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();

        let result = service.validate("invalid.token.here");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_token_from_other_secret() {
        let service = create_test_service();
        let other = AdminTokenService::new("a-completely-different-secret-key", 3600);

        let issued = other.issue().unwrap();
        let result = service.validate(&issued.token);
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }
}
