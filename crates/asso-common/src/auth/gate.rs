//! Admin access gate
//!
//! The admin panel is protected by a single shared password. The gate
//! checks a submitted password against the configured one; on success a
//! short-lived token is issued by [`super::AdminTokenService`].

use crate::error::{AppError, AppResult};

/// Shared-password gate for the admin panel
#[derive(Clone)]
pub struct AdminGate {
    password: String,
}

impl AdminGate {
    /// Create a gate with the configured admin password
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// Verify a submitted password
    ///
    /// # Errors
    /// Returns `InvalidCredentials` if the password does not match
    pub fn verify(&self, submitted: &str) -> AppResult<()> {
        if submitted == self.password {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}

impl std::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGate").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_password() {
        let gate = AdminGate::new("secret");
        assert!(gate.verify("secret").is_ok());
    }

    #[test]
    fn test_wrong_password() {
        let gate = AdminGate::new("secret");
        let result = gate.verify("wrong");
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[test]
    fn test_empty_submission() {
        let gate = AdminGate::new("secret");
        assert!(gate.verify("").is_err());
    }

    #[test]
    fn test_debug_does_not_leak_password() {
        let gate = AdminGate::new("secret");
        let rendered = format!("{gate:?}");
        assert!(!rendered.contains("secret"));
    }
}
