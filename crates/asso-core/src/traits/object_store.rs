//! Object store port - upload, URL derivation, and removal by path
//!
//! The store is addressed by relative paths like `media/<object-name>`; the
//! implementation decides where objects physically live and how they are
//! served.

use async_trait::async_trait;

use crate::error::DomainError;

/// Object storage abstraction used for uploaded media
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store an object at the given path, overwriting any existing object
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<(), DomainError>;

    /// Public URL under which the object at `path` is served
    fn public_url(&self, path: &str) -> String;

    /// Remove the object at the given path.
    ///
    /// Removing a missing object is not an error; callers treat removal as
    /// best-effort.
    async fn remove(&self, path: &str) -> Result<(), DomainError>;
}
