//! Local filesystem object store

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::instrument;

use asso_core::error::DomainError;
use asso_core::traits::ObjectStore;

/// Object store writing under a root directory on the local filesystem.
///
/// Objects are served by the API's static file route, so the public URL is
/// just `<public_base_url>/uploads/<path>`.
#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalObjectStore {
    /// Create a store rooted at `root`, serving under `public_base_url`
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a relative object path, rejecting traversal components
    fn resolve(&self, path: &str) -> Result<PathBuf, DomainError> {
        let relative = Path::new(path);
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if !safe || path.is_empty() {
            return Err(DomainError::StorageError(format!(
                "Invalid object path: {path}"
            )));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<(), DomainError> {
        let target = self.resolve(path)?;

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::StorageError(e.to_string()))?;
        }

        fs::write(&target, bytes)
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/uploads/{path}", self.public_base_url)
    }

    #[instrument(skip(self))]
    async fn remove(&self, path: &str) -> Result<(), DomainError> {
        let target = self.resolve(path)?;

        match fs::remove_file(&target).await {
            Ok(()) => Ok(()),
            // Removal is best-effort; a missing object is fine
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::StorageError(e.to_string())),
        }
    }
}
