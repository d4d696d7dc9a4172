//! Admin log service
//!
//! Records admin panel actions in the append-only log. Recording is
//! best-effort: a failed append is logged and swallowed so it never fails
//! the action it describes.

use serde_json::Value;
use tracing::{instrument, warn};

use asso_core::entities::AdminLogEntry;

use crate::dto::AdminLogResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Number of entries returned by the admin log listing
const RECENT_LIMIT: i64 = 100;

/// Admin log service
pub struct AdminLogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminLogService<'a> {
    /// Create a new AdminLogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Append an entry, swallowing failures
    #[instrument(skip(self, details))]
    pub async fn record(&self, action: &str, details: Option<Value>) {
        let entry = AdminLogEntry::new(action, details);
        if let Err(e) = self.ctx.admin_log_repo().append(&entry).await {
            warn!(action, error = %e, "Failed to record admin action");
        }
    }

    /// List the most recent entries, newest first
    #[instrument(skip(self))]
    pub async fn list_recent(&self) -> ServiceResult<Vec<AdminLogResponse>> {
        let entries = self.ctx.admin_log_repo().list_recent(RECENT_LIMIT).await?;
        Ok(entries.iter().map(AdminLogResponse::from).collect())
    }
}
