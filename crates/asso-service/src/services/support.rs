//! Support info service

use chrono::Utc;
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{SupportInfoResponse, UpdateSupportInfoRequest};

use super::admin_log::AdminLogService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Support info service
pub struct SupportInfoService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SupportInfoService<'a> {
    /// Create a new SupportInfoService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List active entries for the public support page, oldest first
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> ServiceResult<Vec<SupportInfoResponse>> {
        let entries = self.ctx.support_info_repo().list_active().await?;
        Ok(entries.iter().map(SupportInfoResponse::from).collect())
    }

    /// List all entries including inactive ones (admin)
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<SupportInfoResponse>> {
        let entries = self.ctx.support_info_repo().list_all().await?;
        Ok(entries.iter().map(SupportInfoResponse::from).collect())
    }

    /// Update an entry (admin)
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateSupportInfoRequest,
    ) -> ServiceResult<SupportInfoResponse> {
        let mut info = self
            .ctx
            .support_info_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Support info", id.to_string()))?;

        if let Some(kind) = request.kind {
            info.kind = kind;
        }
        if let Some(name) = request.name {
            info.name = name;
        }
        if let Some(details) = request.details {
            info.details = details;
        }
        if let Some(active) = request.active {
            info.active = active;
        }
        info.updated_at = Utc::now();

        self.ctx.support_info_repo().update(&info).await?;

        info!(support_info_id = %id, "Support info updated");

        AdminLogService::new(self.ctx)
            .record("support_info.update", Some(json!({ "id": id })))
            .await;

        Ok(SupportInfoResponse::from(&info))
    }
}
