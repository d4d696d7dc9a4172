//! Lookup service for categories, teams, and event types

use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use asso_core::entities::{Category, EventType, Team};

use crate::dto::{CreateLookupRequest, LookupResponse};

use super::admin_log::AdminLogService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Lookup service
pub struct LookupService<'a> {
    ctx: &'a ServiceContext,
}

macro_rules! lookup_ops {
    ($list:ident, $create:ident, $delete:ident, $entity:ident, $repo:ident, $label:literal) => {
        /// List entries ordered by name
        #[instrument(skip(self))]
        pub async fn $list(&self) -> ServiceResult<Vec<LookupResponse>> {
            let entries = self.ctx.$repo().list().await?;
            Ok(entries.iter().map(LookupResponse::from).collect())
        }

        /// Create a new entry
        #[instrument(skip(self, request))]
        pub async fn $create(&self, request: CreateLookupRequest) -> ServiceResult<LookupResponse> {
            let entry = $entity::new(Uuid::new_v4(), request.name, request.description);
            self.ctx.$repo().create(&entry).await?;

            info!(id = %entry.id, name = %entry.name, concat!($label, " created"));

            AdminLogService::new(self.ctx)
                .record(
                    concat!($label, ".create"),
                    Some(json!({ "id": entry.id, "name": entry.name })),
                )
                .await;

            Ok(LookupResponse::from(&entry))
        }

        /// Delete an entry
        #[instrument(skip(self))]
        pub async fn $delete(&self, id: Uuid) -> ServiceResult<()> {
            self.ctx.$repo().delete(id).await?;

            info!(%id, concat!($label, " deleted"));

            AdminLogService::new(self.ctx)
                .record(concat!($label, ".delete"), Some(json!({ "id": id })))
                .await;

            Ok(())
        }
    };
}

impl<'a> LookupService<'a> {
    /// Create a new LookupService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    lookup_ops!(
        list_categories,
        create_category,
        delete_category,
        Category,
        category_repo,
        "category"
    );
    lookup_ops!(list_teams, create_team, delete_team, Team, team_repo, "team");
    lookup_ops!(
        list_event_types,
        create_event_type,
        delete_event_type,
        EventType,
        event_type_repo,
        "event_type"
    );
}
