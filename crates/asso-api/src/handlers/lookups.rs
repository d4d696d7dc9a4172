//! Lookup table handlers
//!
//! Categories, teams, and event types share the same shape, so a small
//! macro keeps the three handler sets from drifting apart.

use axum::{
    extract::{Path, State},
    Json,
};
use asso_service::{CreateLookupRequest, LookupResponse, LookupService};
use uuid::Uuid;

use crate::extractors::{AdminAuth, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

macro_rules! lookup_handlers {
    ($module:ident, $list:ident, $create:ident, $delete:ident) => {
        pub mod $module {
            use super::*;

            /// List entries ordered by name
            pub async fn list(
                State(state): State<AppState>,
            ) -> ApiResult<Json<Vec<LookupResponse>>> {
                let service = LookupService::new(state.service_context());
                let entries = service.$list().await?;
                Ok(Json(entries))
            }

            /// Create an entry (admin)
            pub async fn create(
                State(state): State<AppState>,
                _auth: AdminAuth,
                ValidatedJson(request): ValidatedJson<CreateLookupRequest>,
            ) -> ApiResult<Created<Json<LookupResponse>>> {
                let service = LookupService::new(state.service_context());
                let entry = service.$create(request).await?;
                Ok(Created(Json(entry)))
            }

            /// Delete an entry (admin)
            pub async fn delete(
                State(state): State<AppState>,
                _auth: AdminAuth,
                Path(id): Path<Uuid>,
            ) -> ApiResult<NoContent> {
                let service = LookupService::new(state.service_context());
                service.$delete(id).await?;
                Ok(NoContent)
            }
        }
    };
}

lookup_handlers!(categories, list_categories, create_category, delete_category);
lookup_handlers!(teams, list_teams, create_team, delete_team);
lookup_handlers!(event_types, list_event_types, create_event_type, delete_event_type);
