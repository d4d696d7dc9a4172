//! PostgreSQL implementations of the lookup repositories
//!
//! Categories, teams, and event types share the same table shape, so the
//! three repositories are generated by one macro over the table name.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use asso_core::entities::{Category, EventType, Team};
use asso_core::error::DomainError;
use asso_core::traits::{LookupRepository, RepoResult};

use crate::models::{CategoryModel, EventTypeModel, TeamModel};

use super::error::map_db_error;

macro_rules! pg_lookup_repository {
    ($(#[$meta:meta])* $repo:ident, $model:ty, $entity:ty, $table:literal, $not_found:path) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $repo {
            pool: PgPool,
        }

        impl $repo {
            #[doc = concat!("Create a new ", stringify!($repo))]
            pub fn new(pool: PgPool) -> Self {
                Self { pool }
            }
        }

        #[async_trait]
        impl LookupRepository<$entity> for $repo {
            #[instrument(skip(self))]
            async fn list(&self) -> RepoResult<Vec<$entity>> {
                let models = sqlx::query_as::<_, $model>(concat!(
                    "SELECT id, nom, description, created_at, updated_at FROM ",
                    $table,
                    " ORDER BY nom ASC"
                ))
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_error)?;

                Ok(models.into_iter().map(<$entity>::from).collect())
            }

            #[instrument(skip(self, entry))]
            async fn create(&self, entry: &$entity) -> RepoResult<()> {
                sqlx::query(concat!(
                    "INSERT INTO ",
                    $table,
                    " (id, nom, description, created_at, updated_at) \
                     VALUES ($1, $2, $3, $4, $5)"
                ))
                .bind(entry.id)
                .bind(&entry.name)
                .bind(&entry.description)
                .bind(entry.created_at)
                .bind(entry.updated_at)
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

                Ok(())
            }

            #[instrument(skip(self))]
            async fn delete(&self, id: Uuid) -> RepoResult<()> {
                let result = sqlx::query(concat!("DELETE FROM ", $table, " WHERE id = $1"))
                    .bind(id)
                    .execute(&self.pool)
                    .await
                    .map_err(map_db_error)?;

                if result.rows_affected() == 0 {
                    return Err($not_found(id));
                }

                Ok(())
            }
        }
    };
}

pg_lookup_repository!(
    /// PostgreSQL implementation of `LookupRepository<Category>`
    PgCategoryRepository,
    CategoryModel,
    Category,
    "categories",
    DomainError::CategoryNotFound
);

pg_lookup_repository!(
    /// PostgreSQL implementation of `LookupRepository<Team>`
    PgTeamRepository,
    TeamModel,
    Team,
    "teams",
    DomainError::TeamNotFound
);

pg_lookup_repository!(
    /// PostgreSQL implementation of `LookupRepository<EventType>`
    PgEventTypeRepository,
    EventTypeModel,
    EventType,
    "event_types",
    DomainError::EventTypeNotFound
);
