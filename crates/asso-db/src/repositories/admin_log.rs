//! PostgreSQL implementation of AdminLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use asso_core::entities::AdminLogEntry;
use asso_core::traits::{AdminLogRepository, RepoResult};

use crate::models::AdminLogModel;

use super::error::map_db_error;

/// PostgreSQL implementation of AdminLogRepository
#[derive(Clone)]
pub struct PgAdminLogRepository {
    pool: PgPool,
}

impl PgAdminLogRepository {
    /// Create a new PgAdminLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminLogRepository for PgAdminLogRepository {
    #[instrument(skip(self, entry))]
    async fn append(&self, entry: &AdminLogEntry) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO admin_logs (id, action, details, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(entry.id)
        .bind(&entry.action)
        .bind(&entry.details)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<AdminLogEntry>> {
        let models = sqlx::query_as::<_, AdminLogModel>(
            r#"
            SELECT id, action, details, created_at
            FROM admin_logs
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(AdminLogEntry::from).collect())
    }
}
