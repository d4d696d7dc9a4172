//! PostgreSQL implementation of SupportInfoRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use asso_core::entities::SupportInfo;
use asso_core::traits::{RepoResult, SupportInfoRepository};

use crate::models::SupportInfoModel;

use super::error::{map_db_error, support_info_not_found};

/// Shared SELECT clause; `type` is aliased because it is a reserved word
const SELECT_SUPPORT_INFO: &str = r#"
    SELECT id, type AS type_info, nom, details, actif, created_at, updated_at
    FROM support_info
"#;

/// PostgreSQL implementation of SupportInfoRepository
#[derive(Clone)]
pub struct PgSupportInfoRepository {
    pool: PgPool,
}

impl PgSupportInfoRepository {
    /// Create a new PgSupportInfoRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SupportInfoRepository for PgSupportInfoRepository {
    #[instrument(skip(self))]
    async fn list_active(&self) -> RepoResult<Vec<SupportInfo>> {
        let models = sqlx::query_as::<_, SupportInfoModel>(&format!(
            "{SELECT_SUPPORT_INFO} WHERE actif = TRUE ORDER BY created_at ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(SupportInfo::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<SupportInfo>> {
        let models = sqlx::query_as::<_, SupportInfoModel>(&format!(
            "{SELECT_SUPPORT_INFO} ORDER BY created_at ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(SupportInfo::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<SupportInfo>> {
        let model = sqlx::query_as::<_, SupportInfoModel>(&format!(
            "{SELECT_SUPPORT_INFO} WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.map(SupportInfo::from))
    }

    #[instrument(skip(self, info))]
    async fn update(&self, info: &SupportInfo) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE support_info
            SET type = $2, nom = $3, details = $4, actif = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(info.id)
        .bind(&info.kind)
        .bind(&info.name)
        .bind(&info.details)
        .bind(info.active)
        .bind(info.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(support_info_not_found(info.id));
        }

        Ok(())
    }
}
