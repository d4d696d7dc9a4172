//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use asso_core::entities::ContactMessage;
use asso_core::traits::{MessageRepository, RepoResult};

use crate::models::MessageModel;

use super::error::{map_db_error, message_not_found};

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<ContactMessage>> {
        let models = sqlx::query_as::<_, MessageModel>(
            r#"
            SELECT id, nom, email, sujet, message, origine, lu, created_at
            FROM messages
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(ContactMessage::try_from).collect()
    }

    #[instrument(skip(self, message))]
    async fn create(&self, message: &ContactMessage) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO messages (id, nom, email, sujet, message, origine, lu, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(message.id)
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.subject)
        .bind(&message.body)
        .bind(message.help_type.as_str())
        .bind(message.read)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn mark_read(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("UPDATE messages SET lu = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(message_not_found(id));
        }

        Ok(())
    }
}
