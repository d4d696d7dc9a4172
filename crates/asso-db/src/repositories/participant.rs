//! PostgreSQL implementation of ParticipantRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use asso_core::entities::Participant;
use asso_core::traits::{ParticipantRepository, RepoResult};

use crate::models::ParticipantModel;

use super::error::map_db_error;

/// Shared SELECT clause joining the event title and start date onto each row
const SELECT_PARTICIPANT: &str = r#"
    SELECT p.id, p.event_id, p.nom, p.email, p.inscription_date, p.confirmed,
           ev.titre AS event_titre,
           ev.date_debut AS event_date_debut
    FROM participants p
    LEFT JOIN events ev ON ev.id = p.event_id
"#;

/// PostgreSQL implementation of ParticipantRepository
#[derive(Clone)]
pub struct PgParticipantRepository {
    pool: PgPool,
}

impl PgParticipantRepository {
    /// Create a new PgParticipantRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantRepository for PgParticipantRepository {
    #[instrument(skip(self))]
    async fn list(&self, event_id: Option<Uuid>) -> RepoResult<Vec<Participant>> {
        let models = if let Some(event_id) = event_id {
            sqlx::query_as::<_, ParticipantModel>(&format!(
                "{SELECT_PARTICIPANT} WHERE p.event_id = $1 \
                 ORDER BY p.inscription_date DESC"
            ))
            .bind(event_id)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, ParticipantModel>(&format!(
                "{SELECT_PARTICIPANT} ORDER BY p.inscription_date DESC"
            ))
            .fetch_all(&self.pool)
            .await
        }
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Participant::from).collect())
    }

    // The participants_count column on events is intentionally left alone
    // here; registrations never update it.
    #[instrument(skip(self, participant))]
    async fn create(&self, participant: &Participant) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO participants
                (id, event_id, nom, email, inscription_date, confirmed)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(participant.id)
        .bind(participant.event_id)
        .bind(&participant.name)
        .bind(&participant.email)
        .bind(participant.registered_at)
        .bind(participant.status.is_confirmed())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
