//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use asso_core::entities::{Event, EventStatus};
use asso_core::traits::{EventRepository, RepoResult};

use crate::mappers::statut_to_column;
use crate::models::EventModel;

use super::error::{event_not_found, map_db_error};

/// Shared SELECT clause joining the event type and media onto each row
const SELECT_EVENT: &str = r#"
    SELECT ev.id, ev.titre, ev.description_long, ev.statut, ev.date_debut,
           ev.date_fin, ev.heure, ev.lieu, ev.type_event_id, ev.keywords,
           ev.media_id, ev.participants_count, ev.max_participants, ev.prix,
           ev.gratuit, ev.created_at, ev.updated_at,
           t.nom AS type_nom,
           m.url AS media_url,
           m.type AS media_type
    FROM events ev
    LEFT JOIN event_types t ON t.id = ev.type_event_id
    LEFT JOIN media m ON m.id = ev.media_id
"#;

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new PgEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn collect(models: Vec<EventModel>) -> RepoResult<Vec<Event>> {
    models.into_iter().map(Event::try_from).collect()
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn list(&self, status: Option<EventStatus>) -> RepoResult<Vec<Event>> {
        // Upcoming events read soonest-first, everything else newest-first
        let models = match status {
            Some(status @ EventStatus::Upcoming) => {
                sqlx::query_as::<_, EventModel>(&format!(
                    "{SELECT_EVENT} WHERE ev.statut = $1 ORDER BY ev.date_debut ASC"
                ))
                .bind(statut_to_column(status))
                .fetch_all(&self.pool)
                .await
            }
            Some(status) => {
                sqlx::query_as::<_, EventModel>(&format!(
                    "{SELECT_EVENT} WHERE ev.statut = $1 ORDER BY ev.date_debut DESC"
                ))
                .bind(statut_to_column(status))
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, EventModel>(&format!(
                    "{SELECT_EVENT} ORDER BY ev.date_debut DESC"
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        collect(models)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Event>> {
        let models = sqlx::query_as::<_, EventModel>(&format!(
            "{SELECT_EVENT} ORDER BY ev.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        collect(models)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Event>> {
        let model = sqlx::query_as::<_, EventModel>(&format!("{SELECT_EVENT} WHERE ev.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        model.map(Event::try_from).transpose()
    }

    #[instrument(skip(self, event))]
    async fn create(&self, event: &Event) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO events
                (id, titre, description_long, statut, date_debut, date_fin, heure,
                 lieu, type_event_id, keywords, media_id, participants_count,
                 max_participants, prix, gratuit, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                    $15, $16, $17)
            "#,
        )
        .bind(event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(statut_to_column(event.status))
        .bind(event.date)
        .bind(event.end_date)
        .bind(&event.time)
        .bind(&event.location)
        .bind(event.type_id)
        .bind(&event.keywords)
        .bind(event.media_id)
        .bind(event.current_participants)
        .bind(event.max_participants)
        .bind(&event.price)
        .bind(event.is_free)
        .bind(event.created_at)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, event))]
    async fn update(&self, event: &Event) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE events
            SET titre = $2, description_long = $3, statut = $4, date_debut = $5,
                date_fin = $6, heure = $7, lieu = $8, type_event_id = $9,
                keywords = $10, media_id = $11, participants_count = $12,
                max_participants = $13, prix = $14, gratuit = $15, updated_at = $16
            WHERE id = $1
            "#,
        )
        .bind(event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(statut_to_column(event.status))
        .bind(event.date)
        .bind(event.end_date)
        .bind(&event.time)
        .bind(&event.location)
        .bind(event.type_id)
        .bind(&event.keywords)
        .bind(event.media_id)
        .bind(event.current_participants)
        .bind(event.max_participants)
        .bind(&event.price)
        .bind(event.is_free)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(event_not_found(event.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(event_not_found(id));
        }

        Ok(())
    }
}
