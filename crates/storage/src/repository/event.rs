use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::event::CreateEventRequest;
use crate::error::{Result, StorageError};
use crate::models::Event;

pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, title, code, created_at
            FROM events
            ORDER BY title
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, title, code, created_at
            FROM events
            WHERE event_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    pub async fn create(&self, req: &CreateEventRequest) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (title, code)
            VALUES ($1, $2)
            RETURNING event_id, title, code, created_at
            "#,
        )
        .bind(&req.title)
        .bind(&req.code)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).into_constraint("event code already exists"))?;

        Ok(event)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
