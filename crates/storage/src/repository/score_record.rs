use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::score_record::SubmitResultRequest;
use crate::error::{Result, StorageError};
use crate::models::ScoreRecord;

/// The score ledger. Records are only ever inserted or deleted wholesale;
/// `list_all` is the recomputation input for the standings.
pub struct ScoreRecordRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoreRecordRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: &SubmitResultRequest) -> Result<ScoreRecord> {
        let record = sqlx::query_as::<_, ScoreRecord>(
            r#"
            INSERT INTO score_records (event_id, college_id, points, justification)
            VALUES ($1, $2, $3, $4)
            RETURNING record_id, event_id, college_id, points, justification, created_at
            "#,
        )
        .bind(req.event_id)
        .bind(req.college_id)
        .bind(req.points)
        .bind(&req.justification)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).into_constraint("unknown event or college"))?;

        Ok(record)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM score_records WHERE record_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// All committed records, newest first.
    pub async fn list_all(&self) -> Result<Vec<ScoreRecord>> {
        let records = sqlx::query_as::<_, ScoreRecord>(
            r#"
            SELECT record_id, event_id, college_id, points, justification, created_at
            FROM score_records
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }

    pub async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<ScoreRecord>> {
        let records = sqlx::query_as::<_, ScoreRecord>(
            r#"
            SELECT record_id, event_id, college_id, points, justification, created_at
            FROM score_records
            WHERE event_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }
}
