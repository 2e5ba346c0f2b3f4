use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::college::CreateCollegeRequest;
use crate::error::{Result, StorageError};
use crate::models::College;

pub struct CollegeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CollegeRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all colleges, alphabetically by name.
    pub async fn list(&self) -> Result<Vec<College>> {
        let colleges = sqlx::query_as::<_, College>(
            r#"
            SELECT college_id, name, code, created_at
            FROM colleges
            ORDER BY name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(colleges)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<College> {
        let college = sqlx::query_as::<_, College>(
            r#"
            SELECT college_id, name, code, created_at
            FROM colleges
            WHERE college_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(college)
    }

    pub async fn create(&self, req: &CreateCollegeRequest) -> Result<College> {
        let college = sqlx::query_as::<_, College>(
            r#"
            INSERT INTO colleges (name, code)
            VALUES ($1, $2)
            RETURNING college_id, name, code, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.code)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).into_constraint("college code already exists"))?;

        Ok(college)
    }

    /// Delete a college; its score records go with it (ON DELETE CASCADE).
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM colleges WHERE college_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
