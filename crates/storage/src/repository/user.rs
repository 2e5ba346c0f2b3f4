use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::user::CreateUserRequest;
use crate::error::{Result, StorageError};
use crate::models::User;

pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, username, email, role, event_ids, created_at
            FROM users
            ORDER BY username
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    pub async fn create(&self, req: &CreateUserRequest) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, role, event_ids)
            VALUES ($1, $2, $3, $4)
            RETURNING user_id, username, email, role, event_ids, created_at
            "#,
        )
        .bind(&req.username)
        .bind(&req.email)
        .bind(&req.role)
        .bind(sqlx::types::Json(&req.event_ids))
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).into_constraint("email already registered"))?;

        Ok(user)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
