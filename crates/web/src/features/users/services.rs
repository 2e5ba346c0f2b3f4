use sqlx::PgPool;
use storage::{
    dto::user::CreateUserRequest, error::Result, models::User, repository::user::UserRepository,
};
use uuid::Uuid;

/// List all coordinator/admin accounts
pub async fn list_users(pool: &PgPool) -> Result<Vec<User>> {
    let repo = UserRepository::new(pool);
    repo.list().await
}

/// Register a new account
pub async fn create_user(pool: &PgPool, request: &CreateUserRequest) -> Result<User> {
    let repo = UserRepository::new(pool);
    repo.create(request).await
}

/// Delete an account
pub async fn delete_user(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = UserRepository::new(pool);
    repo.delete(id).await
}
