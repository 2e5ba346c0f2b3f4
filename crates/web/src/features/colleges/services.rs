use sqlx::PgPool;
use storage::{
    dto::college::CreateCollegeRequest, error::Result, models::College,
    repository::college::CollegeRepository,
};
use uuid::Uuid;

/// List all colleges
pub async fn list_colleges(pool: &PgPool) -> Result<Vec<College>> {
    let repo = CollegeRepository::new(pool);
    repo.list().await
}

/// Create a new college
pub async fn create_college(pool: &PgPool, request: &CreateCollegeRequest) -> Result<College> {
    let repo = CollegeRepository::new(pool);
    repo.create(request).await
}

/// Delete a college and, via cascade, all of its score records
pub async fn delete_college(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = CollegeRepository::new(pool);
    repo.delete(id).await
}
