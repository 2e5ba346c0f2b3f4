use sqlx::PgPool;
use storage::{
    dto::event::CreateEventRequest, error::Result, models::Event,
    repository::event::EventRepository,
};
use uuid::Uuid;

/// List all events
pub async fn list_events(pool: &PgPool) -> Result<Vec<Event>> {
    let repo = EventRepository::new(pool);
    repo.list().await
}

/// Create a new event
pub async fn create_event(pool: &PgPool, request: &CreateEventRequest) -> Result<Event> {
    let repo = EventRepository::new(pool);
    repo.create(request).await
}

/// Delete an event and, via cascade, all of its score records
pub async fn delete_event(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = EventRepository::new(pool);
    repo.delete(id).await
}
