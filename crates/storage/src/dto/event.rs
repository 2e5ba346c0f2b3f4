use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Event;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, max = 16, message = "code must be 1-16 characters"))]
    pub code: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EventResponse {
    pub event_id: Uuid,
    pub title: String,
    pub code: String,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            event_id: event.event_id,
            title: event.title,
            code: event.code,
        }
    }
}
