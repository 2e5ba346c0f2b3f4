use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::event::{CreateEventRequest, EventResponse};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::features::leaderboard::services::refresh_standings;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "List all events", body = Vec<EventResponse>)
    ),
    tag = "events"
)]
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<EventResponse>>, WebError> {
    let events = services::list_events(state.db.pool()).await?;

    let response: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Event created", body = EventResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Code already exists")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::create_event(state.db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(EventResponse::from(event))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_event(state.db.pool(), id).await?;

    // Cascaded record deletions change the totals.
    refresh_standings(&state.db, &state.hub).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
