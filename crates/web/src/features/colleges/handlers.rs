use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::college::{CollegeResponse, CreateCollegeRequest};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::features::leaderboard::services::refresh_standings;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/colleges",
    responses(
        (status = 200, description = "List all colleges", body = Vec<CollegeResponse>)
    ),
    tag = "colleges"
)]
pub async fn list_colleges(
    State(state): State<AppState>,
) -> Result<Json<Vec<CollegeResponse>>, WebError> {
    let colleges = services::list_colleges(state.db.pool()).await?;

    let response: Vec<CollegeResponse> = colleges.into_iter().map(CollegeResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/colleges",
    request_body = CreateCollegeRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "College created", body = CollegeResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Code already exists")
    ),
    tag = "colleges"
)]
pub async fn create_college(
    State(state): State<AppState>,
    Json(req): Json<CreateCollegeRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let college = services::create_college(state.db.pool(), &req).await?;

    // A new college enters the ranking at zero points.
    refresh_standings(&state.db, &state.hub).await?;

    Ok((StatusCode::CREATED, Json(CollegeResponse::from(college))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/colleges/{id}",
    params(
        ("id" = Uuid, Path, description = "College id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "College deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "College not found")
    ),
    tag = "colleges"
)]
pub async fn delete_college(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_college(state.db.pool(), id).await?;

    refresh_standings(&state.db, &state.hub).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
