use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::score_record::{ResultFilter, SubmitResultRequest},
    models::ScoreRecord,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/results",
    params(ResultFilter),
    responses(
        (status = 200, description = "List score records, newest first", body = Vec<ScoreRecord>)
    ),
    tag = "results"
)]
pub async fn list_results(
    State(state): State<AppState>,
    Query(filter): Query<ResultFilter>,
) -> Result<Json<Vec<ScoreRecord>>, WebError> {
    let records = services::list_results(&state.db, &filter).await?;

    Ok(Json(records))
}

#[utoipa::path(
    post,
    path = "/api/results",
    request_body = SubmitResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Result recorded and leaderboard broadcast", body = ScoreRecord),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Unknown event or college")
    ),
    tag = "results"
)]
pub async fn submit_result(
    State(state): State<AppState>,
    Json(req): Json<SubmitResultRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let record = services::submit_result(&state.db, &state.hub, &req).await?;

    Ok((StatusCode::CREATED, Json(record)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/results/{id}",
    params(
        ("id" = Uuid, Path, description = "Score record id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Result retracted and leaderboard broadcast"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn retract_result(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::retract_result(&state.db, &state.hub, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
