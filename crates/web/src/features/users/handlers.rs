use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{dto::user::CreateUserRequest, models::User};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/users",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "List all accounts", body = Vec<User>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "users"
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, WebError> {
    let users = services::list_users(state.db.pool()).await?;

    Ok(Json(users))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Account created", body = User),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Email already registered")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    req.validate_role().map_err(WebError::BadRequest)?;

    let user = services::create_user(state.db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(user)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_user(state.db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
