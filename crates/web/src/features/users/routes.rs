use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::middleware::auth::require_api_key;
use crate::state::AppState;

use super::handlers::{create_user, delete_user, list_users};

/// Account management is admin-only; every route requires an API key.
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", delete(delete_user))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ))
}
