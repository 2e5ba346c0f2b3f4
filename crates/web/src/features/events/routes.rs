use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::middleware::auth::require_api_key;
use crate::state::AppState;

use super::handlers::{create_event, delete_event, list_events};

pub fn routes(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_event))
        .route("/:id", delete(delete_event))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    Router::new().route("/", get(list_events)).merge(protected)
}
