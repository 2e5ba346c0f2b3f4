use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::middleware::auth::require_api_key;
use crate::state::AppState;

use super::handlers::{list_results, retract_result, submit_result};

pub fn routes(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(submit_result))
        .route("/:id", delete(retract_result))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    Router::new().route("/", get(list_results)).merge(protected)
}
