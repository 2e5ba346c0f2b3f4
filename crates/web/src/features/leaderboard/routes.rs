use axum::{Router, routing::get};

use crate::state::AppState;

use super::handlers::{get_leaderboard, leaderboard_ws};

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(get_leaderboard))
}

/// The streaming endpoint lives outside /api, mirroring the page's
/// ws://host/ws/leaderboard connection URL.
pub fn ws_routes() -> Router<AppState> {
    Router::new().route("/ws/leaderboard", get(leaderboard_ws))
}
