use std::sync::Arc;

use axum::{
    Json,
    extract::{
        State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
};
use storage::dto::leaderboard::LeaderboardEntry;

use crate::error::WebError;
use crate::state::AppState;

use super::hub::LeaderboardHub;
use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    responses(
        (status = 200, description = "Current standings for all colleges, points descending", body = Vec<LeaderboardEntry>)
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardEntry>>, WebError> {
    let entries = services::current_standings(state.db.pool()).await?;

    Ok(Json(entries))
}

/// WebSocket upgrade for live standings. The viewer gets the current snapshot
/// on connect and a fresh one after every committed mutation.
pub async fn leaderboard_ws(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state.hub.clone()))
}

async fn handle_socket(mut socket: WebSocket, hub: Arc<LeaderboardHub>) {
    let (viewer_id, mut updates) = hub.subscribe();
    tracing::debug!(%viewer_id, "leaderboard viewer connected");

    loop {
        tokio::select! {
            update = updates.recv() => {
                let Some(message) = update else { break };
                if socket.send(message).await.is_err() {
                    break;
                }
            }
            incoming = socket.recv() => {
                match incoming {
                    // Client-side keep-alive.
                    Some(Ok(Message::Text(text))) if text == "ping" => {
                        if socket.send(Message::Text("pong".to_string())).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    hub.unsubscribe(viewer_id);
    tracing::debug!(%viewer_id, "leaderboard viewer disconnected");
}
