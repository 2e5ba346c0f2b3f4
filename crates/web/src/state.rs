use std::sync::Arc;

use storage::Database;

use crate::features::leaderboard::hub::LeaderboardHub;
use crate::middleware::auth::ApiKeys;

/// Shared application state. The hub is created once at startup and torn down
/// with the process; it is never reachable as a global.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub hub: Arc<LeaderboardHub>,
    pub api_keys: ApiKeys,
}

impl AppState {
    pub fn new(db: Database, hub: Arc<LeaderboardHub>, api_keys: ApiKeys) -> Self {
        Self { db, hub, api_keys }
    }
}
