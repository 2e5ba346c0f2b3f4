use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One row of the computed standings. Ranks are 1-based and dense: tied
/// colleges share a rank number and the next lower total follows at rank + 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: i64,
    pub college_id: Uuid,
    pub college_name: String,
    pub college_code: String,
    pub total_points: i64,
}

/// Immutable view of the full standings at one point in time. Replaced
/// wholesale on every recomputation, never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardSnapshot {
    pub version: u64,
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<LeaderboardEntry>,
}

impl LeaderboardSnapshot {
    pub fn empty() -> Self {
        Self {
            version: 0,
            generated_at: Utc::now(),
            entries: Vec::new(),
        }
    }
}
