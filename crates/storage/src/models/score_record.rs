use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One point award in the ledger. Records are immutable once created and
/// deleted wholesale; standings are always recomputed from the full set.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ScoreRecord {
    pub record_id: Uuid,
    pub event_id: Uuid,
    pub college_id: Uuid,
    pub points: i32,
    pub justification: String,
    pub created_at: chrono::NaiveDateTime,
}
