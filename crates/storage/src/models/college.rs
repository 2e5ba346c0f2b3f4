use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A participating college. Total points are never stored here: the
/// authoritative value is always the sum over the college's score records.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct College {
    pub college_id: Uuid,
    pub name: String,
    pub code: String,
    pub created_at: chrono::NaiveDateTime,
}
