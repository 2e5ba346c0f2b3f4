use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Coordinator or admin account. Credentials and token issuance live outside
/// this service; only the management attributes are stored here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub role: String,
    #[schema(value_type = Vec<Uuid>)]
    pub event_ids: sqlx::types::Json<Vec<Uuid>>,
    pub created_at: chrono::NaiveDateTime,
}
