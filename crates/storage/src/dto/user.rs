use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100, message = "username must not be empty"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub event_ids: Vec<Uuid>,
}

fn default_role() -> String {
    "coordinator".to_string()
}

impl CreateUserRequest {
    pub fn validate_role(&self) -> Result<(), String> {
        if self.role != "admin" && self.role != "coordinator" {
            return Err("role must be 'admin' or 'coordinator'".to_string());
        }

        Ok(())
    }
}
