use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::College;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCollegeRequest {
    #[validate(length(min = 1, max = 200, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, max = 16, message = "code must be 1-16 characters"))]
    pub code: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CollegeResponse {
    pub college_id: Uuid,
    pub name: String,
    pub code: String,
}

impl From<College> for CollegeResponse {
    fn from(college: College) -> Self {
        Self {
            college_id: college.college_id,
            name: college.name,
            code: college.code,
        }
    }
}
