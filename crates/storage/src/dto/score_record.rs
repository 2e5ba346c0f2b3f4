use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmitResultRequest {
    pub event_id: Uuid,
    pub college_id: Uuid,
    #[validate(range(min = 0, message = "points must not be negative"))]
    pub points: i32,
    #[validate(length(min = 1, message = "justification is required"))]
    pub justification: String,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ResultFilter {
    pub event_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(points: i32, justification: &str) -> SubmitResultRequest {
        SubmitResultRequest {
            event_id: Uuid::new_v4(),
            college_id: Uuid::new_v4(),
            points,
            justification: justification.to_string(),
        }
    }

    #[test]
    fn accepts_a_well_formed_submission() {
        assert!(request(100, "first place").validate().is_ok());
    }

    #[test]
    fn zero_points_are_valid() {
        assert!(request(0, "participation").validate().is_ok());
    }

    #[test]
    fn rejects_negative_points() {
        let errors = request(-1, "impossible").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("points"));
    }

    #[test]
    fn rejects_an_empty_justification() {
        let errors = request(50, "").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("justification"));
    }
}
