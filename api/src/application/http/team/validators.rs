use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTeamValidator {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,
}
