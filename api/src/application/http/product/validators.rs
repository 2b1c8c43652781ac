use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: i64,

    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
}
