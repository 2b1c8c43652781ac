use chrono::NaiveDate;
use quarry_core::domain::catalog::entities::OrderStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderValidator {
    #[serde(alias = "productId")]
    pub product_id: i64,

    #[validate(range(min = 1, message = "quantity must be positive"))]
    pub quantity: i64,

    /// Defaults to the product price times the quantity.
    #[serde(default)]
    #[validate(range(min = 0, message = "total_price must not be negative"))]
    pub total_price: Option<i64>,

    pub status: OrderStatus,

    /// Defaults to today.
    #[serde(default)]
    pub order_date: Option<NaiveDate>,
}
