use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::catalog::entities::{Order, OrderStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: i64,
    pub order_date: NaiveDate,
    pub quantity: i64,
    pub total_price: i64,
    pub status: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            order_date: order.order_date,
            quantity: order.quantity,
            total_price: order.total_price,
            status: order.status,
        }
    }
}

/// One page of the orders placed for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderProduct {
    pub product_id: i64,
    pub order_responses: Vec<OrderResponse>,
}

/// Quantity and price totals of a product's orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderSummary {
    pub product_id: i64,
    pub quantity: i64,
    pub sum: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderStatusSummary {
    pub order_count: i64,
    pub total_amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductOrderCount {
    pub product_id: i64,
    pub product_name: String,
    pub order_count: i64,
}

pub struct CreateProductInput {
    pub name: String,
    pub price: i64,
    pub category: String,
}

pub struct CreateOrderInput {
    pub product_id: i64,
    pub quantity: i64,
    /// Defaults to `price * quantity` of the product.
    pub total_price: Option<i64>,
    pub status: OrderStatus,
    /// Defaults to today.
    pub order_date: Option<NaiveDate>,
}
