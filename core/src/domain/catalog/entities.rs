use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: i64,
    pub order_date: NaiveDate,
    pub quantity: i64,
    pub total_price: i64,
    pub status: String,
    pub product_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub price: i64,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub order_date: NaiveDate,
    pub quantity: i64,
    pub total_price: i64,
    pub status: OrderStatus,
    pub product_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Shipped,
    Processing,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// Status of the n-th (1-based) order of a product in the demo data set.
    pub fn for_demo_index(index: usize) -> Self {
        if index % 3 == 0 {
            OrderStatus::Shipped
        } else if index % 2 == 0 {
            OrderStatus::Processing
        } else {
            OrderStatus::Cancelled
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SHIPPED" => Ok(OrderStatus::Shipped),
            "PROCESSING" => Ok(OrderStatus::Processing),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            other => Err(format!("unknown order status '{other}'")),
        }
    }
}
