use sea_orm::FromQueryResult;

use crate::domain::catalog::{
    entities::{Order, Product},
    value_objects::{OrderStatusSummary, ProductOrderCount},
};
use crate::entity::{orders::Model as OrderModel, products::Model as ProductModel};

impl From<&ProductModel> for Product {
    fn from(model: &ProductModel) -> Self {
        Product {
            id: model.id,
            name: model.name.clone(),
            price: model.price,
            category: model.category.clone(),
        }
    }
}

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Product::from(&model)
    }
}

impl From<&OrderModel> for Order {
    fn from(model: &OrderModel) -> Self {
        Order {
            id: model.id,
            order_date: model.order_date,
            quantity: model.quantity,
            total_price: model.total_price,
            status: model.status.clone(),
            product_id: model.product_id,
        }
    }
}

impl From<OrderModel> for Order {
    fn from(model: OrderModel) -> Self {
        Order::from(&model)
    }
}

/// Sums over the empty set are NULL, hence the options.
#[derive(Debug, FromQueryResult)]
pub struct OrderSummaryRow {
    pub quantity: Option<i64>,
    pub sum: Option<i64>,
}

#[derive(Debug, FromQueryResult)]
pub struct OrderStatusRow {
    pub status: String,
    pub order_count: i64,
    pub total_amount: Option<i64>,
}

impl From<&OrderStatusRow> for OrderStatusSummary {
    fn from(row: &OrderStatusRow) -> Self {
        OrderStatusSummary {
            order_count: row.order_count,
            total_amount: row.total_amount.unwrap_or_default(),
        }
    }
}

#[derive(Debug, FromQueryResult)]
pub struct ProductOrderCountRow {
    pub product_id: i64,
    pub product_name: String,
    pub order_count: i64,
}

impl From<ProductOrderCountRow> for ProductOrderCount {
    fn from(row: ProductOrderCountRow) -> Self {
        ProductOrderCount {
            product_id: row.product_id,
            product_name: row.product_name,
            order_count: row.order_count,
        }
    }
}
