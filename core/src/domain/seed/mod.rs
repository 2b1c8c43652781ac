//! Demo data loaded at startup when `SEED_DEMO_DATA` is set.

pub mod ports;
pub mod services;

use serde::Serialize;

pub const DEMO_MEMBER_COUNT: i32 = 100;
pub const DEMO_PRODUCTS_PER_CATEGORY: i64 = 20;
pub const DEMO_ORDERS_PER_PRODUCT: i64 = 5;

/// Category name, base price and price step of the demo catalog.
pub const DEMO_CATEGORIES: [(&str, i64, i64); 5] = [
    ("Electronics", 5000, 100),
    ("Books", 1000, 50),
    ("Furniture", 20000, 500),
    ("Clothing", 3000, 200),
    ("Groceries", 500, 10),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DemoDataReport {
    pub teams: u64,
    pub members: u64,
    pub products: u64,
    pub orders: u64,
}
