pub mod create_product;
pub mod get_price_range;
pub mod get_product_order_count;
pub mod get_products;
