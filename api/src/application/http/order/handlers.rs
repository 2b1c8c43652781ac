pub mod create_order;
pub mod get_order_products;
pub mod get_order_summary;
pub mod get_status_summary;
