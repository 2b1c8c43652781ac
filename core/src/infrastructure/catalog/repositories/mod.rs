pub mod order_repository;
pub mod product_repository;
