pub mod health;
pub mod member;
pub mod order;
pub mod product;
pub mod query_params;
pub mod server;
pub mod team;
