pub mod catalog;
pub mod common;
pub mod health;
pub mod member;
pub mod seed;
pub mod team;
