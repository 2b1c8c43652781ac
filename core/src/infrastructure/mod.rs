pub mod catalog;
pub mod db;
pub mod health;
pub mod member;
pub mod predicates;
pub mod team;
