//! Sea-ORM entities mirroring the tables created by `core/migrations`.

pub mod prelude;

pub mod members;
pub mod orders;
pub mod products;
pub mod teams;
