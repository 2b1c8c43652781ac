pub mod mappers;
pub mod predicates;
pub mod repositories;
