pub use super::members::Entity as Members;
pub use super::orders::Entity as Orders;
pub use super::products::Entity as Products;
pub use super::teams::Entity as Teams;
