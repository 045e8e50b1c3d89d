pub mod envelope;
pub mod order;
pub mod page;
pub mod product;
pub mod user;
