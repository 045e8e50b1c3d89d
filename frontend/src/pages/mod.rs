pub mod login;
pub mod orders;
pub mod product_detail;
pub mod products;
