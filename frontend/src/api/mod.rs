pub mod client;
pub mod order;
pub mod product;
pub mod user;

pub use client::{ApiError, ApiResult};
