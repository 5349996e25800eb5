//! Domain models for the products service
//!
//! Request payloads keep optional fields optional so a missing
//! value is never confused with a zero value.

pub mod pagination;
pub mod product;

pub use pagination::{ListParams, Page};
pub use product::{price_in_range, round_price, Product, ProductPayload};
