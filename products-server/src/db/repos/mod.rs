//! Repository implementations for database access

pub mod products;

pub use products::ProductRepo;
