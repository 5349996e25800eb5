//! Database layer - connection pool, schema and product stores
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default) - no Arc<Mutex<Connection>>
//! - One statement per operation, no transactions
//! - Zero rows matched is `StoreError::NotFound`, never a silent success
//! - Ids come from the `products_id_seq` sequence, read back with RETURNING

pub mod memory;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::ProductRepo;
pub use schema::{clear_table, ensure_schema};
pub use store::{ProductStore, StoreError};
