//! products-server: HTTP CRUD service over a single `products` table
//!
//! Layers, leaf-first:
//! - `db`: connection pool, schema bootstrap and the `ProductStore` implementations
//! - `models`: product, payload and paging types
//! - `http`: extractors, error mapping, route handlers and the application lifecycle

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::DatabaseConfig;
pub use db::{ProductStore, StoreError};
pub use http::{App, ApiError, ServerConfig, ServerError};
pub use models::{Page, Product, ProductPayload};
