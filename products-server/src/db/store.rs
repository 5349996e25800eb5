//! The product storage seam
//!
//! Handlers only see `dyn ProductStore`; the PostgreSQL repository and
//! the in-memory store both implement it.

use async_trait::async_trait;

use crate::models::{Page, Product, ProductPayload};

/// Data access error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("product {id} not found")]
    NotFound { id: i32 },
}

/// Single-table product storage
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Fetch one product by id.
    async fn get_product(&self, id: i32) -> Result<Product, StoreError>;

    /// Fetch up to `page.count` products ordered by id, skipping `page.start`.
    async fn get_products(&self, page: Page) -> Result<Vec<Product>, StoreError>;

    /// Insert a product; the id is assigned by the store.
    async fn create_product(&self, name: &str, price: f64) -> Result<Product, StoreError>;

    /// Overwrite the fields present in `payload`; the id never changes.
    async fn update_product(&self, id: i32, payload: &ProductPayload)
        -> Result<Product, StoreError>;

    /// Remove a product.
    async fn delete_product(&self, id: i32) -> Result<(), StoreError>;
}
