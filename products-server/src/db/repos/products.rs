//! Product repository
//!
//! Every statement touches at most one row, except the list query:
//! - create: INSERT ... RETURNING to read back the sequence id
//! - update/delete: zero rows affected maps to `StoreError::NotFound`
//!
//! `price` is `numeric(10,2)` in the table and cast to `float8` on the way out.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::store::{ProductStore, StoreError};
use crate::models::{Page, Product, ProductPayload};

/// PostgreSQL-backed product store
#[derive(Debug, Clone)]
pub struct ProductRepo {
    pool: PgPool,
}

impl ProductRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for ProductRepo {
    async fn get_product(&self, id: i32) -> Result<Product, StoreError> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, price::float8 AS price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound { id })
    }

    async fn get_products(&self, page: Page) -> Result<Vec<Product>, StoreError> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price::float8 AS price
            FROM products
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.count)
        .bind(page.start)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(start = page.start, count = page.count, rows = products.len(), "Listed products");
        Ok(products)
    }

    async fn create_product(&self, name: &str, price: f64) -> Result<Product, StoreError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price)
            VALUES ($1, $2::float8::numeric(10,2))
            RETURNING id, name, price::float8 AS price
            "#,
        )
        .bind(name)
        .bind(price)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = product.id, "Created product");
        Ok(product)
    }

    async fn update_product(
        &self,
        id: i32,
        payload: &ProductPayload,
    ) -> Result<Product, StoreError> {
        // NULL parameters keep the stored value
        sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = COALESCE($1, name),
                price = COALESCE($2::float8::numeric(10,2), price)
            WHERE id = $3
            RETURNING id, name, price::float8 AS price
            "#,
        )
        .bind(payload.name.as_deref())
        .bind(payload.price)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound { id })
    }

    async fn delete_product(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }

        tracing::debug!(id, "Deleted product");
        Ok(())
    }
}
