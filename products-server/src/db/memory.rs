//! In-memory product store
//!
//! Same contract as `ProductRepo`: sequential ids starting at 1, prices
//! rounded to cents, `NotFound` on missing ids. Backs the router tests and
//! `products serve --in-memory`.
//!
//! Prices are not range-checked here; PostgreSQL would reject anything
//! outside `numeric(10,2)`. Handlers filter those out with
//! `ProductPayload::has_valid_price` before either store sees them.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::db::store::{ProductStore, StoreError};
use crate::models::{round_price, Page, Product, ProductPayload};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i32, Product>,
    next_id: i32,
}

/// Product store held in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: Mutex<Table>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all rows and restart ids at 1.
    pub async fn clear(&self) {
        let mut table = self.table.lock().await;
        table.rows.clear();
        table.next_id = 0;
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn get_product(&self, id: i32) -> Result<Product, StoreError> {
        let table = self.table.lock().await;
        table
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn get_products(&self, page: Page) -> Result<Vec<Product>, StoreError> {
        let table = self.table.lock().await;
        Ok(table
            .rows
            .values()
            .skip(page.start as usize)
            .take(page.count as usize)
            .cloned()
            .collect())
    }

    async fn create_product(&self, name: &str, price: f64) -> Result<Product, StoreError> {
        let mut table = self.table.lock().await;
        table.next_id += 1;
        let product = Product {
            id: table.next_id,
            name: name.to_owned(),
            price: round_price(price),
        };
        table.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        id: i32,
        payload: &ProductPayload,
    ) -> Result<Product, StoreError> {
        let mut table = self.table.lock().await;
        let product = table
            .rows
            .get_mut(&id)
            .ok_or(StoreError::NotFound { id })?;

        if let Some(name) = &payload.name {
            product.name = name.clone();
        }
        if let Some(price) = payload.price {
            product.price = round_price(price);
        }

        Ok(product.clone())
    }

    async fn delete_product(&self, id: i32) -> Result<(), StoreError> {
        let mut table = self.table.lock().await;
        table
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { id })
    }
}
