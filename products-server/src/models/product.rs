//! Product entity and request payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `products` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

/// Body of create and update requests.
///
/// On create a missing `price` defaults to 0.00. On update a missing
/// field leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl ProductPayload {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
        }
    }

    /// Price to insert when creating a product.
    pub fn price_or_default(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// False when a supplied price cannot be stored.
    pub fn has_valid_price(&self) -> bool {
        self.price.map_or(true, price_in_range)
    }
}

/// Exclusive magnitude bound of `numeric(10,2)`: 8 integer digits.
const PRICE_LIMIT: f64 = 100_000_000.0;

/// Round to the two fractional digits of `numeric(10,2)`.
pub fn round_price(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

/// Whether `price` fits `numeric(10,2)` once rounded to cents.
pub fn price_in_range(price: f64) -> bool {
    price.is_finite() && round_price(price).abs() < PRICE_LIMIT
}
