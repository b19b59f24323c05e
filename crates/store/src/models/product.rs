//! Catalog product types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use marigold_core::ProductId;

/// A catalog product.
///
/// Returned by both the remote API and the local cache in the same shape -
/// callers cannot tell which source served a read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Product name, never empty.
    pub name: String,
    /// Unit price, always positive.
    pub price: Decimal,
    /// Free-form description, may be empty.
    pub description: String,
    /// Image URL.
    pub image: String,
    /// Optional category label.
    pub category: Option<String>,
    /// Units in stock, never negative. Not decremented by order placement.
    pub stock: i64,
    /// When the product was created. Immutable.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a product. The ID and timestamps are assigned by
/// whichever source accepts the write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Option<String>,
    pub image: String,
    pub stock: i64,
}

/// Partial update of a product. Unset fields are left unchanged; the ID and
/// creation timestamp are immutable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub stock: Option<i64>,
}

impl ProductUpdate {
    /// Apply this update onto an existing product, refreshing `updated_at`.
    pub(crate) fn apply_to(&self, product: &mut Product, now: DateTime<Utc>) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = &self.category {
            product.category = Some(category.clone());
        }
        if let Some(image) = &self.image {
            product.image = image.clone();
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        product.updated_at = now;
    }
}
