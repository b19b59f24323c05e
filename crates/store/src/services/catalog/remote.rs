//! Remote catalog API client.
//!
//! JSON over HTTP against the REST contract:
//!
//! - `GET /products` - full product list
//! - `GET /products/{id}` - single product, 404 when absent
//! - `POST /products` - create (Bearer auth)
//! - `PUT /products/{id}` - partial update (Bearer auth), 404 when absent
//! - `DELETE /products/{id}` - delete (Bearer auth), 404 when absent
//!
//! The wire format uses snake_case field names (`image_url`, `created_at`,
//! `updated_at`); conversion to the domain [`Product`] shape happens here so
//! the rest of the catalog never sees wire records.

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use marigold_core::ProductId;

use super::error::RemoteError;
use crate::models::{NewProduct, Product, ProductUpdate};

/// Image URL substituted when the remote record carries none.
pub(crate) const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

/// Category substituted when a created product carries none.
const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Client for the remote catalog API.
#[derive(Debug, Clone)]
pub struct RemoteCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteCatalog {
    /// Create a new client for the API rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: &Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.as_str().trim_end_matches('/').to_owned(),
        }
    }

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` on transport failure or non-success status.
    pub async fn list(&self) -> Result<Vec<Product>, RemoteError> {
        let response = self
            .client
            .get(format!("{}/products", self.base_url))
            .send()
            .await?;

        let records: Vec<WireProduct> = check_status(response)?.json().await?;
        Ok(records.into_iter().map(WireProduct::into_domain).collect())
    }

    /// Fetch a single product.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::NotFound` on 404 - the callers treat that as
    /// an absent resource, distinct from an unavailable remote.
    pub async fn get(&self, id: ProductId) -> Result<Product, RemoteError> {
        let response = self
            .client
            .get(format!("{}/products/{id}", self.base_url))
            .send()
            .await?;

        let record: WireProduct = check_status(response)?.json().await?;
        Ok(record.into_domain())
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` on transport failure or non-success status.
    pub async fn create(
        &self,
        product: &NewProduct,
        token: &SecretString,
    ) -> Result<Product, RemoteError> {
        let body = WireNewProduct::from_domain(product);
        let response = self
            .client
            .post(format!("{}/products", self.base_url))
            .bearer_auth(token.expose_secret())
            .json(&body)
            .send()
            .await?;

        let record: WireProduct = check_status(response)?.json().await?;
        Ok(record.into_domain())
    }

    /// Apply a partial update. Only the set fields are sent.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::NotFound` on 404.
    pub async fn update(
        &self,
        id: ProductId,
        changes: &ProductUpdate,
        token: &SecretString,
    ) -> Result<Product, RemoteError> {
        let body = WireProductUpdate::from_domain(changes);
        let response = self
            .client
            .put(format!("{}/products/{id}", self.base_url))
            .bearer_auth(token.expose_secret())
            .json(&body)
            .send()
            .await?;

        let record: WireProduct = check_status(response)?.json().await?;
        Ok(record.into_domain())
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::NotFound` on 404.
    pub async fn delete(&self, id: ProductId, token: &SecretString) -> Result<(), RemoteError> {
        let response = self
            .client
            .delete(format!("{}/products/{id}", self.base_url))
            .bearer_auth(token.expose_secret())
            .send()
            .await?;

        check_status(response)?;
        Ok(())
    }
}

/// Map the response status: 404 becomes `NotFound`, other non-success
/// statuses become `Status`.
fn check_status(response: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
    match response.status() {
        StatusCode::NOT_FOUND => Err(RemoteError::NotFound),
        status if !status.is_success() => Err(RemoteError::Status(status)),
        _ => Ok(response),
    }
}

// =============================================================================
// Wire records
// =============================================================================

/// A product record as the API serves it.
#[derive(Debug, Deserialize)]
struct WireProduct {
    id: i32,
    name: String,
    #[serde(default)]
    description: Option<String>,
    price: Decimal,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    stock: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl WireProduct {
    fn into_domain(self) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            price: self.price,
            description: self.description.unwrap_or_default(),
            image: self
                .image_url
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned()),
            category: self.category,
            stock: self.stock,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Create payload in the shape the API expects.
#[derive(Debug, Serialize)]
struct WireNewProduct<'a> {
    name: &'a str,
    description: &'a str,
    price: Decimal,
    category: &'a str,
    image_url: &'a str,
    stock: i64,
}

impl<'a> WireNewProduct<'a> {
    fn from_domain(product: &'a NewProduct) -> Self {
        Self {
            name: &product.name,
            description: &product.description,
            price: product.price,
            category: product.category.as_deref().unwrap_or(DEFAULT_CATEGORY),
            image_url: &product.image,
            stock: product.stock,
        }
    }
}

/// Partial update payload; unset fields are omitted entirely.
#[derive(Debug, Serialize)]
struct WireProductUpdate<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stock: Option<i64>,
}

impl<'a> WireProductUpdate<'a> {
    fn from_domain(changes: &'a ProductUpdate) -> Self {
        Self {
            name: changes.name.as_deref(),
            description: changes.description.as_deref(),
            price: changes.price,
            category: changes.category.as_deref(),
            image_url: changes.image.as_deref(),
            stock: changes.stock,
        }
    }
}
