//! Product catalog with a remote-primary, local-fallback read/write
//! contract.
//!
//! Every operation tries the remote API first. On any transport failure or
//! non-success status the operation transparently falls back to the local
//! cache and returns the same shape as a successful remote call - callers
//! cannot distinguish the source. The one exception: a remote 404 on a
//! single-product read means "not found" and does NOT fall back.
//!
//! Writes that fall back mutate the local cache only and are never
//! reconciled with the remote store. A later successful remote read will not
//! reflect a local-only write, and vice versa. This divergence is an
//! acknowledged consistency gap under the default
//! [`CatalogWritePolicy::Fallback`]; `Strict` surfaces the remote error
//! instead.

mod error;
mod local;
mod remote;

pub use error::{CatalogError, RemoteError};
pub use remote::RemoteCatalog;

use rust_decimal::Decimal;
use secrecy::SecretString;
use tracing::{instrument, warn};

use marigold_core::ProductId;

use crate::Store;
use crate::config::{CatalogWritePolicy, StoreConfig};
use crate::kv::keys;
use crate::models::{NewProduct, Product, ProductUpdate};

use local::LocalCatalog;

/// Catalog service.
///
/// Owns the `products` key (local cache) and the `auth_token` key (bearer
/// credential for remote writes).
#[derive(Debug, Clone)]
pub struct CatalogService {
    store: Store,
    remote: RemoteCatalog,
    local: LocalCatalog,
    write_policy: CatalogWritePolicy,
}

impl CatalogService {
    /// Create a new catalog service over the shared store.
    #[must_use]
    pub fn new(store: Store, config: &StoreConfig) -> Self {
        Self {
            remote: RemoteCatalog::new(&config.catalog_api_url),
            local: LocalCatalog::new(store.clone()),
            write_policy: config.catalog_write_policy,
            store,
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The full product set, remote first.
    ///
    /// # Errors
    ///
    /// Returns an error only if the local fallback itself fails.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        match self.remote.list().await {
            Ok(products) => Ok(products),
            Err(err) => {
                warn!(error = %err, "remote catalog unavailable, serving local cache");
                Ok(self.local.products()?)
            }
        }
    }

    /// A single product, remote first. A remote 404 is "not found", not a
    /// failure, and does not consult the local cache.
    ///
    /// # Errors
    ///
    /// Returns an error only if the local fallback itself fails.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        match self.remote.get(id).await {
            Ok(product) => Ok(Some(product)),
            Err(RemoteError::NotFound) => Ok(None),
            Err(err) => {
                warn!(error = %err, %id, "remote catalog unavailable, serving local cache");
                Ok(self.local.get(id)?)
            }
        }
    }

    /// Products whose name, description, or category contains `term`,
    /// case-insensitively. An empty term matches everything.
    ///
    /// # Errors
    ///
    /// Returns an error only if the local fallback itself fails.
    pub async fn search(&self, term: &str) -> Result<Vec<Product>, CatalogError> {
        let products = self.list().await?;
        if term.is_empty() {
            return Ok(products);
        }

        let needle = term.to_lowercase();
        Ok(products
            .into_iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
                    || p.category
                        .as_ref()
                        .is_some_and(|c| c.to_lowercase().contains(&needle))
            })
            .collect())
    }

    /// Products priced within `[min, max]`, bounds inclusive.
    ///
    /// # Errors
    ///
    /// Returns an error only if the local fallback itself fails.
    pub async fn filter_by_price(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> Result<Vec<Product>, CatalogError> {
        let products = self.list().await?;
        Ok(products
            .into_iter()
            .filter(|p| p.price >= min && p.price <= max)
            .collect())
    }

    /// The distinct category labels across the product set, sorted
    /// lexicographically.
    ///
    /// # Errors
    ///
    /// Returns an error only if the local fallback itself fails.
    pub async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        let products = self.list().await?;
        let mut categories: Vec<String> = products.into_iter().filter_map(|p| p.category).collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Validation` before any write is attempted if
    /// the payload is invalid, `CatalogError::Unauthenticated` if no bearer
    /// credential is stored, and - under the strict write policy only -
    /// `CatalogError::Remote` when the remote write fails.
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create(&self, product: NewProduct) -> Result<Product, CatalogError> {
        validate_name(&product.name)?;
        validate_price(product.price)?;
        validate_stock(product.stock)?;
        let token = self.auth_token()?;

        match self.remote.create(&product, &token).await {
            Ok(created) => Ok(created),
            Err(err) if self.write_policy == CatalogWritePolicy::Fallback => {
                warn!(error = %err, "remote create failed, writing to local cache");
                Ok(self.local.create(product)?)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Apply a partial update to a product.
    ///
    /// Returns `Ok(None)` when neither source knows the product.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::create`].
    #[instrument(skip(self, changes))]
    pub async fn update(
        &self,
        id: ProductId,
        changes: ProductUpdate,
    ) -> Result<Option<Product>, CatalogError> {
        if let Some(name) = &changes.name {
            validate_name(name)?;
        }
        if let Some(price) = changes.price {
            validate_price(price)?;
        }
        if let Some(stock) = changes.stock {
            validate_stock(stock)?;
        }
        let token = self.auth_token()?;

        match self.remote.update(id, &changes, &token).await {
            Ok(updated) => Ok(Some(updated)),
            Err(RemoteError::NotFound) => Ok(None),
            Err(err) if self.write_policy == CatalogWritePolicy::Fallback => {
                warn!(error = %err, %id, "remote update failed, writing to local cache");
                Ok(self.local.update(id, &changes)?)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Delete a product. Returns whether anything was deleted.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::create`], minus validation.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> Result<bool, CatalogError> {
        let token = self.auth_token()?;

        match self.remote.delete(id, &token).await {
            Ok(()) => Ok(true),
            Err(RemoteError::NotFound) => Ok(false),
            Err(err) if self.write_policy == CatalogWritePolicy::Fallback => {
                warn!(error = %err, %id, "remote delete failed, deleting from local cache");
                Ok(self.local.delete(id)?)
            }
            Err(err) => Err(err.into()),
        }
    }

    // =========================================================================
    // Credentials & bootstrap
    // =========================================================================

    /// Store the bearer credential used for remote writes.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be persisted.
    pub fn set_auth_token(&self, token: &str) -> Result<(), CatalogError> {
        Ok(self.store.set_json(keys::AUTH_TOKEN, &token)?)
    }

    /// Discard the stored bearer credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be removed.
    pub fn clear_auth_token(&self) -> Result<(), CatalogError> {
        Ok(self.store.remove(keys::AUTH_TOKEN)?)
    }

    fn auth_token(&self) -> Result<SecretString, CatalogError> {
        let token: Option<String> = self.store.get_json(keys::AUTH_TOKEN)?;
        token
            .filter(|t| !t.is_empty())
            .map(SecretString::from)
            .ok_or(CatalogError::Unauthenticated)
    }

    /// Force the local cache seed. Bootstrap concern used by the seed
    /// fixtures; normal reads seed lazily on first fallback.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache cannot be read or written.
    pub fn ensure_local_seed(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.local.products()?)
    }
}

fn validate_name(name: &str) -> Result<(), CatalogError> {
    if name.trim().is_empty() {
        return Err(CatalogError::Validation {
            field: "name",
            message: "name must not be empty",
        });
    }
    Ok(())
}

fn validate_price(price: Decimal) -> Result<(), CatalogError> {
    if price <= Decimal::ZERO {
        return Err(CatalogError::Validation {
            field: "price",
            message: "price must be a positive number",
        });
    }
    Ok(())
}

fn validate_stock(stock: i64) -> Result<(), CatalogError> {
    if stock < 0 {
        return Err(CatalogError::Validation {
            field: "stock",
            message: "stock must not be negative",
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_names_the_field() {
        let err = validate_name("  ").unwrap_err();
        assert!(matches!(err, CatalogError::Validation { field: "name", .. }));

        let err = validate_price(Decimal::ZERO).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Validation { field: "price", .. }
        ));

        let err = validate_stock(-1).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Validation { field: "stock", .. }
        ));
    }

    #[test]
    fn test_valid_inputs_pass() {
        validate_name("Widget").unwrap();
        validate_price(Decimal::new(1, 2)).unwrap();
        validate_stock(0).unwrap();
    }
}
