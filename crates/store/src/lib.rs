//! Marigold Store - client-resident store domain core.
//!
//! This crate owns the data invariants of the store: the user registry and
//! session pointer, the device cart, the dual-source product catalog, and
//! the order lifecycle. Everything above it (pages, forms, routing) is
//! presentation glue; everything below it (the key-value substrate, the
//! remote catalog API) is an external collaborator behind a fixed contract.
//!
//! # Services
//!
//! - [`services::IdentityService`] - registration, login, role checks, role
//!   and password mutation
//! - [`services::CartService`] - the single device cart (deliberately not
//!   scoped to the signed-in user)
//! - [`services::CatalogService`] - product reads and writes, remote API
//!   first with transparent fallback to the local cache
//! - [`services::OrderService`] - order creation, status lifecycle, and
//!   derived per-user views
//!
//! # Persistence model
//!
//! All services persist through a shared [`Store`] handle over a
//! string-keyed, JSON-encoded [`kv::KvStore`]. Every mutation is a
//! whole-collection read-modify-write: the backing collection is read,
//! mutated in memory, and written back. Individual get/set calls are
//! internally synchronized, but there is no cross-call locking or
//! versioning - two interleaved mutations of the same collection resolve
//! last-write-wins at collection granularity. This is a known limitation,
//! not a supported concurrency model.
//!
//! # Example
//!
//! ```rust,no_run
//! use marigold_store::{Store, StoreConfig};
//! use marigold_store::services::{CartService, IdentityService};
//! use marigold_store::models::NewCartItem;
//! use rust_decimal::Decimal;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StoreConfig::from_env()?;
//! let store = Store::open(&config)?;
//!
//! let identity = IdentityService::new(store.clone());
//! identity.register("Jane", "jane@example.com", "hunter22")?;
//! identity.login("jane@example.com", "hunter22")?;
//!
//! let cart = CartService::new(store);
//! cart.add(
//!     NewCartItem {
//!         product_id: 1.into(),
//!         name: "XYZ Pro Smartphone".into(),
//!         price: Decimal::new(59999, 2),
//!         image: "https://via.placeholder.com/150".into(),
//!     },
//!     2,
//! )?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod fixtures;
pub mod kv;
pub mod models;
pub mod services;
mod store;

pub use config::{CatalogWritePolicy, ConfigError, StoreConfig};
pub use kv::StoreError;
pub use store::Store;
