//! Seed the store with demo data.
//!
//! Populates the three standard demo accounts, the starter catalog, and 1-3
//! sample orders per user. Each seeding step is a no-op when its collection
//! already has data, so re-running `marigold seed` is safe.

use tracing::info;

use marigold_store::fixtures;
use marigold_store::services::{CatalogService, IdentityService, OrderService};

/// Seed users, catalog, and orders.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or written.
pub fn all() -> Result<(), Box<dyn std::error::Error>> {
    let (store, config) = super::open_store()?;

    let identity = IdentityService::new(store.clone());
    let catalog = CatalogService::new(store.clone(), &config);
    let orders = OrderService::new(store, &config);

    let users = fixtures::seed_default_users(&identity)?;
    info!(users = users.len(), "user registry ready");

    let products = fixtures::seed_starter_catalog(&catalog)?;
    info!(products = products.len(), "local product cache ready");

    let mut rng = rand::rng();
    let created = fixtures::seed_sample_orders(&identity, &orders, &mut rng)?;
    info!(orders = created, "sample orders ready");

    info!(
        "demo accounts use password `{}`",
        fixtures::DEFAULT_PASSWORD
    );
    Ok(())
}
