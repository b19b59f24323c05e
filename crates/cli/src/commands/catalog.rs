//! Catalog commands.
//!
//! Reads go remote-first with a transparent local fallback; the output does
//! not say which source served them, because the domain contract hides it.

use tracing::info;

use marigold_store::models::Product;
use marigold_store::services::CatalogService;

/// List the full product set.
///
/// # Errors
///
/// Returns an error only if both sources fail.
pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let (store, config) = super::open_store()?;
    let catalog = CatalogService::new(store, &config);

    let products = catalog.list().await?;
    print_products(&products);
    Ok(())
}

/// Search products by name, description, or category.
///
/// # Errors
///
/// Returns an error only if both sources fail.
pub async fn search(term: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (store, config) = super::open_store()?;
    let catalog = CatalogService::new(store, &config);

    let products = catalog.search(term).await?;
    print_products(&products);
    Ok(())
}

/// Store the bearer token used for catalog writes.
///
/// # Errors
///
/// Returns an error if the token cannot be persisted.
pub fn set_token(token: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (store, config) = super::open_store()?;
    let catalog = CatalogService::new(store, &config);

    catalog.set_auth_token(token)?;
    info!("catalog write token stored");
    Ok(())
}

fn print_products(products: &[Product]) {
    info!(count = products.len(), "products");
    for product in products {
        let category = product.category.as_deref().unwrap_or("-");
        info!(
            id = %product.id,
            price = %product.price,
            stock = product.stock,
            category,
            "{}",
            product.name
        );
    }
}
