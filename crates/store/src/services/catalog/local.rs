//! Local product cache.
//!
//! The fallback source for catalog reads and (under the default write
//! policy) writes. Owned by the catalog service; seeded with a fixed
//! starter catalog the first time it is read while empty.

use chrono::Utc;
use rust_decimal::Decimal;

use marigold_core::ProductId;

use super::remote::PLACEHOLDER_IMAGE;
use crate::Store;
use crate::kv::{StoreError, keys};
use crate::models::{NewProduct, Product, ProductUpdate};

/// Local cache operations over the `products` key.
#[derive(Debug, Clone)]
pub(super) struct LocalCatalog {
    store: Store,
}

impl LocalCatalog {
    pub(super) const fn new(store: Store) -> Self {
        Self { store }
    }

    /// All cached products, seeding the starter catalog when the key is
    /// absent.
    pub(super) fn products(&self) -> Result<Vec<Product>, StoreError> {
        if let Some(products) = self.store.get_json(keys::PRODUCTS)? {
            return Ok(products);
        }

        let seeded = starter_catalog();
        self.save(&seeded)?;
        Ok(seeded)
    }

    fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        self.store.set_json(keys::PRODUCTS, &products)
    }

    pub(super) fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.products()?.into_iter().find(|p| p.id == id))
    }

    /// Append a product, assigning the next free ID.
    pub(super) fn create(&self, new: NewProduct) -> Result<Product, StoreError> {
        let mut products = self.products()?;

        let next_id = products
            .iter()
            .map(|p| p.id.as_i32())
            .max()
            .map_or(1, |max| max + 1);

        let now = Utc::now();
        let product = Product {
            id: ProductId::new(next_id),
            name: new.name,
            price: new.price,
            description: new.description,
            image: new.image,
            category: new.category,
            stock: new.stock,
            created_at: now,
            updated_at: now,
        };

        products.push(product.clone());
        self.save(&products)?;
        Ok(product)
    }

    /// Apply a partial update in place. The ID and creation timestamp never
    /// change; `updated_at` is refreshed.
    pub(super) fn update(
        &self,
        id: ProductId,
        changes: &ProductUpdate,
    ) -> Result<Option<Product>, StoreError> {
        let mut products = self.products()?;

        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        changes.apply_to(product, Utc::now());
        let updated = product.clone();
        self.save(&products)?;
        Ok(Some(updated))
    }

    /// Remove a product; returns whether anything was removed.
    pub(super) fn delete(&self, id: ProductId) -> Result<bool, StoreError> {
        let mut products = self.products()?;
        let before = products.len();
        products.retain(|p| p.id != id);

        if products.len() == before {
            return Ok(false);
        }

        self.save(&products)?;
        Ok(true)
    }
}

/// The fixed starter catalog used to seed an empty cache.
fn starter_catalog() -> Vec<Product> {
    let now = Utc::now();
    let entry = |id: i32, name: &str, price: Decimal, description: &str, category: &str, stock| {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            price,
            description: description.to_owned(),
            image: PLACEHOLDER_IMAGE.to_owned(),
            category: Some(category.to_owned()),
            stock,
            created_at: now,
            updated_at: now,
        }
    };

    vec![
        entry(
            1,
            "XYZ Pro Smartphone",
            Decimal::new(59999, 2),
            "A powerful smartphone with cutting-edge features",
            "Electronics",
            15,
        ),
        entry(
            2,
            "UltraBook Laptop",
            Decimal::new(129999, 2),
            "A thin and light laptop for professionals",
            "Computers",
            8,
        ),
        entry(
            3,
            "Wireless Headphones",
            Decimal::new(14999, 2),
            "Great sound with active noise cancellation",
            "Electronics",
            25,
        ),
        entry(
            4,
            "FitTrack Smart Watch",
            Decimal::new(24999, 2),
            "Track your activity and health around the clock",
            "Accessories",
            12,
        ),
    ]
}
