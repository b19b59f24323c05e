//! The device cart.
//!
//! Owns the `cart` key: a single ordered sequence of [`CartItem`]s per
//! store. The cart is deliberately NOT scoped to the signed-in user -
//! switching accounts on the same device leaves the cart untouched.

use rust_decimal::Decimal;

use marigold_core::ProductId;

use crate::Store;
use crate::kv::{StoreError, keys};
use crate::models::{CartItem, NewCartItem};

/// Cart service.
#[derive(Debug, Clone)]
pub struct CartService {
    store: Store,
}

impl CartService {
    /// Create a new cart service over the shared store.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// The cart contents in insertion order; empty if nothing was ever
    /// added.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be read.
    pub fn items(&self) -> Result<Vec<CartItem>, StoreError> {
        Ok(self.store.get_json(keys::CART)?.unwrap_or_default())
    }

    fn save(&self, items: &[CartItem]) -> Result<(), StoreError> {
        self.store.set_json(keys::CART, &items)
    }

    /// Add `quantity` units of a product.
    ///
    /// If the product is already in the cart the quantities are summed onto
    /// the existing line; otherwise a new line is appended. Callers are
    /// responsible for passing a quantity of at least 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be read or written.
    pub fn add(&self, item: NewCartItem, quantity: u32) -> Result<(), StoreError> {
        let mut items = self.items()?;

        if let Some(existing) = items.iter_mut().find(|i| i.product_id == item.product_id) {
            existing.quantity += quantity;
        } else {
            items.push(item.with_quantity(quantity));
        }

        self.save(&items)
    }

    /// Replace the quantity of an existing line.
    ///
    /// A quantity below 1 is a no-op: the cart is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be read or written.
    pub fn update_quantity(&self, product_id: ProductId, quantity: u32) -> Result<(), StoreError> {
        if quantity < 1 {
            return Ok(());
        }

        let mut items = self.items()?;
        for item in &mut items {
            if item.product_id == product_id {
                item.quantity = quantity;
            }
        }

        self.save(&items)
    }

    /// Remove a line. Removing a product that is not in the cart is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be read or written.
    pub fn remove(&self, product_id: ProductId) -> Result<(), StoreError> {
        let mut items = self.items()?;
        items.retain(|i| i.product_id != product_id);
        self.save(&items)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart key cannot be removed.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(keys::CART)
    }

    /// Sum of `price * quantity` across all lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be read.
    pub fn total(&self) -> Result<Decimal, StoreError> {
        Ok(self
            .items()?
            .iter()
            .map(|i| i.price * Decimal::from(i.quantity))
            .sum())
    }

    /// Sum of quantities across all lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be read.
    pub fn count(&self) -> Result<u32, StoreError> {
        Ok(self.items()?.iter().map(|i| i.quantity).sum())
    }
}
