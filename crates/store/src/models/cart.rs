//! Cart types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use marigold_core::ProductId;

/// A line in the device cart.
///
/// Unique by product ID within the cart; repeated adds merge into the
/// existing line by summing quantities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Product name at the time it was added.
    pub name: String,
    /// Unit price at the time it was added.
    pub price: Decimal,
    /// Product image URL.
    pub image: String,
    /// Number of units, always at least 1.
    pub quantity: u32,
}

/// Input for adding a product to the cart; the quantity is passed
/// separately.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCartItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
}

impl NewCartItem {
    /// Attach a quantity, producing a full cart line.
    #[must_use]
    pub fn with_quantity(self, quantity: u32) -> CartItem {
        CartItem {
            product_id: self.product_id,
            name: self.name,
            price: self.price,
            image: self.image,
            quantity,
        }
    }
}
