//! Order types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use marigold_core::{OrderId, OrderStatus, PaymentMethodType, ProductId, UserId};

/// A line item snapshot inside an order.
///
/// Copied from the cart at checkout time; later catalog changes do not
/// affect placed orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub image_url: Option<String>,
}

/// A shipping address embedded in an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// A payment method embedded in an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentMethod {
    /// Payment kind.
    #[serde(rename = "type")]
    pub kind: PaymentMethodType,
    /// Masked identifier, e.g. the last four card digits.
    pub details: String,
    /// Optional display name.
    pub name: Option<String>,
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    /// Unique order ID, assigned from 1001 upward.
    pub id: OrderId,
    /// The user who was signed in at creation time.
    pub user_id: UserId,
    /// When the order was placed.
    pub date: DateTime<Utc>,
    /// Item snapshots.
    pub items: Vec<OrderItem>,
    /// Total as supplied by the caller at creation time; never recomputed
    /// from the items.
    pub total: Decimal,
    /// Lifecycle state.
    pub status: OrderStatus,
    /// Shipping address.
    pub address: Address,
    /// Payment method.
    pub payment_method: PaymentMethod,
}
