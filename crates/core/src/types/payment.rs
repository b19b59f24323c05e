//! Payment method types.

use serde::{Deserialize, Serialize};

/// Kind of payment method attached to an order.
///
/// Serialized with the camelCase names used in the stored data
/// (`creditCard`, `paypal`, `bankTransfer`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethodType {
    CreditCard,
    Paypal,
    BankTransfer,
}

impl std::fmt::Display for PaymentMethodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreditCard => write!(f, "creditCard"),
            Self::Paypal => write!(f, "paypal"),
            Self::BankTransfer => write!(f, "bankTransfer"),
        }
    }
}
