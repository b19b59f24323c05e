//! Order error types.

use thiserror::Error;

use marigold_core::OrderStatus;

use crate::kv::StoreError;
use crate::services::identity::IdentityError;

/// Errors that can occur during order operations.
///
/// The messages are user-facing; presentation layers display them verbatim.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Orders can only be placed by a signed-in user.
    #[error("you must be signed in to place an order")]
    Unauthenticated,

    /// The supplied total is negative. The total is otherwise taken as
    /// given and never recomputed from the items.
    #[error("order total cannot be negative")]
    InvalidTotal,

    /// The requested status change violates the lifecycle transition
    /// table. Only raised in strict mode.
    #[error("cannot change order status from {from} to {to}")]
    IllegalTransition {
        from: OrderStatus,
        to: OrderStatus,
    },

    /// Reading the session through the identity service failed.
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// Key-value substrate failure.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
