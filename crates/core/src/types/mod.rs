//! Core types for Marigold.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod payment;
pub mod role;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use payment::PaymentMethodType;
pub use role::Role;
pub use status::OrderStatus;
