//! Domain services.
//!
//! One service per collection; each service exclusively owns its storage
//! keys and exposes the only supported way to read or mutate them.

pub mod cart;
pub mod catalog;
pub mod identity;
pub mod orders;

pub use cart::CartService;
pub use catalog::{CatalogError, CatalogService};
pub use identity::{IdentityError, IdentityService};
pub use orders::{OrderError, OrderService};
