//! Domain models.
//!
//! These are the persisted entity types. Validation lives in the services
//! that own each collection; the models themselves are plain data.

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use cart::{CartItem, NewCartItem};
pub use order::{Address, Order, OrderItem, PaymentMethod};
pub use product::{NewProduct, Product, ProductUpdate};
pub use user::User;
