//! Key-value persistence substrate.
//!
//! The store domain persists every collection through a process-wide,
//! string-keyed store of JSON-encoded values with synchronous get/set/remove
//! - the contract of a browser-local storage substrate.
//!
//! Two implementations are provided: [`MemoryStore`] (the default, used by
//! most tests) and [`JsonFileStore`] (a single JSON file on disk, giving the
//! CLI persistence across invocations).

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors that can occur in the key-value substrate.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value could not be encoded or decoded.
    #[error("storage encoding error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// A process-wide, string-keyed store of JSON-encoded string values.
///
/// All operations are synchronous. Implementations must be internally
/// synchronized so that individual calls are atomic, but callers performing
/// read-modify-write sequences get no isolation across calls.
pub trait KvStore: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored under `key`. Removing an absent key is not
    /// an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Storage keys for the domain collections.
///
/// Each key is exclusively owned and mutated by one service; other services
/// only read through that service's public operations.
pub mod keys {
    /// User registry (owned by identity).
    pub const USERS: &str = "users";

    /// The currently signed-in user, absent when signed out (owned by
    /// identity).
    pub const CURRENT_USER: &str = "current_user";

    /// Boolean flag mirroring `current_user` presence (owned by identity).
    pub const IS_AUTHENTICATED: &str = "is_authenticated";

    /// The single device cart (owned by cart).
    pub const CART: &str = "cart";

    /// Order registry (owned by orders).
    pub const ORDERS: &str = "orders";

    /// Local product cache (owned by catalog).
    pub const PRODUCTS: &str = "products";

    /// Bearer credential for remote catalog writes (owned by catalog).
    pub const AUTH_TOKEN: &str = "auth_token";
}
