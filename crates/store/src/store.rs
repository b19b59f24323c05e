//! Shared store handle.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::StoreConfig;
use crate::kv::{JsonFileStore, KvStore, MemoryStore, StoreError};

/// Cheaply cloneable handle to the key-value substrate.
///
/// All services hold a `Store` clone; the underlying [`KvStore`] is shared.
/// This is the explicit process-wide context the services operate in - there
/// is no ambient global state.
#[derive(Clone)]
pub struct Store {
    kv: Arc<dyn KvStore>,
}

impl Store {
    /// Open a store per the configuration: file-backed when a data path is
    /// configured, in-memory otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing file exists but cannot be loaded.
    pub fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        match &config.data_path {
            Some(path) => Ok(Self::new(JsonFileStore::open(path)?)),
            None => Ok(Self::in_memory()),
        }
    }

    /// Create a store over an in-memory backend.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Wrap an existing backend.
    pub fn new(kv: impl KvStore + 'static) -> Self {
        Self { kv: Arc::new(kv) }
    }

    /// Read and decode the value stored under `key`.
    pub(crate) fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.kv.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Encode and store `value` under `key`.
    pub(crate) fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.kv.set(key, &raw)
    }

    /// Remove the value stored under `key`.
    pub(crate) fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.kv.remove(key)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}
