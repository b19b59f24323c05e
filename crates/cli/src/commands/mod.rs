//! CLI command implementations.

pub mod admin;
pub mod catalog;
pub mod orders;
pub mod seed;
pub mod session;

use marigold_store::{Store, StoreConfig};

/// Open the configured store. File-backed when `MARIGOLD_DATA_PATH` is set,
/// otherwise in-memory (and therefore empty every invocation).
pub(crate) fn open_store() -> Result<(Store, StoreConfig), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;
    if config.data_path.is_none() {
        tracing::warn!("MARIGOLD_DATA_PATH not set, state will not persist across invocations");
    }
    let store = Store::open(&config)?;
    Ok((store, config))
}
