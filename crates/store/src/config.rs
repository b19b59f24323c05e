//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults produce an in-memory store talking
//! to a local catalog API.
//!
//! - `MARIGOLD_DATA_PATH` - Path of the JSON store file (default: in-memory,
//!   nothing persisted)
//! - `CATALOG_API_URL` - Base URL of the remote catalog API (default:
//!   `http://localhost:8080/api`)
//! - `MARIGOLD_STRICT_ORDER_TRANSITIONS` - `true` to enforce the order
//!   lifecycle transition table (default: `false`, any status change allowed)
//! - `MARIGOLD_CATALOG_WRITE_POLICY` - `fallback` to divert failed remote
//!   catalog writes into the local cache, `strict` to surface the remote
//!   error instead (default: `fallback`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// What a catalog write does when the remote API is unreachable.
///
/// The default diverts the write into the local cache without reconciling
/// with the remote store - the two sources are allowed to diverge. `Strict`
/// surfaces the remote failure to the caller instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogWritePolicy {
    /// Mutate the local cache when the remote write fails. The default.
    #[default]
    Fallback,
    /// Propagate the remote failure; the local cache is never mutated by a
    /// write.
    Strict,
}

impl std::str::FromStr for CatalogWritePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fallback" => Ok(Self::Fallback),
            "strict" => Ok(Self::Strict),
            _ => Err(format!(
                "invalid catalog write policy: {s} (expected `fallback` or `strict`)"
            )),
        }
    }
}

/// Store domain configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path of the JSON store file; in-memory store when `None`.
    pub data_path: Option<PathBuf>,
    /// Base URL of the remote catalog API.
    pub catalog_api_url: Url,
    /// Enforce the order status transition table.
    pub strict_order_transitions: bool,
    /// Behavior of catalog writes under remote failure.
    pub catalog_write_policy: CatalogWritePolicy,
}

impl StoreConfig {
    /// Default base URL of the remote catalog API.
    pub const DEFAULT_CATALOG_API_URL: &'static str = "http://localhost:8080/api";

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_path = std::env::var("MARIGOLD_DATA_PATH").ok().map(PathBuf::from);

        let catalog_api_url = get_env_or_default("CATALOG_API_URL", Self::DEFAULT_CATALOG_API_URL)
            .parse::<Url>()
            .map_err(|e| ConfigError::InvalidEnvVar("CATALOG_API_URL".to_owned(), e.to_string()))?;

        let strict_order_transitions = get_bool_env("MARIGOLD_STRICT_ORDER_TRANSITIONS", false)?;

        let catalog_write_policy = get_env_or_default("MARIGOLD_CATALOG_WRITE_POLICY", "fallback")
            .parse::<CatalogWritePolicy>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("MARIGOLD_CATALOG_WRITE_POLICY".to_owned(), e)
            })?;

        Ok(Self {
            data_path,
            catalog_api_url,
            strict_order_transitions,
            catalog_write_policy,
        })
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        // The default URL is a compile-time constant and always parses.
        #[allow(clippy::unwrap_used)]
        let catalog_api_url = Self::DEFAULT_CATALOG_API_URL.parse().unwrap();
        Self {
            data_path: None,
            catalog_api_url,
            strict_order_transitions: false,
            catalog_write_policy: CatalogWritePolicy::default(),
        }
    }
}

fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_owned())
}

fn get_bool_env(name: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<bool>()
            .map_err(|e| ConfigError::InvalidEnvVar(name.to_owned(), e.to_string())),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.data_path, None);
        assert_eq!(
            config.catalog_api_url.as_str(),
            "http://localhost:8080/api"
        );
        assert!(!config.strict_order_transitions);
        assert_eq!(config.catalog_write_policy, CatalogWritePolicy::Fallback);
    }

    #[test]
    fn test_write_policy_from_str() {
        assert_eq!(
            "fallback".parse::<CatalogWritePolicy>().unwrap(),
            CatalogWritePolicy::Fallback
        );
        assert_eq!(
            "strict".parse::<CatalogWritePolicy>().unwrap(),
            CatalogWritePolicy::Strict
        );
        assert!("lenient".parse::<CatalogWritePolicy>().is_err());
    }
}
