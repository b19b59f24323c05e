//! Integration test support for Marigold.
//!
//! Provides a mock of the remote catalog API (a real axum server on an
//! ephemeral port, speaking the same wire contract) plus small helpers for
//! building test configurations. The tests themselves live in `tests/`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p marigold-integration-tests
//! ```
//!
//! No external services are required: the remote API is mocked in-process
//! and the store backend is in-memory (or a temp file where persistence
//! itself is under test).

// Test support code; unwraps abort the test run, which is the right failure mode here.
#![allow(clippy::unwrap_used)]

pub mod mock_remote;

use marigold_store::{CatalogWritePolicy, StoreConfig};

/// A config pointing at `api_url`, with an in-memory store and default
/// policies.
#[must_use]
pub fn test_config(api_url: &str) -> StoreConfig {
    StoreConfig {
        data_path: None,
        catalog_api_url: api_url.parse().unwrap(),
        strict_order_transitions: false,
        catalog_write_policy: CatalogWritePolicy::Fallback,
    }
}

/// A base URL that refuses connections, simulating a remote outage.
///
/// Binds an ephemeral port and immediately drops the listener; nothing
/// listens there afterwards.
#[must_use]
pub fn unreachable_api_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/api")
}
