//! Catalog error types.

use thiserror::Error;

use crate::kv::StoreError;

/// Errors that can occur when interacting with the remote catalog API.
///
/// This is an internal signal: apart from `NotFound` (which maps to an
/// absent-resource result), every variant means "remote unavailable" and
/// triggers the local fallback rather than propagating.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// HTTP transport or body decoding failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status.
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// The API returned 404 for the addressed resource.
    #[error("resource not found")]
    NotFound,
}

/// Errors surfaced by catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Writes require a bearer credential in the store.
    #[error("no authentication token found")]
    Unauthenticated,

    /// A create/update payload failed validation. The violated field is
    /// named.
    #[error("validation failed for `{field}`: {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    /// Remote failure, surfaced only under the strict write policy (reads
    /// and default-policy writes absorb it via the fallback path).
    #[error("remote catalog error: {0}")]
    Remote(#[from] RemoteError),

    /// Key-value substrate failure - the local fallback itself failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
