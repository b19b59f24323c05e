//! Identity error types.

use thiserror::Error;

use crate::kv::StoreError;

/// Errors that can occur during identity and session operations.
///
/// The messages are user-facing; presentation layers display them verbatim.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] marigold_core::EmailError),

    /// A user with this email is already registered.
    #[error("a user with this email already exists")]
    DuplicateEmail,

    /// No registry entry matches the given email and password.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The caller is not allowed to perform this operation.
    #[error("insufficient permissions to change roles")]
    Forbidden,

    /// A user may not change their own role.
    #[error("you cannot change your own role")]
    SelfRoleChange,

    /// No user with the given ID exists.
    #[error("user not found")]
    NotFound,

    /// Key-value substrate failure.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
