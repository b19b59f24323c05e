//! Account administration commands.
//!
//! Role changes go through the identity service, so every invariant applies
//! to the CLI too: the session must belong to a superuser, and a superuser
//! cannot change their own role.

use thiserror::Error;
use tracing::info;

use marigold_core::Role;
use marigold_store::services::{IdentityError, IdentityService};

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Invalid role.
    #[error("Invalid role: {0}. Valid roles: user, admin, superuser")]
    InvalidRole(String),

    /// No registered user has the given email.
    #[error("No user found with email: {0}")]
    UnknownEmail(String),

    /// Identity service error.
    #[error(transparent)]
    Identity(#[from] IdentityError),
}

/// Change a user's role, addressed by email.
///
/// # Errors
///
/// Returns an error for an unknown role or email, or when the identity
/// service rejects the change.
pub fn set_role(email: &str, role: &str) -> Result<(), Box<dyn std::error::Error>> {
    let role: Role = role
        .parse()
        .map_err(|_| AdminError::InvalidRole(role.to_owned()))?;

    let (store, _config) = super::open_store()?;
    let identity = IdentityService::new(store);

    let target = identity
        .users()
        .map_err(AdminError::Identity)?
        .into_iter()
        .find(|u| u.email.as_str() == email)
        .ok_or_else(|| AdminError::UnknownEmail(email.to_owned()))?;

    identity
        .change_role(target.id, role)
        .map_err(AdminError::Identity)?;
    info!(user_id = %target.id, role = %role, "role updated");
    Ok(())
}
