//! User registry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use marigold_core::{Email, Role, UserId};

/// A registered user.
///
/// The password credential is stored as a plain string - the store domain
/// trusts its own process and does not hash or encrypt credentials. The
/// `Debug` impl still redacts it so it does not leak into logs.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique, monotonically assigned ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address, unique across the registry.
    pub email: Email,
    /// Password credential.
    pub password: String,
    /// Access role.
    pub role: Role,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .field("created_at", &self.created_at)
            .finish()
    }
}
