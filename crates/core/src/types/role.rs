//! User roles for access guarding.

use serde::{Deserialize, Serialize};

/// Access role assigned to a user.
///
/// Roles form two independent access predicates rather than a linear
/// hierarchy: membership checks (e.g. "admin or superuser") and exact-match
/// checks (e.g. "superuser only"). Role changes themselves are gated on the
/// exact `Superuser` role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular customer account. The default for new registrations.
    #[default]
    User,
    /// Store management access.
    Admin,
    /// Full access, including role management for other users.
    Superuser,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
            Self::Superuser => write!(f, "superuser"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            "superuser" => Ok(Self::Superuser),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}
