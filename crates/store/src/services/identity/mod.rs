//! Identity and session management.
//!
//! Owns the user registry (`users`) and the session pointer
//! (`current_user`, `is_authenticated`). At most one session is active per
//! store; there is no expiry.

mod error;

pub use error::IdentityError;

use chrono::Utc;
use tracing::debug;

use marigold_core::{Email, Role, UserId};

use crate::Store;
use crate::kv::keys;
use crate::models::User;

/// Identity and session service.
///
/// Handles registration, login/logout, role predicates, and role and
/// password mutation.
#[derive(Debug, Clone)]
pub struct IdentityService {
    store: Store,
}

impl IdentityService {
    /// Create a new identity service over the shared store.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// All registered users, in registration order. Empty when the registry
    /// has never been seeded or written.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be read.
    pub fn users(&self) -> Result<Vec<User>, IdentityError> {
        Ok(self.store.get_json(keys::USERS)?.unwrap_or_default())
    }

    fn save_users(&self, users: &[User]) -> Result<(), IdentityError> {
        Ok(self.store.set_json(keys::USERS, &users)?)
    }

    /// Register a new user with the default `user` role.
    ///
    /// The new user is appended to the registry but NOT signed in.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::InvalidEmail` if the email does not parse.
    /// Returns `IdentityError::DuplicateEmail` if any existing user has the
    /// same email (exact, case-sensitive match).
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<User, IdentityError> {
        let email = Email::parse(email)?;

        let mut users = self.users()?;
        if users.iter().any(|u| u.email == email) {
            return Err(IdentityError::DuplicateEmail);
        }

        let next_id = users
            .iter()
            .map(|u| u.id.as_i32())
            .max()
            .map_or(1, |max| max + 1);

        let user = User {
            id: UserId::new(next_id),
            name: name.to_owned(),
            email,
            password: password.to_owned(),
            role: Role::User,
            created_at: Utc::now(),
        };

        users.push(user.clone());
        self.save_users(&users)?;

        debug!(user_id = %user.id, "registered user");
        Ok(user)
    }

    /// Sign a user in.
    ///
    /// On success the session pointer and the `is_authenticated` flag are
    /// persisted.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::InvalidCredentials` if no registry entry
    /// matches both the email and the password exactly.
    pub fn login(&self, email: &str, password: &str) -> Result<User, IdentityError> {
        let users = self.users()?;
        let user = users
            .into_iter()
            .find(|u| u.email.as_str() == email && u.password == password)
            .ok_or(IdentityError::InvalidCredentials)?;

        self.store.set_json(keys::CURRENT_USER, &user)?;
        self.store.set_json(keys::IS_AUTHENTICATED, &true)?;

        debug!(user_id = %user.id, "logged in");
        Ok(user)
    }

    /// The currently signed-in user, if any. Pure read.
    ///
    /// # Errors
    ///
    /// Returns an error if the session pointer cannot be read.
    pub fn current_session(&self) -> Result<Option<User>, IdentityError> {
        Ok(self.store.get_json(keys::CURRENT_USER)?)
    }

    /// Clear the session pointer and the `is_authenticated` flag.
    /// Idempotent: signing out while signed out is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the session keys cannot be removed.
    pub fn logout(&self) -> Result<(), IdentityError> {
        self.store.remove(keys::CURRENT_USER)?;
        self.store.remove(keys::IS_AUTHENTICATED)?;
        Ok(())
    }

    /// Whether the signed-in user's role is exactly `role`. False when
    /// signed out.
    ///
    /// # Errors
    ///
    /// Returns an error if the session pointer cannot be read.
    pub fn has_role(&self, role: Role) -> Result<bool, IdentityError> {
        Ok(self
            .current_session()?
            .is_some_and(|user| user.role == role))
    }

    /// Whether the signed-in user's role is one of `roles`. False when
    /// signed out.
    ///
    /// # Errors
    ///
    /// Returns an error if the session pointer cannot be read.
    pub fn has_any_role(&self, roles: &[Role]) -> Result<bool, IdentityError> {
        Ok(self
            .current_session()?
            .is_some_and(|user| roles.contains(&user.role)))
    }

    /// Change another user's role. Superuser only.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::Forbidden` unless the caller's session role
    /// is exactly `superuser`.
    /// Returns `IdentityError::NotFound` if no user has `target_id`.
    /// Returns `IdentityError::SelfRoleChange` if `target_id` is the
    /// caller's own ID - a superuser may not demote themself.
    pub fn change_role(&self, target_id: UserId, new_role: Role) -> Result<(), IdentityError> {
        let caller = self
            .current_session()?
            .filter(|user| user.role == Role::Superuser)
            .ok_or(IdentityError::Forbidden)?;

        let mut users = self.users()?;
        let target = users
            .iter_mut()
            .find(|u| u.id == target_id)
            .ok_or(IdentityError::NotFound)?;

        if target.id == caller.id {
            return Err(IdentityError::SelfRoleChange);
        }

        target.role = new_role;
        self.save_users(&users)?;

        debug!(user_id = %target_id, role = %new_role, "changed role");
        Ok(())
    }

    /// Change a user's password.
    ///
    /// Updates the registry entry and, when the target is the signed-in
    /// user, the session snapshot as well.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::NotFound` if no user has `user_id`.
    /// Returns `IdentityError::InvalidCredentials` if `old_password` does
    /// not match the stored credential.
    pub fn change_password(
        &self,
        user_id: UserId,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), IdentityError> {
        let mut users = self.users()?;
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(IdentityError::NotFound)?;

        if user.password != old_password {
            return Err(IdentityError::InvalidCredentials);
        }

        user.password = new_password.to_owned();
        let updated = user.clone();
        self.save_users(&users)?;

        if let Some(current) = self.current_session()?
            && current.id == user_id
        {
            self.store.set_json(keys::CURRENT_USER, &updated)?;
        }

        Ok(())
    }

    /// Replace the whole registry. Bootstrap/fixture concern, not part of
    /// the public contract.
    pub(crate) fn replace_registry(&self, users: &[User]) -> Result<(), IdentityError> {
        self.save_users(users)
    }
}
