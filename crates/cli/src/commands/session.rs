//! Session commands: login, logout, whoami.

use tracing::info;

use marigold_store::services::IdentityService;

/// Sign in and persist the session pointer.
///
/// # Errors
///
/// Returns an error for unknown credentials or a store failure.
pub fn login(email: &str, password: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (store, _config) = super::open_store()?;
    let identity = IdentityService::new(store);

    let user = identity.login(email, password)?;
    info!(user_id = %user.id, role = %user.role, "signed in as {}", user.name);
    Ok(())
}

/// Clear the session. Idempotent.
///
/// # Errors
///
/// Returns an error on a store failure.
pub fn logout() -> Result<(), Box<dyn std::error::Error>> {
    let (store, _config) = super::open_store()?;
    let identity = IdentityService::new(store);

    identity.logout()?;
    info!("signed out");
    Ok(())
}

/// Show the signed-in user, if any.
///
/// # Errors
///
/// Returns an error on a store failure.
pub fn whoami() -> Result<(), Box<dyn std::error::Error>> {
    let (store, _config) = super::open_store()?;
    let identity = IdentityService::new(store);

    match identity.current_session()? {
        Some(user) => info!(user_id = %user.id, role = %user.role, "signed in as {}", user.name),
        None => info!("not signed in"),
    }
    Ok(())
}
