//! Identity and session integration tests.

#![allow(clippy::unwrap_used)]

use marigold_core::{Role, UserId};
use marigold_store::Store;
use marigold_store::fixtures;
use marigold_store::services::{IdentityError, IdentityService};

fn service() -> IdentityService {
    IdentityService::new(Store::in_memory())
}

#[test]
fn registration_assigns_unique_ids_and_appends() {
    let identity = service();

    let jane = identity.register("Jane", "jane@example.com", "pw1").unwrap();
    let john = identity.register("John", "john@example.com", "pw2").unwrap();

    assert_eq!(jane.id, UserId::new(1));
    assert_eq!(john.id, UserId::new(2));
    assert_eq!(jane.role, Role::User);

    let users = identity.users().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users.first().unwrap().id, jane.id);
    assert_eq!(users.last().unwrap().id, john.id);
}

#[test]
fn duplicate_email_always_fails_regardless_of_other_fields() {
    let identity = service();
    identity.register("Jane", "jane@example.com", "pw1").unwrap();

    let err = identity
        .register("Someone Else", "jane@example.com", "different-pw")
        .unwrap_err();
    assert!(matches!(err, IdentityError::DuplicateEmail));

    // Exact, case-sensitive matching: a different casing is a new account.
    assert!(identity.register("Jane", "Jane@example.com", "pw1").is_ok());
}

#[test]
fn registration_does_not_sign_in() {
    let identity = service();
    identity.register("Jane", "jane@example.com", "pw1").unwrap();
    assert!(identity.current_session().unwrap().is_none());
}

#[test]
fn login_requires_exact_credentials() {
    let identity = service();
    identity.register("Jane", "jane@example.com", "pw1").unwrap();

    assert!(matches!(
        identity.login("jane@example.com", "wrong").unwrap_err(),
        IdentityError::InvalidCredentials
    ));
    assert!(matches!(
        identity.login("nobody@example.com", "pw1").unwrap_err(),
        IdentityError::InvalidCredentials
    ));

    let user = identity.login("jane@example.com", "pw1").unwrap();
    assert_eq!(identity.current_session().unwrap().unwrap().id, user.id);
}

#[test]
fn logout_is_idempotent() {
    let identity = service();
    identity.register("Jane", "jane@example.com", "pw1").unwrap();
    identity.login("jane@example.com", "pw1").unwrap();

    identity.logout().unwrap();
    assert!(identity.current_session().unwrap().is_none());
    identity.logout().unwrap();
}

#[test]
fn role_predicates_are_exact_and_membership() {
    let identity = service();
    fixtures::seed_default_users(&identity).unwrap();

    // Signed out: everything is false.
    assert!(!identity.has_role(Role::User).unwrap());
    assert!(!identity.has_any_role(&[Role::Admin, Role::Superuser]).unwrap());

    identity
        .login("admin@example.com", fixtures::DEFAULT_PASSWORD)
        .unwrap();

    assert!(identity.has_role(Role::Admin).unwrap());
    // Exact match, not a hierarchy: an admin is not a superuser.
    assert!(!identity.has_role(Role::Superuser).unwrap());
    assert!(identity.has_any_role(&[Role::Admin, Role::Superuser]).unwrap());
    assert!(!identity.has_any_role(&[Role::Superuser]).unwrap());
}

#[test]
fn change_role_is_superuser_only() {
    let identity = service();
    let users = fixtures::seed_default_users(&identity).unwrap();
    let regular = users.last().unwrap().id;

    // An admin caller is forbidden.
    identity
        .login("admin@example.com", fixtures::DEFAULT_PASSWORD)
        .unwrap();
    assert!(matches!(
        identity.change_role(regular, Role::Admin).unwrap_err(),
        IdentityError::Forbidden
    ));

    // So is a signed-out caller.
    identity.logout().unwrap();
    assert!(matches!(
        identity.change_role(regular, Role::Admin).unwrap_err(),
        IdentityError::Forbidden
    ));

    // A superuser succeeds and the change lands in the registry.
    let superuser = identity
        .login("super@example.com", fixtures::DEFAULT_PASSWORD)
        .unwrap();
    identity.change_role(regular, Role::Admin).unwrap();
    let updated = identity
        .users()
        .unwrap()
        .into_iter()
        .find(|u| u.id == regular)
        .unwrap();
    assert_eq!(updated.role, Role::Admin);

    // But never on their own account.
    assert!(matches!(
        identity.change_role(superuser.id, Role::Admin).unwrap_err(),
        IdentityError::SelfRoleChange
    ));

    // And unknown targets are reported as such.
    assert!(matches!(
        identity.change_role(UserId::new(999), Role::Admin).unwrap_err(),
        IdentityError::NotFound
    ));
}

#[test]
fn change_password_updates_registry_and_session_snapshot() {
    let identity = service();
    let jane = identity.register("Jane", "jane@example.com", "old-pw").unwrap();
    identity.login("jane@example.com", "old-pw").unwrap();

    assert!(matches!(
        identity
            .change_password(jane.id, "wrong-pw", "new-pw")
            .unwrap_err(),
        IdentityError::InvalidCredentials
    ));

    identity.change_password(jane.id, "old-pw", "new-pw").unwrap();

    // The session snapshot now carries the new credential.
    let session = identity.current_session().unwrap().unwrap();
    assert_eq!(session.password, "new-pw");

    // And the registry entry authenticates with it.
    identity.logout().unwrap();
    assert!(identity.login("jane@example.com", "old-pw").is_err());
    identity.login("jane@example.com", "new-pw").unwrap();
}

#[test]
fn change_password_for_other_user_leaves_session_alone() {
    let identity = service();
    let jane = identity.register("Jane", "jane@example.com", "pw-jane").unwrap();
    identity.register("John", "john@example.com", "pw-john").unwrap();
    identity.login("john@example.com", "pw-john").unwrap();

    identity.change_password(jane.id, "pw-jane", "rotated").unwrap();

    let session = identity.current_session().unwrap().unwrap();
    assert_eq!(session.email.as_str(), "john@example.com");
    assert_eq!(session.password, "pw-john");
}
