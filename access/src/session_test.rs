use super::*;

fn donor() -> Session {
    Session::new("alice", "alice@example.com", Role::Donor)
}

// =============================================================
// Defaults and derived state
// =============================================================

#[test]
fn default_store_is_empty_and_idle() {
    let store = SessionStore::default();
    assert!(store.session().is_none());
    assert!(!store.is_authenticated());
    assert!(!store.is_loading());
    assert_eq!(store.role(), None);
}

#[test]
fn authenticated_iff_session_present() {
    let mut store = SessionStore::default();
    store.set(donor());
    assert!(store.is_authenticated());
    assert_eq!(store.role(), Some(Role::Donor));
    store.clear();
    assert!(!store.is_authenticated());
}

#[test]
fn new_sessions_get_distinct_ids() {
    assert_ne!(donor().user_id, donor().user_id);
}

#[test]
fn session_with_unknown_role_does_not_deserialize() {
    let raw = r#"{"user_id":"u1","display_name":"v","email":"v@x.org","role":"volunteer"}"#;
    assert!(serde_json::from_str::<Session>(raw).is_err());
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_twice_is_harmless() {
    let mut store = SessionStore::default();
    store.set(donor());
    assert!(store.logout());
    assert!(store.session().is_none());
    assert!(!store.logout());
    assert!(store.session().is_none());
}

// =============================================================
// Tickets
// =============================================================

#[test]
fn resolve_current_ticket_sets_session() {
    let mut store = SessionStore::default();
    let ticket = store.begin();
    assert!(store.is_loading());

    let session = store.resolve(ticket, Ok(donor())).unwrap();
    assert_eq!(session.role, Role::Donor);
    assert!(!store.is_loading());
    assert_eq!(store.session(), Some(&session));
}

#[test]
fn resolve_failure_clears_loading_and_keeps_session() {
    let mut store = SessionStore::default();
    let existing = donor();
    store.set(existing.clone());

    let ticket = store.begin();
    let err = store.resolve(ticket, Err(AuthError::InvalidCredentials)).unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
    assert!(!store.is_loading());
    assert_eq!(store.session(), Some(&existing));
}

#[test]
fn logout_during_login_discards_resolution() {
    let mut store = SessionStore::default();
    let ticket = store.begin();
    store.logout();

    assert_eq!(store.resolve(ticket, Ok(donor())), Err(AuthError::Cancelled));
    assert!(store.session().is_none());
    assert!(!store.is_loading());
}

#[test]
fn second_login_supersedes_first() {
    let mut store = SessionStore::default();
    let first = store.begin();
    let second = store.begin();

    let recipient = Session::new("bob", "bob@example.com", Role::Recipient);
    store.resolve(second, Ok(recipient.clone())).unwrap();
    assert_eq!(store.resolve(first, Ok(donor())), Err(AuthError::Cancelled));
    assert_eq!(store.session(), Some(&recipient));
}

#[test]
fn cancel_pending_only_acts_while_loading() {
    let mut store = SessionStore::default();
    assert!(!store.cancel_pending());

    let ticket = store.begin();
    assert!(store.cancel_pending());
    assert!(!store.is_loading());
    assert!(!store.is_current(ticket));
}

#[test]
fn direct_set_supersedes_pending_login() {
    let mut store = SessionStore::default();
    let ticket = store.begin();
    store.set(donor());
    assert!(!store.is_loading());
    assert_eq!(
        store.resolve(ticket, Ok(Session::new("x", "x@y.z", Role::Recipient))),
        Err(AuthError::Cancelled)
    );
    assert_eq!(store.role(), Some(Role::Donor));
}
