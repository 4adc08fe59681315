use super::*;
use crate::role::Role;
use crate::session::Session;

fn store_as(role: Role) -> SessionStore {
    let mut store = SessionStore::default();
    store.set(Session::new("tester", "a@b.com", role));
    store
}

fn redirect(to: &str, reason: RedirectReason) -> GuardDecision {
    GuardDecision::Redirect { to: to.to_owned(), reason }
}

const GATED: [&str; 13] = [
    "/donor/dashboard",
    "/donor/log-food",
    "/donor/matches",
    "/donor/schedule",
    "/donor/impact",
    "/donor/settings",
    "/recipient/dashboard",
    "/recipient/search",
    "/recipient/schedule",
    "/recipient/impact",
    "/recipient/settings",
    "/recipient/support",
    "/recipient/request/7",
];

// =============================================================
// Public routes
// =============================================================

#[test]
fn public_routes_render_for_everyone() {
    let stores = [SessionStore::default(), store_as(Role::Donor), store_as(Role::Recipient)];
    for store in &stores {
        for path in ["/", "/login", "/signup", "/community"] {
            assert_eq!(decide_path(path, store), GuardDecision::Render, "{path}");
        }
    }
}

#[test]
fn public_routes_render_while_loading() {
    let mut store = SessionStore::default();
    let _ticket = store.begin();
    assert_eq!(decide_path("/login", &store), GuardDecision::Render);
}

// =============================================================
// Unauthenticated
// =============================================================

#[test]
fn no_session_redirects_to_login() {
    let store = SessionStore::default();
    assert_eq!(
        decide_path("/donor/dashboard", &store),
        redirect("/login", RedirectReason::Unauthenticated)
    );
}

#[test]
fn logout_then_any_gated_path_goes_to_login() {
    let mut store = store_as(Role::Donor);
    store.logout();
    for path in GATED {
        assert_eq!(decide_path(path, &store), redirect("/login", RedirectReason::Unauthenticated), "{path}");
    }
}

// =============================================================
// Role mismatch
// =============================================================

#[test]
fn donor_visiting_recipient_dashboard_goes_to_donor_dashboard() {
    let store = store_as(Role::Donor);
    assert_eq!(
        decide_path("/recipient/dashboard", &store),
        redirect("/donor/dashboard", RedirectReason::WrongRole)
    );
}

#[test]
fn recipient_visiting_donor_settings_goes_to_recipient_dashboard() {
    let store = store_as(Role::Recipient);
    assert_eq!(
        decide_path("/donor/settings", &store),
        redirect("/recipient/dashboard", RedirectReason::WrongRole)
    );
}

#[test]
fn mismatched_role_never_renders() {
    for role in Role::ALL {
        let store = store_as(role);
        for path in GATED {
            let route = Route::parse(path);
            if route.required_role() != Some(role) {
                assert_ne!(decide(&route, &store), GuardDecision::Render, "{role} rendered {path}");
            }
        }
    }
}

// =============================================================
// Matching role
// =============================================================

#[test]
fn donor_can_open_log_food() {
    let store = store_as(Role::Donor);
    assert_eq!(decide_path("/donor/log-food", &store), GuardDecision::Render);
}

#[test]
fn matching_role_renders_every_own_page() {
    for role in Role::ALL {
        let store = store_as(role);
        for path in GATED.iter().filter(|p| p.starts_with(&format!("/{role}/"))) {
            assert_eq!(decide_path(path, &store), GuardDecision::Render, "{path}");
        }
    }
}

// =============================================================
// Loading and unknown paths
// =============================================================

#[test]
fn gated_route_is_pending_while_login_in_flight() {
    let mut store = SessionStore::default();
    let _ticket = store.begin();
    assert_eq!(decide_path("/donor/dashboard", &store), GuardDecision::Pending);
}

#[test]
fn pending_resolves_once_login_settles() {
    let mut store = SessionStore::default();
    let ticket = store.begin();
    store.resolve(ticket, Ok(Session::new("r", "r@x.org", Role::Recipient))).unwrap();
    assert_eq!(decide_path("/recipient/schedule", &store), GuardDecision::Render);
}

#[test]
fn paths_for_unsupported_roles_are_not_found() {
    for store in [SessionStore::default(), store_as(Role::Donor), store_as(Role::Recipient)] {
        assert_eq!(decide_path("/volunteer/dashboard", &store), GuardDecision::NotFound);
        assert_eq!(decide_path("/admin", &store), GuardDecision::NotFound);
    }
}
