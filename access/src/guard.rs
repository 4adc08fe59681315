//! Route guard: decides whether a navigation renders, waits, or redirects.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::Route;
use crate::session::SessionStore;

/// Why a gated navigation was redirected. Surfaced only for logging; the user
/// just lands somewhere else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectReason {
    Unauthenticated,
    WrongRole,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested view.
    Render,
    /// A login is in flight; show a spinner and decide again once it settles.
    Pending,
    Redirect { to: String, reason: RedirectReason },
    /// No such route. Never resolves to a gated view.
    NotFound,
}

/// Evaluate the guard for `route` against the current session state.
///
/// Public routes render regardless of `loading`. Gated routes block while a
/// login is in flight so a view never flashes before the session settles.
#[must_use]
pub fn decide(route: &Route, store: &SessionStore) -> GuardDecision {
    if matches!(route, Route::NotFound(_)) {
        return GuardDecision::NotFound;
    }
    let Some(required) = route.required_role() else {
        return GuardDecision::Render;
    };
    if store.is_loading() {
        return GuardDecision::Pending;
    }
    let decision = match store.role() {
        None => GuardDecision::Redirect { to: Route::LOGIN_PATH.to_owned(), reason: RedirectReason::Unauthenticated },
        Some(role) if role != required => {
            GuardDecision::Redirect { to: role.dashboard_path(), reason: RedirectReason::WrongRole }
        }
        Some(_) => GuardDecision::Render,
    };
    if let GuardDecision::Redirect { to, reason } = &decision {
        log::debug!("guard redirect {} -> {to} ({reason:?})", route.path());
    }
    decision
}

/// Convenience wrapper that parses `path` first.
#[must_use]
pub fn decide_path(path: &str, store: &SessionStore) -> GuardDecision {
    decide(&Route::parse(path), store)
}
