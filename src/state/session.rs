//! Reactive handle to the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `SessionContext` and provides it, together with an
//! [`AppSessionService`], through Leptos context. Views read `store` for
//! role-conditional rendering; only the service writes.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use access::service::{SessionCell, SessionService};
use access::{Role, Session, SessionStore};
use leptos::prelude::*;

use crate::net::auth::SimulatedAuthBackend;

pub type AppSessionService = SessionService<SessionContext, SimulatedAuthBackend>;

#[derive(Clone, Copy, Debug)]
pub struct SessionContext(pub RwSignal<SessionStore>);

impl SessionContext {
    #[must_use]
    pub fn new() -> Self {
        Self(RwSignal::new(SessionStore::default()))
    }

    /// Reactive snapshot of the current session.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.0.with(|store| store.session().cloned())
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.0.with(SessionStore::role)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.0.with(SessionStore::is_loading)
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionCell for SessionContext {
    fn with_store<R>(&self, f: impl FnOnce(&mut SessionStore) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}
