//! The session record and its single-owner store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is the only writer of session state. Views read it; the route
//! guard reads it on every navigation; [`crate::service::SessionService`] is
//! the only caller of [`SessionStore::begin`] and [`SessionStore::resolve`].
//!
//! CANCELLATION
//! ============
//! Every async login/signup holds a [`LoginTicket`] stamped with the store's
//! generation. Anything that changes "who is logged in" (logout, a newer login,
//! an explicit cancel, a direct `set`) bumps the generation, so a late
//! resolution from an older ticket is discarded instead of overwriting newer
//! state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::role::Role;

/// The client-held record of the currently authenticated identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque identifier (v4 UUID string).
    pub user_id: String,
    pub display_name: String,
    pub email: String,
    pub role: Role,
}

impl Session {
    /// Build a session with a fresh random user id.
    #[must_use]
    pub fn new(display_name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: uuid::Uuid::new_v4().to_string(),
            display_name: display_name.into(),
            email: email.into(),
            role,
        }
    }
}

/// Proof that an async auth call was started against a particular generation
/// of the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoginTicket(u64);

/// Current session plus in-flight login bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStore {
    session: Option<Session>,
    loading: bool,
    generation: u64,
}

impl SessionStore {
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    /// True iff a session is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// True while a login or signup started with [`Self::begin`] is pending.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Install a session directly, superseding any pending login.
    pub fn set(&mut self, session: Session) {
        self.generation += 1;
        self.loading = false;
        self.session = Some(session);
    }

    /// Drop the session and any pending login. Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.loading = false;
        self.session = None;
    }

    /// Log out. Returns whether a session was actually present.
    pub fn logout(&mut self) -> bool {
        let had_session = self.session.is_some();
        self.clear();
        if had_session {
            log::info!("session cleared");
        }
        had_session
    }

    /// Start an async login/signup. Any earlier pending call is superseded.
    pub fn begin(&mut self) -> LoginTicket {
        self.generation += 1;
        self.loading = true;
        LoginTicket(self.generation)
    }

    #[must_use]
    pub fn is_current(&self, ticket: LoginTicket) -> bool {
        self.loading && ticket.0 == self.generation
    }

    /// Apply the outcome of the call that produced `ticket`.
    ///
    /// A stale ticket leaves the store untouched and yields
    /// [`AuthError::Cancelled`]. A failed current call clears `loading` and
    /// keeps whatever session was there before.
    ///
    /// # Errors
    ///
    /// Returns the call's own error, or `Cancelled` for a stale ticket.
    pub fn resolve(&mut self, ticket: LoginTicket, outcome: Result<Session, AuthError>) -> Result<Session, AuthError> {
        if !self.is_current(ticket) {
            log::debug!("discarding stale auth resolution (ticket {}, generation {})", ticket.0, self.generation);
            return Err(AuthError::Cancelled);
        }
        self.loading = false;
        let session = outcome?;
        log::info!("session established for {} as {}", session.email, session.role);
        self.session = Some(session.clone());
        Ok(session)
    }

    /// Abandon the pending login, if any, without touching the session.
    pub fn cancel_pending(&mut self) -> bool {
        if !self.loading {
            return false;
        }
        self.generation += 1;
        self.loading = false;
        true
    }
}
