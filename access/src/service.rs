//! Async session operations over a shared store.
//!
//! DESIGN
//! ======
//! The store is borrowed only inside synchronous closures ([`SessionCell`]),
//! never across an `.await`. A call takes a ticket, awaits the backend with no
//! borrow held, then hands the outcome back to the store, which decides
//! whether the ticket is still current.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::backend::{AuthBackend, LoginRequest, SignupProfile};
use crate::error::AuthError;
use crate::session::{LoginTicket, Session, SessionStore};

/// Shared, mutable access to a [`SessionStore`].
///
/// Returns `None` when the store no longer exists (for example, a reactive
/// owner was disposed); in-flight calls then resolve as cancelled.
pub trait SessionCell {
    fn with_store<R>(&self, f: impl FnOnce(&mut SessionStore) -> R) -> Option<R>;
}

impl SessionCell for Rc<RefCell<SessionStore>> {
    fn with_store<R>(&self, f: impl FnOnce(&mut SessionStore) -> R) -> Option<R> {
        let mut store = self.try_borrow_mut().ok()?;
        Some(f(&mut store))
    }
}

/// Login, signup, and logout against a backend, writing into a session cell.
#[derive(Clone, Debug)]
pub struct SessionService<C, B> {
    cell: C,
    backend: B,
}

impl<C: SessionCell, B: AuthBackend> SessionService<C, B> {
    pub fn new(cell: C, backend: B) -> Self {
        Self { cell, backend }
    }

    pub fn cell(&self) -> &C {
        &self.cell
    }

    /// Authenticate and install the resulting session.
    ///
    /// # Errors
    ///
    /// The backend's error, or `Cancelled` if the call was superseded before
    /// it resolved.
    pub async fn login(&self, request: LoginRequest) -> Result<Session, AuthError> {
        let ticket = self.start()?;
        log::info!("login started for {}", request.email.trim());
        let outcome = self.backend.login(request).await;
        self.finish(ticket, outcome)
    }

    /// Register and immediately install the resulting session.
    ///
    /// # Errors
    ///
    /// The backend's error (usually `Validation`), or `Cancelled`.
    pub async fn signup(&self, profile: SignupProfile) -> Result<Session, AuthError> {
        let ticket = self.start()?;
        log::info!("signup started for {}", profile.email.trim());
        let outcome = self.backend.signup(profile).await;
        self.finish(ticket, outcome)
    }

    /// Clear the session and cancel any in-flight call. Idempotent.
    pub fn logout(&self) -> bool {
        self.cell.with_store(SessionStore::logout).unwrap_or(false)
    }

    /// Abandon the in-flight call, if any, keeping the current session.
    pub fn cancel_pending(&self) -> bool {
        let cancelled = self.cell.with_store(SessionStore::cancel_pending).unwrap_or(false);
        if cancelled {
            log::info!("pending login cancelled");
        }
        cancelled
    }

    fn start(&self) -> Result<LoginTicket, AuthError> {
        self.cell.with_store(SessionStore::begin).ok_or(AuthError::Cancelled)
    }

    fn finish(&self, ticket: LoginTicket, outcome: Result<Session, AuthError>) -> Result<Session, AuthError> {
        let failure = outcome.as_ref().err().map(ToString::to_string);
        let resolved = self
            .cell
            .with_store(|store| store.resolve(ticket, outcome))
            .unwrap_or(Err(AuthError::Cancelled));
        if let Some(e) = failure {
            log::log!(failure_level(&resolved), "auth call failed: {e}");
        }
        resolved
    }
}

/// Superseded calls are expected noise; only a failure the user sees is a
/// warning.
fn failure_level(resolved: &Result<Session, AuthError>) -> log::Level {
    if matches!(resolved, Err(AuthError::Cancelled)) {
        log::Level::Debug
    } else {
        log::Level::Warn
    }
}
