//! Session model and route protection for the Food Bridge client.
//!
//! This crate owns "who is logged in" and "may this path render", independent
//! of any UI framework. The Leptos app in the repository root wraps these types
//! in reactive signals; tests drive them directly.
//!
//! DESIGN
//! ======
//! - [`role::Role`] is a closed enum; role strings are parsed once at the edge.
//! - [`session::SessionStore`] is plain data with synchronous transitions.
//!   Async login bookkeeping is ticket based so superseded calls are dropped.
//! - [`service::SessionService`] drives an [`backend::AuthBackend`] against any
//!   [`service::SessionCell`] (an `Rc<RefCell<_>>` in tests, a signal in the UI).
//! - [`routes::Route`] is the single route table; [`guard::decide`] is the
//!   single guard.

pub mod backend;
pub mod error;
pub mod guard;
pub mod role;
pub mod routes;
pub mod service;
pub mod session;

pub use error::{AuthError, ValidationError};
pub use guard::{GuardDecision, RedirectReason};
pub use role::Role;
pub use routes::Route;
pub use session::{Session, SessionStore};
