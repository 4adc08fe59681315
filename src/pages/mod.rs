//! Top-level route pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public pages mount directly. Role pages under `donor` and `recipient` are
//! wrapped in `components::gate::Gate` by the router in `app.rs`, so they can
//! assume a session of the right role exists while they render.

pub mod community;
pub mod donor;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod notifications;
pub mod recipient;
pub mod signup;
