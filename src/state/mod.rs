//! Application state types shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is created once in `App` and provided via Leptos context:
//! the session, toasts, preferences, and the in-memory view models (listings,
//! pickups, ...). The models are plain data wrapped in an `RwSignal`, so their
//! transitions are unit tested without a reactive runtime. All of it resets on
//! reload except preferences and the log-food draft.

pub mod availability;
pub mod community;
pub mod donations;
pub mod error;
pub mod impact;
pub mod listings;
pub mod matches;
pub mod notifications;
pub mod pickups;
pub mod prefs;
pub mod requests;
pub mod session;
pub mod support;
pub mod toast;
