//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read app-wide state from Leptos context (session, toasts,
//! preferences, view models) and report outcomes through the notifier. Pure
//! form parsing lives in `forms` so it is testable without a DOM.

pub mod availability_modal;
pub mod forms;
pub mod gate;
pub mod impact_panel;
pub mod listing_card;
pub mod mark_completed_modal;
pub mod modal;
pub mod navigation;
pub mod pickup_card;
pub mod pickup_schedule;
pub mod reschedule_modal;
pub mod schedule_pickup_modal;
pub mod settings_panel;
pub mod stat_card;
pub mod toaster;
