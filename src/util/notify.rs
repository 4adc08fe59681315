//! Fire-and-forget toast notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one [`Notifier`]. Any view can call it without knowing
//! whether a toaster is mounted; auto-dismissal runs on a local timer task in
//! the browser build.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use access::AuthError;
use leptos::prelude::*;

use crate::state::error::ActionError;
use crate::state::toast::{ToastKind, ToastState};

#[derive(Clone, Copy, Debug)]
pub struct Notifier {
    toasts: RwSignal<ToastState>,
    duration_ms: u64,
}

impl Notifier {
    #[must_use]
    pub fn new(toasts: RwSignal<ToastState>, duration_ms: u64) -> Self {
        Self { toasts, duration_ms }
    }

    #[must_use]
    pub fn toasts(&self) -> RwSignal<ToastState> {
        self.toasts
    }

    /// Show a toast and schedule its dismissal. Returns the toast id, or
    /// `None` if the toast state is gone.
    pub fn notify(&self, kind: ToastKind, title: impl Into<String>, description: impl Into<String>) -> Option<u64> {
        let (title, description) = (title.into(), description.into());
        let id = self.toasts.try_update(|t| t.push(kind, title, description))?;
        self.schedule_dismiss(id);
        Some(id)
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) -> Option<u64> {
        self.notify(ToastKind::Success, title, description)
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) -> Option<u64> {
        self.notify(ToastKind::Error, title, description)
    }

    pub fn info(&self, title: impl Into<String>, description: impl Into<String>) -> Option<u64> {
        self.notify(ToastKind::Info, title, description)
    }

    pub fn dismiss(&self, id: u64) {
        let _ = self.toasts.try_update(|t| t.dismiss(id));
    }

    pub fn action_failed(&self, title: &str, err: &ActionError) -> Option<u64> {
        self.error(title, err.to_string())
    }

    /// Report an auth failure. Cancelled calls are silent.
    pub fn auth_failed(&self, title: &str, err: &AuthError) -> Option<u64> {
        if !err.is_user_facing() {
            log::debug!("suppressed auth toast: {err}");
            return None;
        }
        self.error(title, err.to_string())
    }

    fn schedule_dismiss(&self, id: u64) {
        #[cfg(feature = "csr")]
        {
            let notifier = *self;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(notifier.duration_ms)).await;
                notifier.dismiss(id);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, self.duration_ms);
        }
    }
}

/// The app-wide notifier from context.
pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}
