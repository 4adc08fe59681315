//! Transient toast notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `ToastState` is provided at the app root. Views push through
//! `util::notify`, which also schedules the auto-dismiss; the `Toaster`
//! component renders whatever is in `items`, oldest first.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::config::DEFAULT_TOAST_LIMIT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Info => "toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug)]
pub struct ToastState {
    items: Vec<Toast>,
    next_id: u64,
    limit: usize,
}

impl Default for ToastState {
    fn default() -> Self {
        Self::with_limit(DEFAULT_TOAST_LIMIT)
    }
}

impl ToastState {
    /// `limit` is clamped to at least one visible toast.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self { items: Vec::new(), next_id: 1, limit: limit.max(1) }
    }

    #[must_use]
    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    /// Append a toast, evicting the oldest ones beyond the limit. Returns the
    /// new toast's id.
    pub fn push(&mut self, kind: ToastKind, title: impl Into<String>, description: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, kind, title: title.into(), description: description.into() });
        if self.items.len() > self.limit {
            let overflow = self.items.len() - self.limit;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove a toast. Unknown or already-dismissed ids are ignored.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
