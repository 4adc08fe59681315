//! Notification inbox: match alerts, pickup reminders, system notices.
//!
//! The inbox starts with the recent page loaded. Older entries are held back
//! until `load_older`, which appends them once.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use super::error::ActionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Match,
    Pickup,
    Donation,
    System,
    Urgent,
}

impl NotificationKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Pickup => "pickup",
            Self::Donation => "donation",
            Self::System => "system",
            Self::Urgent => "urgent",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Relative time as displayed ("5 minutes ago", "Yesterday").
    pub received: String,
    pub unread: bool,
    pub urgent: bool,
}

impl Notification {
    /// CSS accent for the card edge. Urgency wins over the kind.
    #[must_use]
    pub fn accent(&self) -> &'static str {
        if self.urgent { "urgent" } else { self.kind.as_str() }
    }

    /// Received within the current day (minutes or hours ago).
    #[must_use]
    pub fn is_today(&self) -> bool {
        self.received.contains("minute") || self.received.contains("hour")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NotificationsState {
    items: Vec<Notification>,
    older: Vec<Notification>,
}

impl Default for NotificationsState {
    fn default() -> Self {
        Self::new(recent_fixtures(), older_fixtures())
    }
}

impl NotificationsState {
    #[must_use]
    pub fn new(items: Vec<Notification>, older: Vec<Notification>) -> Self {
        Self { items, older }
    }

    /// Loaded notifications, newest first.
    #[must_use]
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    #[must_use]
    pub fn has_older(&self) -> bool {
        !self.older.is_empty()
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| n.unread).count()
    }

    #[must_use]
    pub fn urgent_count(&self) -> usize {
        self.items.iter().filter(|n| n.urgent).count()
    }

    #[must_use]
    pub fn today_count(&self) -> usize {
        self.items.iter().filter(|n| n.is_today()).count()
    }

    /// # Errors
    ///
    /// `NotFound` when no loaded notification has `id`.
    pub fn mark_read(&mut self, id: u32) -> Result<Notification, ActionError> {
        let found = self.items.iter_mut().find(|n| n.id == id).ok_or(ActionError::NotFound(id))?;
        found.unread = false;
        Ok(found.clone())
    }

    /// Returns how many were unread.
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for n in self.items.iter_mut().filter(|n| n.unread) {
            n.unread = false;
            changed += 1;
        }
        changed
    }

    /// Append the held-back page. Returns how many were added; zero once
    /// everything is loaded.
    pub fn load_older(&mut self) -> usize {
        let added = self.older.len();
        self.items.append(&mut self.older);
        if added > 0 {
            log::debug!("loaded {added} older notifications");
        }
        added
    }
}

fn notification(
    id: u32,
    kind: NotificationKind,
    title: &str,
    message: &str,
    received: &str,
    unread: bool,
    urgent: bool,
) -> Notification {
    Notification {
        id,
        kind,
        title: title.to_owned(),
        message: message.to_owned(),
        received: received.to_owned(),
        unread,
        urgent,
    }
}

#[must_use]
pub fn recent_fixtures() -> Vec<Notification> {
    use NotificationKind::{Donation, Match, Pickup, System, Urgent};
    vec![
        notification(
            1,
            Match,
            "New Food Match Available",
            "Green Valley Market has fresh vegetables available for pickup today",
            "5 minutes ago",
            true,
            false,
        ),
        notification(
            2,
            Pickup,
            "Pickup Reminder",
            "Don't forget your scheduled pickup at Sunset Bakery at 6:30 PM today",
            "1 hour ago",
            true,
            true,
        ),
        notification(
            3,
            System,
            "Profile Update Required",
            "Please update your contact information to continue receiving notifications",
            "2 hours ago",
            false,
            false,
        ),
        notification(
            4,
            Donation,
            "Donation Confirmed",
            "Your food donation request has been confirmed by City Restaurant",
            "Yesterday",
            false,
            false,
        ),
        notification(
            5,
            Urgent,
            "Urgent: Food Expiring Soon",
            "Farm Fresh Co. has dairy products that need immediate pickup",
            "Yesterday",
            false,
            true,
        ),
    ]
}

#[must_use]
pub fn older_fixtures() -> Vec<Notification> {
    vec![
        notification(
            6,
            NotificationKind::Match,
            "Weekly Impact Report",
            "You've helped distribute 45kg of food this week, preventing waste and feeding 150 people",
            "3 days ago",
            false,
            false,
        ),
        notification(
            7,
            NotificationKind::System,
            "New Feature: Calendar Integration",
            "You can now sync your pickup schedule with your personal calendar",
            "1 week ago",
            false,
            false,
        ),
    ]
}
