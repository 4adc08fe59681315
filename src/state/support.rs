//! Recipient support tickets.

#[cfg(test)]
#[path = "support_test.rs"]
mod support_test;

use access::backend::normalize_email;

use super::error::{ActionError, ValidationError, required};

/// Issue categories offered by the support form, as `(value, label)`.
pub const ISSUE_TYPES: [(&str, &str); 4] = [
    ("pickup", "Pickup Issue"),
    ("donation", "Donation Quality"),
    ("account", "Account Issue"),
    ("other", "Other"),
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SupportTicketDraft {
    pub issue_type: String,
    pub subject: String,
    pub message: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupportTicket {
    pub reference: String,
    pub issue_type: String,
    pub subject: String,
    pub message: String,
    pub email: Option<String>,
}

/// Hands out ticket references for the lifetime of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupportDesk {
    next: u32,
}

impl Default for SupportDesk {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl SupportDesk {
    fn next_reference(&mut self) -> String {
        let reference = format!("FB-{:05}", self.next);
        self.next += 1;
        reference
    }
}

impl SupportTicketDraft {
    /// Validate the form and file it with `desk`.
    ///
    /// # Errors
    ///
    /// `MissingField` for a blank issue type, subject, or message, and
    /// `InvalidEmail` when a contact email is given but malformed.
    pub fn submit(&self, desk: &mut SupportDesk) -> Result<SupportTicket, ActionError> {
        let issue_type = required("issue_type", &self.issue_type)?;
        let subject = required("subject", &self.subject)?;
        let message = required("message", &self.message)?;
        let email = if self.email.trim().is_empty() {
            None
        } else {
            Some(normalize_email(&self.email).ok_or(ValidationError::InvalidEmail)?)
        };

        let ticket = SupportTicket { reference: desk.next_reference(), issue_type, subject, message, email };
        log::info!("support ticket {} filed", ticket.reference);
        Ok(ticket)
    }
}
