//! Donations logged by the current donor.

#[cfg(test)]
#[path = "donations_test.rs"]
mod donations_test;

use serde::{Deserialize, Serialize};

use super::error::{ActionError, required};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DonationStatus {
    Scheduled,
    Completed,
}

impl DonationStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Donation {
    pub id: u32,
    pub food_type: String,
    pub quantity: String,
    pub expiry_date: String,
    pub description: String,
    pub storage_notes: String,
    pub recipient: Option<String>,
    pub status: DonationStatus,
}

/// Log-food form contents. Serialized so an unfinished form survives reload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DonationDraft {
    pub food_type: String,
    pub quantity: String,
    pub expiry_date: String,
    pub description: String,
    pub storage_notes: String,
}

impl DonationDraft {
    /// True when every field is blank; such a draft is not worth keeping.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        [&self.food_type, &self.quantity, &self.expiry_date, &self.description, &self.storage_notes]
            .iter()
            .all(|field| field.trim().is_empty())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DonationsState {
    items: Vec<Donation>,
    next_id: u32,
}

impl Default for DonationsState {
    fn default() -> Self {
        let items = fixtures();
        let next_id = items.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        Self { items, next_id }
    }
}

impl DonationsState {
    /// All donations, newest first.
    #[must_use]
    pub fn items(&self) -> &[Donation] {
        &self.items
    }

    #[must_use]
    pub fn recent(&self, n: usize) -> &[Donation] {
        &self.items[..n.min(self.items.len())]
    }

    /// Record a new donation at the top of the list.
    ///
    /// # Errors
    ///
    /// `Validation(MissingField)` for a blank food type, quantity, or expiry
    /// date.
    pub fn log(&mut self, draft: &DonationDraft) -> Result<Donation, ActionError> {
        let donation = Donation {
            id: self.next_id,
            food_type: required("food_type", &draft.food_type)?,
            quantity: required("quantity", &draft.quantity)?,
            expiry_date: required("expiry_date", &draft.expiry_date)?,
            description: draft.description.trim().to_owned(),
            storage_notes: draft.storage_notes.trim().to_owned(),
            recipient: None,
            status: DonationStatus::Scheduled,
        };
        self.next_id += 1;
        self.items.insert(0, donation.clone());
        log::info!("donation {} logged", donation.id);
        Ok(donation)
    }
}

fn donation(id: u32, food_type: &str, quantity: &str, recipient: &str, status: DonationStatus) -> Donation {
    Donation {
        id,
        food_type: food_type.to_owned(),
        quantity: quantity.to_owned(),
        expiry_date: String::new(),
        description: String::new(),
        storage_notes: String::new(),
        recipient: Some(recipient.to_owned()),
        status,
    }
}

#[must_use]
pub fn fixtures() -> Vec<Donation> {
    vec![
        donation(1, "Fresh Produce", "25 kg", "Community Food Bank", DonationStatus::Scheduled),
        donation(2, "Bakery Items", "15 kg", "Homeless Shelter", DonationStatus::Completed),
        donation(3, "Canned Goods", "50 units", "Youth Center", DonationStatus::Scheduled),
    ]
}
