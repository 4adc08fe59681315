//! Scheduled pickups for both roles' Schedule pages.
//!
//! DESIGN
//! ======
//! Status moves forward only: `Pending`/`Scheduled`/`InProgress` may be
//! rescheduled, cancelled, or completed. `Completed` and `Cancelled` are
//! final and reject every further transition with `InvalidTransition`.

#[cfg(test)]
#[path = "pickups_test.rs"]
mod pickups_test;

use super::error::{ActionError, required};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickupStatus {
    Pending,
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl PickupStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Scheduled => "scheduled",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    #[must_use]
    pub fn is_final(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CompletionReport {
    pub notes: String,
    pub rating: u8,
    pub people_fed: u32,
    pub actual_quantity: String,
    pub share_story: bool,
}

impl CompletionReport {
    /// Build a report, clamping `rating` into `1..=5`.
    #[must_use]
    pub fn new(notes: &str, rating: u8, people_fed: u32, actual_quantity: &str, share_story: bool) -> Self {
        Self {
            notes: notes.trim().to_owned(),
            rating: rating.clamp(MIN_RATING, MAX_RATING),
            people_fed,
            actual_quantity: actual_quantity.trim().to_owned(),
            share_story,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pickup {
    pub id: u32,
    pub donor: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub items: Vec<String>,
    pub status: PickupStatus,
    pub report: Option<CompletionReport>,
}

/// Form contents of the "schedule new pickup" modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PickupRequest {
    pub donor: String,
    pub food_type: String,
    pub date: String,
    pub time: String,
    pub address: String,
    pub contact_phone: String,
    pub special_instructions: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PickupsState {
    pub items: Vec<Pickup>,
    next_id: u32,
}

impl Default for PickupsState {
    fn default() -> Self {
        Self::from_items(fixtures())
    }
}

impl PickupsState {
    #[must_use]
    pub fn from_items(items: Vec<Pickup>) -> Self {
        let next_id = items.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self { items, next_id }
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Pickup> {
        self.items.iter().find(|p| p.id == id)
    }

    /// Pickups that are neither completed nor cancelled.
    #[must_use]
    pub fn upcoming(&self) -> Vec<Pickup> {
        self.items.iter().filter(|p| !p.status.is_final()).cloned().collect()
    }

    #[must_use]
    pub fn count(&self, status: PickupStatus) -> usize {
        self.items.iter().filter(|p| p.status == status).count()
    }

    /// Add a new `Scheduled` pickup from the modal form.
    ///
    /// # Errors
    ///
    /// `Validation(MissingField)` naming the first blank required field.
    pub fn schedule(&mut self, request: &PickupRequest) -> Result<Pickup, ActionError> {
        self.book(request, PickupStatus::Scheduled)
    }

    /// Add a new pickup in `status`. Requests waiting on donor confirmation
    /// enter as `Pending`.
    ///
    /// # Errors
    ///
    /// `Validation(MissingField)` naming the first blank required field.
    pub fn book(&mut self, request: &PickupRequest, status: PickupStatus) -> Result<Pickup, ActionError> {
        let donor = required("donor", &request.donor)?;
        let food_type = required("food_type", &request.food_type)?;
        let date = required("date", &request.date)?;
        let time = required("time", &request.time)?;
        let location = required("address", &request.address)?;

        let pickup = Pickup {
            id: self.next_id,
            donor,
            date,
            time,
            location,
            items: vec![food_type],
            status,
            report: None,
        };
        self.next_id += 1;
        self.items.push(pickup.clone());
        log::info!("pickup {} booked as {}", pickup.id, status.as_str());
        Ok(pickup)
    }

    /// Move a pickup to a new date and time.
    ///
    /// # Errors
    ///
    /// `NotFound`, `Validation` for a blank date or time, or
    /// `InvalidTransition` when the pickup is already final.
    pub fn reschedule(&mut self, id: u32, date: &str, time: &str) -> Result<Pickup, ActionError> {
        let date = required("date", date)?;
        let time = required("time", time)?;
        let pickup = self.open_pickup(id, PickupStatus::Scheduled)?;
        pickup.date = date;
        pickup.time = time;
        pickup.status = PickupStatus::Scheduled;
        Ok(pickup.clone())
    }

    /// # Errors
    ///
    /// `NotFound`, or `InvalidTransition` when the pickup is already final.
    pub fn cancel(&mut self, id: u32) -> Result<Pickup, ActionError> {
        let pickup = self.open_pickup(id, PickupStatus::Cancelled)?;
        pickup.status = PickupStatus::Cancelled;
        log::info!("pickup {id} cancelled");
        Ok(pickup.clone())
    }

    /// # Errors
    ///
    /// `NotFound`, or `InvalidTransition` when the pickup is already final.
    pub fn mark_completed(&mut self, id: u32, report: CompletionReport) -> Result<Pickup, ActionError> {
        let pickup = self.open_pickup(id, PickupStatus::Completed)?;
        pickup.status = PickupStatus::Completed;
        pickup.report = Some(report);
        log::info!("pickup {id} completed");
        Ok(pickup.clone())
    }

    fn open_pickup(&mut self, id: u32, target: PickupStatus) -> Result<&mut Pickup, ActionError> {
        let pickup = self.items.iter_mut().find(|p| p.id == id).ok_or(ActionError::NotFound(id))?;
        if pickup.status.is_final() {
            return Err(ActionError::InvalidTransition { from: pickup.status.as_str(), to: target.as_str() });
        }
        Ok(pickup)
    }
}

fn pickup(id: u32, donor: &str, date: &str, time: &str, location: &str, items: &[&str], status: PickupStatus) -> Pickup {
    Pickup {
        id,
        donor: donor.to_owned(),
        date: date.to_owned(),
        time: time.to_owned(),
        location: location.to_owned(),
        items: items.iter().map(|s| (*s).to_owned()).collect(),
        status,
        report: None,
    }
}

#[must_use]
pub fn fixtures() -> Vec<Pickup> {
    vec![
        pickup(
            1,
            "Green Valley Market",
            "2024-03-20",
            "10:00 AM",
            "123 Main St, City",
            &["Fresh Produce", "Bakery Items"],
            PickupStatus::Scheduled,
        ),
        pickup(2, "Local Bakery", "2024-03-21", "2:30 PM", "456 Oak Ave, City", &["Bread", "Pastries"], PickupStatus::Pending),
        pickup(
            3,
            "Community Grocery",
            "2024-03-19",
            "9:00 AM",
            "789 Pine Rd, City",
            &["Canned Goods", "Dry Food"],
            PickupStatus::Completed,
        ),
    ]
}
