//! Recipient requests matched to the current donor.

#[cfg(test)]
#[path = "matches_test.rs"]
mod matches_test;

use super::error::ActionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchStatus {
    Pending,
    Accepted,
    Declined,
}

impl MatchStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Match {
    pub id: u32,
    pub recipient: String,
    pub distance_km: f64,
    pub food_type: String,
    pub quantity: String,
    pub urgency: Urgency,
    pub time_window: String,
    pub status: MatchStatus,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MatchesState {
    pub items: Vec<Match>,
}

impl Default for MatchesState {
    fn default() -> Self {
        Self { items: fixtures() }
    }
}

impl MatchesState {
    /// Pending matches, most urgent first, then nearest.
    #[must_use]
    pub fn pending(&self) -> Vec<Match> {
        let mut out: Vec<Match> = self.items.iter().filter(|m| m.status == MatchStatus::Pending).cloned().collect();
        out.sort_by(|a, b| a.urgency.cmp(&b.urgency).then(a.distance_km.total_cmp(&b.distance_km)));
        out
    }

    /// # Errors
    ///
    /// `NotFound`, or `InvalidTransition` unless the match is pending.
    pub fn accept(&mut self, id: u32) -> Result<Match, ActionError> {
        self.respond(id, MatchStatus::Accepted)
    }

    /// # Errors
    ///
    /// `NotFound`, or `InvalidTransition` unless the match is pending.
    pub fn decline(&mut self, id: u32) -> Result<Match, ActionError> {
        self.respond(id, MatchStatus::Declined)
    }

    fn respond(&mut self, id: u32, to: MatchStatus) -> Result<Match, ActionError> {
        let m = self.items.iter_mut().find(|m| m.id == id).ok_or(ActionError::NotFound(id))?;
        if m.status != MatchStatus::Pending {
            return Err(ActionError::InvalidTransition { from: m.status.as_str(), to: to.as_str() });
        }
        m.status = to;
        log::info!("match {id} {}", to.as_str());
        Ok(m.clone())
    }
}

fn entry(id: u32, recipient: &str, distance_km: f64, food_type: &str, quantity: &str, urgency: Urgency, time_window: &str) -> Match {
    Match {
        id,
        recipient: recipient.to_owned(),
        distance_km,
        food_type: food_type.to_owned(),
        quantity: quantity.to_owned(),
        urgency,
        time_window: time_window.to_owned(),
        status: MatchStatus::Pending,
    }
}

#[must_use]
pub fn fixtures() -> Vec<Match> {
    vec![
        entry(1, "Community Food Bank", 2.5, "Fresh Produce", "25 kg", Urgency::High, "Today, 2:00 PM - 4:00 PM"),
        entry(2, "Homeless Shelter", 4.1, "Bakery Items", "15 kg", Urgency::Medium, "Tomorrow, 10:00 AM - 12:00 PM"),
        entry(3, "Youth Center", 3.2, "Canned Goods", "50 units", Urgency::Low, "Tomorrow, 3:00 PM - 5:00 PM"),
    ]
}
