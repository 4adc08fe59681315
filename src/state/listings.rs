//! Available food donations shown to recipients (search) and donors (matches).
//!
//! DESIGN
//! ======
//! Listings are an in-memory fixture held in one app-wide signal so a claim
//! made on the request page shows up in search. Claims are gone on reload.

#[cfg(test)]
#[path = "listings_test.rs"]
mod listings_test;

use super::error::ActionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingStatus {
    Available,
    Claimed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FoodListing {
    pub id: u32,
    pub title: String,
    pub donor: String,
    /// Where the donor hands the food over.
    pub location: String,
    pub food_type: String,
    pub quantity: String,
    pub distance_km: f64,
    pub expiry_date: String,
    pub pickup_time: String,
    pub description: String,
    pub status: ListingStatus,
}

/// Search criteria from the filter bar. Empty strings mean "any".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingFilter {
    pub query: String,
    pub food_type: String,
    pub max_distance_km: Option<f64>,
}

impl ListingFilter {
    #[must_use]
    pub fn matches(&self, listing: &FoodListing) -> bool {
        let query = self.query.trim().to_lowercase();
        let text_ok = query.is_empty()
            || [&listing.title, &listing.donor, &listing.description]
                .iter()
                .any(|field| field.to_lowercase().contains(&query));
        let type_ok = self.food_type.trim().is_empty() || listing.food_type.eq_ignore_ascii_case(self.food_type.trim());
        let distance_ok = self.max_distance_km.map_or(true, |max| listing.distance_km <= max);
        text_ok && type_ok && distance_ok
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListingsState {
    pub items: Vec<FoodListing>,
}

impl Default for ListingsState {
    fn default() -> Self {
        Self { items: fixtures() }
    }
}

impl ListingsState {
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&FoodListing> {
        self.items.iter().find(|l| l.id == id)
    }

    /// Listings passing `filter`, in fixture order.
    #[must_use]
    pub fn filter(&self, filter: &ListingFilter) -> Vec<FoodListing> {
        self.items.iter().filter(|l| filter.matches(l)).cloned().collect()
    }

    /// Distinct food types, in first-seen order, for the filter dropdown.
    #[must_use]
    pub fn food_types(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for listing in &self.items {
            if !out.contains(&listing.food_type) {
                out.push(listing.food_type.clone());
            }
        }
        out
    }

    /// Mark a listing as claimed by the current recipient.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `AlreadyClaimed` if it was claimed.
    pub fn claim(&mut self, id: u32) -> Result<FoodListing, ActionError> {
        let listing = self.items.iter_mut().find(|l| l.id == id).ok_or(ActionError::NotFound(id))?;
        if listing.status == ListingStatus::Claimed {
            return Err(ActionError::AlreadyClaimed(id));
        }
        listing.status = ListingStatus::Claimed;
        log::info!("listing {id} claimed");
        Ok(listing.clone())
    }
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: u32,
    title: &str,
    donor: &str,
    location: &str,
    food_type: &str,
    quantity: &str,
    distance_km: f64,
    expiry_date: &str,
    pickup_time: &str,
    description: &str,
) -> FoodListing {
    FoodListing {
        id,
        title: title.to_owned(),
        donor: donor.to_owned(),
        location: location.to_owned(),
        food_type: food_type.to_owned(),
        quantity: quantity.to_owned(),
        distance_km,
        expiry_date: expiry_date.to_owned(),
        pickup_time: pickup_time.to_owned(),
        description: description.to_owned(),
        status: ListingStatus::Available,
    }
}

#[allow(clippy::too_many_lines)]
#[must_use]
pub fn fixtures() -> Vec<FoodListing> {
    vec![
        listing(
            1,
            "Fresh Produce Donation",
            "Green Grocers Market",
            "12 Market St, City",
            "Fresh Produce",
            "25 kg",
            2.5,
            "2024-02-25",
            "2024-02-20 10:00",
            "Assorted fresh vegetables and fruits",
        ),
        listing(
            2,
            "Bakery Items Collection",
            "Sunrise Bakery",
            "48 Baker Ln, City",
            "Bakery Items",
            "15 kg",
            4.8,
            "2024-02-22",
            "2024-02-21 14:30",
            "Bread, pastries, and cakes",
        ),
        listing(
            3,
            "Canned Goods Donation",
            "City Supermarket",
            "300 Center Ave, City",
            "Canned Goods",
            "50 units",
            3.2,
            "2024-12-31",
            "2024-02-22 09:00",
            "Various canned vegetables and fruits",
        ),
        listing(
            4,
            "Dairy Surplus",
            "Farm Fresh Co.",
            "7 Dairy Rd, City",
            "Dairy Products",
            "40 liters",
            7.9,
            "2024-02-21",
            "2024-02-20 16:00",
            "Milk and yogurt close to sell-by date",
        ),
    ]
}
