//! Requesting a listing: claim it and book the pickup in one step.

#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;

use super::error::{ActionError, required};
use super::listings::{ListingStatus, ListingsState};
use super::pickups::{Pickup, PickupRequest, PickupStatus, PickupsState};

/// Claim listing `id` and book a `Pending` pickup for `date`/`time` at the
/// listing's location.
///
/// Nothing changes unless both steps can succeed.
///
/// # Errors
///
/// `Validation` for a blank date or time, `NotFound` for an unknown listing,
/// and `AlreadyClaimed` if someone got there first.
pub fn request_listing(
    listings: &mut ListingsState,
    pickups: &mut PickupsState,
    id: u32,
    date: &str,
    time: &str,
) -> Result<Pickup, ActionError> {
    let date = required("date", date)?;
    let time = required("time", time)?;
    let listing = listings.get(id).ok_or(ActionError::NotFound(id))?;
    if listing.status == ListingStatus::Claimed {
        return Err(ActionError::AlreadyClaimed(id));
    }

    let request = PickupRequest {
        donor: listing.donor.clone(),
        food_type: listing.food_type.clone(),
        date,
        time,
        address: listing.location.clone(),
        ..PickupRequest::default()
    };
    let pickup = pickups.book(&request, PickupStatus::Pending)?;
    listings.claim(id)?;
    Ok(pickup)
}
