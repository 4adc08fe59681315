//! Card for one available food listing.

use leptos::prelude::*;

use crate::state::listings::{FoodListing, ListingStatus};

/// Listing summary. `on_claim` adds a quick-claim button while the listing is
/// still available.
#[component]
pub fn ListingCard(listing: FoodListing, #[prop(optional)] on_claim: Option<Callback<u32>>) -> impl IntoView {
    let id = listing.id;
    let available = listing.status == ListingStatus::Available;
    let status_label = if available { "Available" } else { "Claimed" };

    view! {
        <article class="listing-card" class:listing-card--claimed=!available>
            <header class="listing-card__header">
                <h3>{listing.title}</h3>
                <span class="badge">{status_label}</span>
            </header>
            <p class="listing-card__donor">{listing.donor}</p>
            <dl class="listing-card__facts">
                <dt>"Type"</dt>
                <dd>{listing.food_type}</dd>
                <dt>"Quantity"</dt>
                <dd>{listing.quantity}</dd>
                <dt>"Location"</dt>
                <dd>{listing.location}</dd>
                <dt>"Distance"</dt>
                <dd>{format!("{:.1} km", listing.distance_km)}</dd>
                <dt>"Expires"</dt>
                <dd>{listing.expiry_date}</dd>
                <dt>"Pickup"</dt>
                <dd>{listing.pickup_time}</dd>
            </dl>
            <p class="listing-card__description">{listing.description}</p>
            <footer class="listing-card__actions">
                <a class="button button--ghost" href=format!("/recipient/request/{id}")>"Details"</a>
                {on_claim
                    .filter(|_| available)
                    .map(|cb| {
                        view! {
                            <button class="button" on:click=move |_| cb.run(id)>
                                "Claim"
                            </button>
                        }
                    })}
            </footer>
        </article>
    }
}
