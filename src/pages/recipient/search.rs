//! Search available food listings.

use leptos::prelude::*;

use crate::components::forms::parse_max_distance;
use crate::components::listing_card::ListingCard;
use crate::state::listings::{FoodListing, ListingFilter, ListingStatus, ListingsState};
use crate::util::notify::use_notifier;

/// Claim handler shared by the search page and the recipient dashboard.
pub fn claim_callback(listings: RwSignal<ListingsState>) -> Callback<u32> {
    let notifier = use_notifier();
    Callback::new(move |id: u32| match listings.try_update(|l| l.claim(id)) {
        Some(Ok(listing)) => {
            notifier.success("Food claimed", format!("{} from {}", listing.title, listing.donor));
        }
        Some(Err(e)) => {
            notifier.action_failed("Could not claim listing", &e);
        }
        None => {}
    })
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let listings = expect_context::<RwSignal<ListingsState>>();
    let query = RwSignal::new(String::new());
    let food_type = RwSignal::new(String::new());
    let max_distance = RwSignal::new(String::new());
    let on_claim = claim_callback(listings);

    let results = move || {
        let filter = ListingFilter {
            query: query.get(),
            food_type: food_type.get(),
            max_distance_km: parse_max_distance(&max_distance.get()),
        };
        listings.with(|l| l.filter(&filter))
    };
    let type_options = move || {
        listings
            .with(ListingsState::food_types)
            .into_iter()
            .map(|t| {
                let label = t.clone();
                view! { <option value=t>{label}</option> }
            })
            .collect_view()
    };

    view! {
        <section class="search">
            <header class="page-header">
                <h1>"Find Food"</h1>
                <p class="page-header__subtitle">"Browse donations available near you"</p>
            </header>
            <div class="filter-bar">
                <input
                    type="search"
                    placeholder="Search by food, donor, or description"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <select on:change=move |ev| food_type.set(event_target_value(&ev))>
                    <option value="">"All food types"</option>
                    {type_options}
                </select>
                <input
                    type="number"
                    min="0"
                    step="0.5"
                    placeholder="Max distance (km)"
                    prop:value=move || max_distance.get()
                    on:input=move |ev| max_distance.set(event_target_value(&ev))
                />
            </div>
            <Show
                when=move || !results().is_empty()
                fallback=|| view! { <p class="empty">"No listings match your filters."</p> }
            >
                <div class="card-grid">
                    <For
                        each=results
                        key=|l| (l.id, l.status == ListingStatus::Claimed)
                        children=move |listing: FoodListing| view! { <ListingCard listing=listing on_claim=on_claim/> }
                    />
                </div>
            </Show>
        </section>
    }
}
