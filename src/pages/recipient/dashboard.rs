//! Recipient home: nearby food, upcoming pickups, weekly progress.

use access::Role;
use leptos::prelude::*;

use crate::components::listing_card::ListingCard;
use crate::components::stat_card::{ProgressBar, StatCard};
use crate::pages::recipient::search::claim_callback;
use crate::state::impact::ImpactStats;
use crate::state::listings::{FoodListing, ListingFilter, ListingStatus, ListingsState};
use crate::state::pickups::{Pickup, PickupsState};
use crate::state::session::SessionContext;

const NEARBY_LIMIT: usize = 3;
const NEARBY_KM: f64 = 5.0;

#[component]
pub fn RecipientDashboard() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let listings = expect_context::<RwSignal<ListingsState>>();
    let pickups = expect_context::<RwSignal<PickupsState>>();
    let on_claim = claim_callback(listings);
    let stats = ImpactStats::for_role(Role::Recipient);
    let progress = stats.progress_percent();

    let greeting = move || format!("Welcome, {}", session.session().map(|s| s.display_name).unwrap_or_default());
    let nearby = move || {
        let filter = ListingFilter { max_distance_km: Some(NEARBY_KM), ..ListingFilter::default() };
        listings.with(|l| {
            l.filter(&filter)
                .into_iter()
                .filter(|x| x.status == ListingStatus::Available)
                .take(NEARBY_LIMIT)
                .collect::<Vec<_>>()
        })
    };
    let available_count = move || {
        listings.with(|l| l.items.iter().filter(|x| x.status == ListingStatus::Available).count().to_string())
    };
    let upcoming = move || pickups.with(PickupsState::upcoming);

    view! {
        <section class="dashboard">
            <header class="page-header">
                <h1>{greeting}</h1>
                <p class="page-header__subtitle">"Food available in your area"</p>
            </header>

            <div class="stat-grid">
                <StatCard label="Available now" value=Signal::derive(available_count)/>
                <StatCard label="Upcoming pickups" value=Signal::derive(move || upcoming().len().to_string())/>
                <StatCard label="People fed" value=stats.people_fed.to_string()/>
                <StatCard label="Weekly goal" value=format!("{progress}%") hint=format!("{} people target", stats.weekly_goal)/>
            </div>
            <ProgressBar percent=Signal::stored(progress)/>

            <div class="quick-actions">
                <a class="button" href="/recipient/search">"Find Food"</a>
                <a class="button button--ghost" href="/recipient/schedule">"My Pickups"</a>
                <a class="button button--ghost" href="/recipient/support">"Get Help"</a>
                <a class="button button--ghost" href="/recipient/notifications">"Notifications"</a>
            </div>

            <h2>"Nearby Donations"</h2>
            <div class="card-grid">
                <For
                    each=nearby
                    key=|l| l.id
                    children=move |listing: FoodListing| view! { <ListingCard listing=listing on_claim=on_claim/> }
                />
            </div>

            <h2>"Upcoming Pickups"</h2>
            <ul class="list">
                <For
                    each=upcoming
                    key=|p| (p.id, p.date.clone(), p.time.clone())
                    children=|p: Pickup| {
                        view! {
                            <li class="list__row">
                                <strong>{p.donor}</strong>
                                <span>{format!("{} at {}", p.date, p.time)}</span>
                                <span class=format!("badge badge--{}", p.status.as_str())>{p.status.as_str()}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
