//! Donor home: today's figures, recent donations, upcoming pickups.

use access::Role;
use leptos::prelude::*;

use crate::components::stat_card::{ProgressBar, StatCard};
use crate::state::donations::{Donation, DonationsState};
use crate::state::impact::ImpactStats;
use crate::state::pickups::{Pickup, PickupsState};
use crate::state::session::SessionContext;

const RECENT_DONATIONS: usize = 3;

#[component]
pub fn DonorDashboard() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let donations = expect_context::<RwSignal<DonationsState>>();
    let pickups = expect_context::<RwSignal<PickupsState>>();
    let stats = ImpactStats::for_role(Role::Donor);
    let progress = stats.progress_percent();

    let greeting = move || format!("Welcome back, {}", session.session().map(|s| s.display_name).unwrap_or_default());
    let recent = move || donations.with(|d| d.recent(RECENT_DONATIONS).to_vec());
    let upcoming = move || pickups.with(PickupsState::upcoming);
    let donation_count = move || donations.with(|d| d.items().len().to_string());
    let upcoming_count = move || pickups.with(|p| p.upcoming().len().to_string());

    view! {
        <section class="dashboard">
            <header class="page-header">
                <h1>{greeting}</h1>
                <p class="page-header__subtitle">"Here's what's happening with your donations"</p>
            </header>

            <div class="stat-grid">
                <StatCard label="Donations" value=Signal::derive(donation_count)/>
                <StatCard label="People fed" value=stats.people_fed.to_string()/>
                <StatCard label="Upcoming pickups" value=Signal::derive(upcoming_count)/>
                <StatCard label="Weekly goal" value=format!("{progress}%") hint=format!("{} meals target", stats.weekly_goal)/>
            </div>
            <ProgressBar percent=Signal::stored(progress)/>

            <div class="quick-actions">
                <a class="button" href="/donor/log-food">"Log Food"</a>
                <a class="button button--ghost" href="/donor/matches">"View Matches"</a>
                <a class="button button--ghost" href="/donor/schedule">"Schedule"</a>
                <a class="button button--ghost" href="/donor/notifications">"Notifications"</a>
            </div>

            <div class="dashboard__columns">
                <div>
                    <h2>"Recent Donations"</h2>
                    <ul class="list">
                        <For each=recent key=|d| d.id children=|d: Donation| view! { <DonationRow donation=d/> }/>
                    </ul>
                </div>
                <div>
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
                                        <span>{p.location}</span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[component]
fn DonationRow(donation: Donation) -> impl IntoView {
    let status = donation.status.as_str();
    view! {
        <li class="list__row">
            <strong>{donation.food_type}</strong>
            <span>{donation.quantity}</span>
            <span>{donation.recipient.unwrap_or_else(|| "Awaiting match".to_owned())}</span>
            <span class=format!("badge badge--{status}")>{status}</span>
        </li>
    }
}
