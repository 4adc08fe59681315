//! Donor-only pages, mounted under `/donor/*` behind the guard.

pub mod dashboard;
pub mod log_food;
pub mod matches;

use access::Role;
use leptos::prelude::*;

use crate::components::impact_panel::ImpactPanel;
use crate::components::pickup_schedule::PickupSchedule;
use crate::components::settings_panel::SettingsPanel;

#[component]
pub fn DonorSchedule() -> impl IntoView {
    view! { <PickupSchedule role=Role::Donor/> }
}

#[component]
pub fn DonorImpact() -> impl IntoView {
    view! {
        <header class="page-header">
            <h1>"Your Impact"</h1>
            <p class="page-header__subtitle">"Track the difference your donations make"</p>
        </header>
        <ImpactPanel role=Role::Donor/>
    }
}

#[component]
pub fn DonorSettings() -> impl IntoView {
    view! {
        <header class="page-header">
            <h1>"Settings"</h1>
        </header>
        <SettingsPanel/>
    }
}
