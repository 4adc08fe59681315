//! Recipient-only pages, mounted under `/recipient/*` behind the guard.

pub mod dashboard;
pub mod request;
pub mod search;
pub mod support;

use access::Role;
use leptos::prelude::*;

use crate::components::impact_panel::ImpactPanel;
use crate::components::pickup_schedule::PickupSchedule;
use crate::components::settings_panel::SettingsPanel;

#[component]
pub fn RecipientSchedule() -> impl IntoView {
    view! { <PickupSchedule role=Role::Recipient/> }
}

#[component]
pub fn RecipientImpact() -> impl IntoView {
    view! {
        <header class="page-header">
            <h1>"Community Impact"</h1>
            <p class="page-header__subtitle">"What the food you receive adds up to"</p>
        </header>
        <ImpactPanel role=Role::Recipient/>
    }
}

#[component]
pub fn RecipientSettings() -> impl IntoView {
    view! {
        <header class="page-header">
            <h1>"Settings"</h1>
        </header>
        <SettingsPanel/>
    }
}
