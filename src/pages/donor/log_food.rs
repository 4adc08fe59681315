//! Donor "log food" form. The unfinished form is kept in localStorage so a
//! reload does not lose it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::donations::{DonationDraft, DonationsState};
use crate::util::notify::use_notifier;
use crate::util::storage;

const DRAFT_KEY: &str = "food_bridge_log_food_draft";

const FOOD_TYPES: [&str; 7] = [
    "Fresh Produce",
    "Canned Goods",
    "Dry Goods",
    "Bakery Items",
    "Dairy Products",
    "Frozen Foods",
    "Prepared Foods",
];

#[component]
pub fn LogFoodPage() -> impl IntoView {
    let donations = expect_context::<RwSignal<DonationsState>>();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let draft = RwSignal::new(storage::load_json::<DonationDraft>(DRAFT_KEY).unwrap_or_default());
    Effect::new(move || {
        draft.with(|d| {
            if d.is_blank() {
                storage::remove(DRAFT_KEY);
            } else {
                storage::save_json(DRAFT_KEY, d);
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        match donations.try_update(|d| d.log(&current)) {
            Some(Ok(donation)) => {
                draft.set(DonationDraft::default());
                notifier.success("Donation logged", format!("{} of {} is ready for matching.", donation.quantity, donation.food_type));
                navigate("/donor/dashboard", NavigateOptions::default());
            }
            Some(Err(e)) => {
                notifier.action_failed("Could not log donation", &e);
            }
            None => {}
        }
    };

    let food_options = FOOD_TYPES
        .iter()
        .map(|t| {
            let value = *t;
            view! { <option value=value selected=move || draft.with(|d| d.food_type == value)>{value}</option> }
        })
        .collect_view();

    view! {
        <section class="log-food">
            <header class="page-header">
                <h1>"Log Food Donation"</h1>
                <p class="page-header__subtitle">"Tell us what you have to share"</p>
            </header>
            <form class="form" on:submit=on_submit>
                <label>
                    "Food type"
                    <select on:change=move |ev| draft.update(|d| d.food_type = event_target_value(&ev))>
                        <option value="">"Select food type"</option>
                        {food_options}
                    </select>
                </label>
                <label>
                    "Quantity"
                    <input
                        type="text"
                        placeholder="e.g. 10 kg"
                        prop:value=move || draft.with(|d| d.quantity.clone())
                        on:input=move |ev| draft.update(|d| d.quantity = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Expiry date"
                    <input
                        type="date"
                        prop:value=move || draft.with(|d| d.expiry_date.clone())
                        on:input=move |ev| draft.update(|d| d.expiry_date = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Description"
                    <textarea
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Storage instructions"
                    <textarea
                        prop:value=move || draft.with(|d| d.storage_notes.clone())
                        on:input=move |ev| draft.update(|d| d.storage_notes = event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="button" type="submit">"Log Donation"</button>
            </form>
        </section>
    }
}
