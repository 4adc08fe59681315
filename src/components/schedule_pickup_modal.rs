//! "Schedule new pickup" dialog.

use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::state::pickups::{PickupRequest, PickupsState};
use crate::util::notify::use_notifier;

const DONORS: [&str; 4] = ["Green Valley Market", "Sunset Bakery", "City Restaurant", "Farm Fresh Co."];
const FOOD_TYPES: [&str; 6] = ["Fresh Produce", "Baked Goods", "Prepared Meals", "Dairy Products", "Canned Goods", "Mixed Items"];

#[component]
pub fn SchedulePickupModal(on_close: Callback<()>) -> impl IntoView {
    let pickups = expect_context::<RwSignal<PickupsState>>();
    let notifier = use_notifier();
    let form = RwSignal::new(PickupRequest::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = form.get_untracked();
        match pickups.try_update(|p| p.schedule(&request)) {
            Some(Ok(pickup)) => {
                notifier.success("Pickup scheduled", format!("{} on {} at {}", pickup.donor, pickup.date, pickup.time));
                on_close.run(());
            }
            Some(Err(e)) => {
                notifier.action_failed("Could not schedule pickup", &e);
            }
            None => {}
        }
    };

    view! {
        <Modal title="Schedule New Pickup" on_close=on_close>
            <form class="dialog__form" on:submit=on_submit>
                <label>
                    "Donor"
                    <select on:change=move |ev| form.update(|f| f.donor = event_target_value(&ev))>
                        <option value="">"Select a donor"</option>
                        {DONORS.iter().map(|d| view! { <option value=*d>{*d}</option> }).collect_view()}
                    </select>
                </label>
                <label>
                    "Food type"
                    <select on:change=move |ev| form.update(|f| f.food_type = event_target_value(&ev))>
                        <option value="">"Select food type"</option>
                        {FOOD_TYPES.iter().map(|t| view! { <option value=*t>{*t}</option> }).collect_view()}
                    </select>
                </label>
                <label>
                    "Date"
                    <input type="date" on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))/>
                </label>
                <label>
                    "Time"
                    <input type="time" on:input=move |ev| form.update(|f| f.time = event_target_value(&ev))/>
                </label>
                <label>
                    "Pickup address"
                    <input type="text" on:input=move |ev| form.update(|f| f.address = event_target_value(&ev))/>
                </label>
                <label>
                    "Contact phone"
                    <input type="tel" on:input=move |ev| form.update(|f| f.contact_phone = event_target_value(&ev))/>
                </label>
                <label>
                    "Special instructions"
                    <textarea on:input=move |ev| {
                        form.update(|f| f.special_instructions = event_target_value(&ev));
                    }></textarea>
                </label>
                <div class="dialog__actions">
                    <button type="button" class="button button--ghost" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="button">"Schedule"</button>
                </div>
            </form>
        </Modal>
    }
}
