use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::state::pickups::PickupsState;
use crate::util::notify::use_notifier;

#[component]
pub fn RescheduleModal(pickup_id: u32, on_close: Callback<()>) -> impl IntoView {
    let pickups = expect_context::<RwSignal<PickupsState>>();
    let notifier = use_notifier();
    let current = pickups.with_untracked(|p| p.get(pickup_id).map(|x| (x.date.clone(), x.time.clone())));
    let (initial_date, initial_time) = current.unwrap_or_default();
    let date = RwSignal::new(initial_date);
    let time = RwSignal::new(initial_time);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (d, t) = (date.get_untracked(), time.get_untracked());
        match pickups.try_update(|p| p.reschedule(pickup_id, &d, &t)) {
            Some(Ok(pickup)) => {
                notifier.success("Pickup rescheduled", format!("Now {} at {}", pickup.date, pickup.time));
                on_close.run(());
            }
            Some(Err(e)) => {
                notifier.action_failed("Could not reschedule", &e);
            }
            None => {}
        }
    };

    view! {
        <Modal title="Reschedule Pickup" on_close=on_close>
            <form class="dialog__form" on:submit=on_submit>
                <label>
                    "New date"
                    <input type="date" prop:value=move || date.get() on:input=move |ev| date.set(event_target_value(&ev))/>
                </label>
                <label>
                    "New time"
                    <input type="time" prop:value=move || time.get() on:input=move |ev| time.set(event_target_value(&ev))/>
                </label>
                <div class="dialog__actions">
                    <button type="button" class="button button--ghost" on:click=move |_| on_close.run(())>
                        "Back"
                    </button>
                    <button type="submit" class="button">"Reschedule"</button>
                </div>
            </form>
        </Modal>
    }
}
