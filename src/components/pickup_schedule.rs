//! Pickup list with reschedule / cancel / complete flows, shared by both
//! roles' Schedule pages.

use access::Role;
use leptos::prelude::*;

use crate::components::availability_modal::AvailabilityModal;
use crate::components::mark_completed_modal::MarkCompletedModal;
use crate::components::pickup_card::PickupCard;
use crate::components::reschedule_modal::RescheduleModal;
use crate::components::schedule_pickup_modal::SchedulePickupModal;
use crate::state::pickups::{Pickup, PickupStatus, PickupsState};
use crate::util::notify::use_notifier;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OpenDialog {
    None,
    New,
    Availability,
    Reschedule(u32),
    Complete(u32),
}

#[component]
pub fn PickupSchedule(role: Role) -> impl IntoView {
    let pickups = expect_context::<RwSignal<PickupsState>>();
    let notifier = use_notifier();
    let dialog = RwSignal::new(OpenDialog::None);

    let on_reschedule = Callback::new(move |id: u32| dialog.set(OpenDialog::Reschedule(id)));
    let on_complete = Callback::new(move |id: u32| dialog.set(OpenDialog::Complete(id)));
    let on_cancel = Callback::new(move |id: u32| match pickups.try_update(|p| p.cancel(id)) {
        Some(Ok(pickup)) => {
            notifier.info("Pickup cancelled", format!("{} on {}", pickup.donor, pickup.date));
        }
        Some(Err(e)) => {
            notifier.action_failed("Could not cancel pickup", &e);
        }
        None => {}
    });
    let on_close = Callback::new(move |()| dialog.set(OpenDialog::None));

    let upcoming = move || pickups.with(PickupsState::upcoming);
    let history = move || {
        pickups.with(|p| p.items.iter().filter(|x| x.status.is_final()).cloned().collect::<Vec<Pickup>>())
    };
    let summary = move || {
        pickups.with(|p| {
            format!(
                "{} scheduled, {} pending, {} completed",
                p.count(PickupStatus::Scheduled),
                p.count(PickupStatus::Pending),
                p.count(PickupStatus::Completed)
            )
        })
    };
    let card = move |pickup: Pickup| {
        view! { <PickupCard pickup=pickup on_reschedule=on_reschedule on_cancel=on_cancel on_complete=on_complete/> }
    };

    view! {
        <section class="schedule">
            <header class="page-header">
                <h1>"Pickup Schedule"</h1>
                <p class="page-header__subtitle">{summary}</p>
                <Show when=move || role == Role::Recipient>
                    <button class="button" on:click=move |_| dialog.set(OpenDialog::New)>
                        "Schedule New Pickup"
                    </button>
                </Show>
                <Show when=move || role == Role::Donor>
                    <button class="button button--ghost" on:click=move |_| dialog.set(OpenDialog::Availability)>
                        "Set Availability"
                    </button>
                </Show>
            </header>

            <h2>"Upcoming"</h2>
            <div class="card-grid">
                <For each=upcoming key=|p| (p.id, p.date.clone(), p.time.clone(), p.status.as_str()) children=card/>
            </div>

            <h2>"History"</h2>
            <div class="card-grid">
                <For each=history key=|p| (p.id, p.status.as_str()) children=card/>
            </div>

            {move || match dialog.get() {
                OpenDialog::None => ().into_any(),
                OpenDialog::New => view! { <SchedulePickupModal on_close=on_close/> }.into_any(),
                OpenDialog::Availability => view! { <AvailabilityModal on_close=on_close/> }.into_any(),
                OpenDialog::Reschedule(id) => view! { <RescheduleModal pickup_id=id on_close=on_close/> }.into_any(),
                OpenDialog::Complete(id) => view! { <MarkCompletedModal pickup_id=id on_close=on_close/> }.into_any(),
            }}
        </section>
    }
}
