//! Card for one scheduled pickup with its transition buttons.

use leptos::prelude::*;

use crate::state::pickups::Pickup;

#[component]
pub fn PickupCard(
    pickup: Pickup,
    on_reschedule: Callback<u32>,
    on_cancel: Callback<u32>,
    on_complete: Callback<u32>,
) -> impl IntoView {
    let id = pickup.id;
    let status = pickup.status;
    let items = pickup.items.join(", ");
    let report = pickup.report.map(|r| {
        view! {
            <p class="pickup-card__report">
                {format!("Rated {}/5, {} people fed", r.rating, r.people_fed)}
            </p>
        }
    });

    view! {
        <article class="pickup-card">
            <header class="pickup-card__header">
                <h3>{pickup.donor}</h3>
                <span class=format!("badge badge--{}", status.as_str())>{status.as_str()}</span>
            </header>
            <p class="pickup-card__when">{format!("{} at {}", pickup.date, pickup.time)}</p>
            <p class="pickup-card__where">{pickup.location}</p>
            <p class="pickup-card__items">{items}</p>
            {report}
            <Show when=move || !status.is_final()>
                <footer class="pickup-card__actions">
                    <button class="button button--ghost" on:click=move |_| on_reschedule.run(id)>
                        "Reschedule"
                    </button>
                    <button class="button button--ghost" on:click=move |_| on_cancel.run(id)>
                        "Cancel"
                    </button>
                    <button class="button" on:click=move |_| on_complete.run(id)>
                        "Mark Completed"
                    </button>
                </footer>
            </Show>
        </article>
    }
}
