//! Request one listing: pick a pickup slot, claim, and book it.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_params_map;

use crate::components::forms::listing_id;
use crate::components::listing_card::ListingCard;
use crate::state::listings::{ListingStatus, ListingsState};
use crate::state::pickups::PickupsState;
use crate::state::requests::request_listing;
use crate::util::notify::use_notifier;

#[component]
pub fn RequestPage() -> impl IntoView {
    let listings = expect_context::<RwSignal<ListingsState>>();
    let pickups = expect_context::<RwSignal<PickupsState>>();
    let notifier = use_notifier();
    let params = use_params_map();

    let id = Memo::new(move |_| listing_id(params.with(|p| p.get("id"))));
    let listing = move || id.get().and_then(|id| listings.with(|l| l.get(id).cloned()));

    let date = RwSignal::new(String::new());
    let time = RwSignal::new(String::new());
    let requested = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = id.get_untracked() else {
            return;
        };
        let (d, t) = (date.get_untracked(), time.get_untracked());
        let outcome = listings
            .try_update(|l| pickups.try_update(|p| request_listing(l, p, id, &d, &t)))
            .flatten();
        match outcome {
            Some(Ok(pickup)) => {
                notifier.success("Request sent", format!("Pickup from {} on {} at {}", pickup.donor, pickup.date, pickup.time));
                requested.set(true);
            }
            Some(Err(e)) => {
                notifier.action_failed("Could not request food", &e);
            }
            None => {}
        }
    };

    view! {
        <section class="request">
            <header class="page-header">
                <h1>"Request Donation"</h1>
                <a href="/recipient/search">"← Back to search"</a>
            </header>
            <Show when=move || requested.get()>
                <Redirect path="/recipient/schedule"/>
            </Show>
            {move || match listing() {
                None => view! { <p class="empty">"That listing does not exist."</p> }.into_any(),
                Some(found) => {
                    let claimed = found.status == ListingStatus::Claimed;
                    view! {
                        <ListingCard listing=found/>
                        <Show
                            when=move || !claimed
                            fallback=|| view! { <p class="empty">"This listing has already been claimed."</p> }
                        >
                            <form class="form" on:submit=on_submit>
                                <label>
                                    "Pickup date"
                                    <input type="date" on:input=move |ev| date.set(event_target_value(&ev))/>
                                </label>
                                <label>
                                    "Pickup time"
                                    <input type="time" on:input=move |ev| time.set(event_target_value(&ev))/>
                                </label>
                                <button class="button" type="submit">"Request Pickup"</button>
                            </form>
                        </Show>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
