//! Recipients whose requests match the donor's food.

use leptos::prelude::*;

use crate::state::matches::{Match, MatchesState};
use crate::util::notify::use_notifier;

#[component]
pub fn MatchesPage() -> impl IntoView {
    let matches = expect_context::<RwSignal<MatchesState>>();
    let notifier = use_notifier();

    let on_accept = Callback::new(move |id: u32| match matches.try_update(|m| m.accept(id)) {
        Some(Ok(m)) => {
            notifier.success("Match accepted", format!("{} will be notified.", m.recipient));
        }
        Some(Err(e)) => {
            notifier.action_failed("Could not accept match", &e);
        }
        None => {}
    });
    let on_decline = Callback::new(move |id: u32| match matches.try_update(|m| m.decline(id)) {
        Some(Ok(m)) => {
            notifier.info("Match declined", m.recipient);
        }
        Some(Err(e)) => {
            notifier.action_failed("Could not decline match", &e);
        }
        None => {}
    });

    view! {
        <section class="matches">
            <header class="page-header">
                <h1>"Matches"</h1>
                <p class="page-header__subtitle">"Find recipients for your food donations"</p>
            </header>
            <Show
                when=move || matches.with(|m| !m.pending().is_empty())
                fallback=|| view! { <p class="empty">"No pending matches right now."</p> }
            >
                <div class="card-grid">
                    <For
                        each=move || matches.with(MatchesState::pending)
                        key=|m| m.id
                        children=move |m: Match| view! { <MatchCard entry=m on_accept=on_accept on_decline=on_decline/> }
                    />
                </div>
            </Show>
        </section>
    }
}

#[component]
fn MatchCard(entry: Match, on_accept: Callback<u32>, on_decline: Callback<u32>) -> impl IntoView {
    let id = entry.id;
    let urgency = entry.urgency.as_str();
    view! {
        <article class="match-card">
            <header class="match-card__header">
                <h3>{entry.recipient}</h3>
                <span class=format!("badge badge--{urgency}")>{format!("{urgency} urgency")}</span>
            </header>
            <p>{format!("{} · {}", entry.food_type, entry.quantity)}</p>
            <p>{format!("{:.1} km away", entry.distance_km)}</p>
            <p>{entry.time_window}</p>
            <footer class="match-card__actions">
                <button class="button" on:click=move |_| on_accept.run(id)>"Accept"</button>
                <button class="button button--ghost" on:click=move |_| on_decline.run(id)>"Decline"</button>
            </footer>
        </article>
    }
}
