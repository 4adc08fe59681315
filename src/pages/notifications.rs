//! Notification inbox, mounted for both roles under `/<role>/notifications`.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::state::notifications::{Notification, NotificationsState};
use crate::util::notify::use_notifier;

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let inbox = expect_context::<RwSignal<NotificationsState>>();
    let notifier = use_notifier();

    let on_read = Callback::new(move |id: u32| {
        if let Some(Err(e)) = inbox.try_update(|n| n.mark_read(id)) {
            notifier.action_failed("Could not mark as read", &e);
        }
    });
    let on_read_all = move |_| {
        if inbox.try_update(NotificationsState::mark_all_read).unwrap_or(0) > 0 {
            notifier.success("All notifications read", "Everything has been marked as read.");
        }
    };
    let on_load_older = move |_| {
        if inbox.try_update(NotificationsState::load_older).unwrap_or(0) > 0 {
            notifier.info("Older notifications loaded", "Showing notifications from the past week.");
        }
    };

    let count = move |f: fn(&NotificationsState) -> usize| Signal::derive(move || inbox.with(f).to_string());

    view! {
        <section class="notifications">
            <header class="page-header">
                <h1>"Notifications"</h1>
                <p class="page-header__subtitle">"Stay updated with your food bridge activities"</p>
                <button class="button button--ghost" on:click=on_read_all>"Mark All Read"</button>
            </header>

            <div class="stat-grid">
                <StatCard label="Unread" value=count(NotificationsState::unread_count) hint="New notifications"/>
                <StatCard label="Today" value=count(NotificationsState::today_count) hint="Notifications today"/>
                <StatCard label="Urgent" value=count(NotificationsState::urgent_count) hint="Require attention"/>
            </div>

            <div class="notifications__list">
                <For
                    each=move || inbox.with(|n| n.items().to_vec())
                    key=|n| (n.id, n.unread)
                    children=move |n: Notification| view! { <NotificationCard entry=n on_read=on_read/> }
                />
            </div>

            <Show
                when=move || inbox.with(NotificationsState::has_older)
                fallback=|| view! { <p class="empty">"All notifications loaded"</p> }
            >
                <button class="button button--ghost" on:click=on_load_older>"Load Older Notifications"</button>
            </Show>
        </section>
    }
}

#[component]
fn NotificationCard(entry: Notification, on_read: Callback<u32>) -> impl IntoView {
    let id = entry.id;
    let unread = entry.unread;
    let accent = entry.accent();

    view! {
        <article class=format!("notification-card notification-card--{accent}") class:notification-card--unread=unread>
            <header class="notification-card__header">
                <h3>{entry.title}</h3>
                {entry.urgent.then(|| view! { <span class="badge badge--urgent">"Urgent"</span> })}
                <span class="notification-card__time">{entry.received}</span>
            </header>
            <p>{entry.message}</p>
            {unread
                .then(|| {
                    view! {
                        <button class="button button--ghost" on:click=move |_| on_read.run(id)>
                            "Mark as Read"
                        </button>
                    }
                })}
        </article>
    }
}
