//! Donor availability dialog: weekly windows, blackout dates, daily cap.

use leptos::prelude::*;

use crate::components::forms::parse_count;
use crate::components::modal::Modal;
use crate::state::availability::{Availability, MAX_DAILY_PICKUPS, MIN_DAILY_PICKUPS, TIMEZONES, Weekday};
use crate::util::notify::use_notifier;

#[component]
pub fn AvailabilityModal(on_close: Callback<()>) -> impl IntoView {
    let stored = expect_context::<RwSignal<Availability>>();
    let notifier = use_notifier();
    let draft = RwSignal::new(stored.get_untracked());
    let new_blackout = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let candidate = draft.get_untracked();
        match candidate.validate() {
            Ok(()) => {
                let open = candidate.open_days().len();
                stored.set(candidate);
                notifier.success("Availability updated", format!("Open {open} days a week."));
                on_close.run(());
            }
            Err(e) => {
                notifier.action_failed("Could not save availability", &e);
            }
        }
    };
    let on_add_blackout = move |_| {
        let date = new_blackout.get_untracked();
        if draft.try_update(|a| a.add_blackout(&date)).unwrap_or(false) {
            new_blackout.set(String::new());
        }
    };

    let timezone_options = TIMEZONES
        .into_iter()
        .map(|(value, label)| {
            view! { <option value=value selected=move || draft.with(|a| a.timezone == value)>{label}</option> }
        })
        .collect_view();
    let day_rows = Weekday::ALL.into_iter().map(|day| view! { <DayRow day=day draft=draft/> }).collect_view();

    view! {
        <Modal title="Set Your Availability" on_close=on_close>
            <form class="dialog__form" on:submit=on_submit>
                <fieldset>
                    <legend>"General"</legend>
                    <label>
                        "Timezone"
                        <select on:change=move |ev| draft.update(|a| a.timezone = event_target_value(&ev))>
                            {timezone_options}
                        </select>
                    </label>
                    <label>
                        "Max daily pickups"
                        <input
                            type="number"
                            min=MIN_DAILY_PICKUPS.to_string()
                            max=MAX_DAILY_PICKUPS.to_string()
                            prop:value=move || draft.with(|a| a.max_daily_pickups.to_string())
                            on:input=move |ev| draft.update(|a| a.max_daily_pickups = parse_count(&event_target_value(&ev)))
                        />
                    </label>
                    <label class="dialog__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || draft.with(|a| a.auto_accept)
                            on:change=move |ev| draft.update(|a| a.auto_accept = event_target_checked(&ev))
                        />
                        "Auto-accept pickup requests during available hours"
                    </label>
                </fieldset>

                <fieldset>
                    <legend>"Weekly schedule"</legend>
                    {day_rows}
                </fieldset>

                <fieldset>
                    <legend>"Blackout dates"</legend>
                    <div class="availability__blackout-add">
                        <input
                            type="date"
                            prop:value=move || new_blackout.get()
                            on:input=move |ev| new_blackout.set(event_target_value(&ev))
                        />
                        <button type="button" class="button button--ghost" on:click=on_add_blackout>"Add"</button>
                    </div>
                    <ul class="availability__blackouts">
                        <For
                            each=move || draft.with(|a| a.blackout_dates().to_vec())
                            key=|d| d.clone()
                            children=move |date: String| {
                                let target = date.clone();
                                view! {
                                    <li class="badge">
                                        {date}
                                        <button
                                            type="button"
                                            aria-label="Remove date"
                                            on:click=move |_| {
                                                draft.update(|a| {
                                                    a.remove_blackout(&target);
                                                });
                                            }
                                        >
                                            "×"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </fieldset>

                <div class="dialog__actions">
                    <button type="button" class="button button--ghost" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="button">"Save Availability"</button>
                </div>
            </form>
        </Modal>
    }
}

#[component]
fn DayRow(day: Weekday, draft: RwSignal<Availability>) -> impl IntoView {
    let enabled = move || draft.with(|a| a.day(day).enabled);

    view! {
        <div class="availability__day">
            <label class="dialog__checkbox">
                <input
                    type="checkbox"
                    prop:checked=enabled
                    on:change=move |ev| draft.update(|a| a.set_enabled(day, event_target_checked(&ev)))
                />
                {day.label()}
            </label>
            <Show when=enabled fallback=|| view! { <span class="badge">"Unavailable"</span> }>
                <label>
                    "From"
                    <input
                        type="time"
                        prop:value=move || draft.with(|a| a.day(day).start.clone())
                        on:input=move |ev| draft.update(|a| a.set_start(day, &event_target_value(&ev)))
                    />
                </label>
                <label>
                    "To"
                    <input
                        type="time"
                        prop:value=move || draft.with(|a| a.day(day).end.clone())
                        on:input=move |ev| draft.update(|a| a.set_end(day, &event_target_value(&ev)))
                    />
                </label>
            </Show>
        </div>
    }
}
