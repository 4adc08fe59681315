//! Completion report dialog for a pickup.
//!
//! When the reporter opts to share a story and wrote notes, the notes are
//! also posted to the community feed under their display name.

use leptos::prelude::*;

use crate::components::forms::{parse_count, parse_rating};
use crate::components::modal::Modal;
use crate::state::community::CommunityState;
use crate::state::pickups::{CompletionReport, MAX_RATING, MIN_RATING, PickupsState};
use crate::state::session::SessionContext;
use crate::util::notify::use_notifier;

#[component]
pub fn MarkCompletedModal(pickup_id: u32, on_close: Callback<()>) -> impl IntoView {
    let pickups = expect_context::<RwSignal<PickupsState>>();
    let community = expect_context::<RwSignal<CommunityState>>();
    let session = expect_context::<SessionContext>();
    let notifier = use_notifier();

    let notes = RwSignal::new(String::new());
    let rating = RwSignal::new(MAX_RATING.to_string());
    let people_fed = RwSignal::new(String::new());
    let actual_quantity = RwSignal::new(String::new());
    let share_story = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let report = CompletionReport::new(
            &notes.get_untracked(),
            parse_rating(&rating.get_untracked()),
            parse_count(&people_fed.get_untracked()),
            &actual_quantity.get_untracked(),
            share_story.get_untracked(),
        );
        let share = report.share_story && !report.notes.is_empty();
        let story_text = report.notes.clone();

        match pickups.try_update(|p| p.mark_completed(pickup_id, report)) {
            Some(Ok(pickup)) => {
                notifier.success("Pickup completed", format!("Thanks for reporting on {}.", pickup.donor));
                if share {
                    if let Some(s) = session.session() {
                        let title = format!("Pickup with {}", pickup.donor);
                        let posted = community.try_update(|c| c.post(&s.display_name, s.role.label(), &title, &story_text));
                        if let Some(Err(e)) = posted {
                            log::warn!("story not shared: {e}");
                        }
                    }
                }
                on_close.run(());
            }
            Some(Err(e)) => {
                notifier.action_failed("Could not complete pickup", &e);
            }
            None => {}
        }
    };

    let ratings = (MIN_RATING..=MAX_RATING)
        .rev()
        .map(|r| view! { <option value=r.to_string()>{format!("{r} / {MAX_RATING}")}</option> })
        .collect_view();

    view! {
        <Modal title="Mark Pickup Completed" on_close=on_close>
            <form class="dialog__form" on:submit=on_submit>
                <label>
                    "Rating"
                    <select prop:value=move || rating.get() on:change=move |ev| rating.set(event_target_value(&ev))>
                        {ratings}
                    </select>
                </label>
                <label>
                    "People fed"
                    <input type="number" min="0" on:input=move |ev| people_fed.set(event_target_value(&ev))/>
                </label>
                <label>
                    "Actual quantity"
                    <input type="text" on:input=move |ev| actual_quantity.set(event_target_value(&ev))/>
                </label>
                <label>
                    "Notes"
                    <textarea on:input=move |ev| notes.set(event_target_value(&ev))></textarea>
                </label>
                <label class="dialog__checkbox">
                    <input type="checkbox" on:change=move |ev| share_story.set(event_target_checked(&ev))/>
                    "Share as a community story"
                </label>
                <div class="dialog__actions">
                    <button type="button" class="button button--ghost" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="button">"Complete"</button>
                </div>
            </form>
        </Modal>
    }
}
