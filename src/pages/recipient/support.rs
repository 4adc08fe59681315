//! Recipient help center: ticket form and common questions.

use leptos::prelude::*;

use crate::state::session::SessionContext;
use crate::state::support::{ISSUE_TYPES, SupportDesk, SupportTicketDraft};
use crate::util::notify::use_notifier;

const FAQ: [(&str, &str); 3] = [
    (
        "How do I request food?",
        "Open Search, pick a listing, and choose a pickup time on its request page.",
    ),
    (
        "What if a pickup is missed?",
        "Reschedule it from your Schedule page or file a Pickup Issue ticket here.",
    ),
    (
        "How is food quality checked?",
        "Donors record expiry dates and storage notes. Report any concern as Donation Quality.",
    ),
];

#[component]
pub fn SupportPage() -> impl IntoView {
    let desk = expect_context::<RwSignal<SupportDesk>>();
    let session = expect_context::<SessionContext>();
    let notifier = use_notifier();

    let contact = session.session().map(|s| s.email).unwrap_or_default();
    let draft = RwSignal::new(SupportTicketDraft { email: contact, ..SupportTicketDraft::default() });
    let last_reference = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        match desk.try_update(|d| current.submit(d)) {
            Some(Ok(ticket)) => {
                notifier.success("Ticket submitted", format!("Reference {}", ticket.reference));
                last_reference.set(Some(ticket.reference));
                draft.update(|d| {
                    d.subject.clear();
                    d.message.clear();
                });
            }
            Some(Err(e)) => {
                notifier.action_failed("Could not submit ticket", &e);
            }
            None => {}
        }
    };

    let issue_options = ISSUE_TYPES
        .iter()
        .map(|(value, label)| {
            let value = *value;
            view! { <option value=value>{*label}</option> }
        })
        .collect_view();
    let faq = FAQ
        .iter()
        .map(|(q, a)| view! { <details class="faq__item"><summary>{*q}</summary><p>{*a}</p></details> })
        .collect_view();

    view! {
        <section class="support">
            <header class="page-header">
                <h1>"Support"</h1>
                <p class="page-header__subtitle">"We're here to help"</p>
            </header>
            <form class="form" on:submit=on_submit>
                <label>
                    "Issue type"
                    <select on:change=move |ev| draft.update(|d| d.issue_type = event_target_value(&ev))>
                        <option value="">"Select an issue"</option>
                        {issue_options}
                    </select>
                </label>
                <label>
                    "Subject"
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.subject.clone())
                        on:input=move |ev| draft.update(|d| d.subject = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Message"
                    <textarea
                        prop:value=move || draft.with(|d| d.message.clone())
                        on:input=move |ev| draft.update(|d| d.message = event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Contact email (optional)"
                    <input
                        type="email"
                        prop:value=move || draft.with(|d| d.email.clone())
                        on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                    />
                </label>
                <button class="button" type="submit">"Submit Ticket"</button>
            </form>
            <Show when=move || last_reference.with(Option::is_some)>
                <p class="support__reference">
                    "Last ticket: " <strong>{move || last_reference.get().unwrap_or_default()}</strong>
                </p>
            </Show>
            <div class="faq">
                <h2>"Frequently Asked Questions"</h2>
                {faq}
            </div>
        </section>
    }
}
