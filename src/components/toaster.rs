//! Renders the toast stack.

use leptos::prelude::*;

use crate::state::toast::Toast;
use crate::util::notify::use_notifier;

#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = use_notifier();
    let toasts = notifier.toasts();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.with(|t| t.items().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let Toast { id, kind, title, description } = toast;
                    let body = (!description.is_empty())
                        .then(|| view! { <p class="toast__description">{description}</p> });
                    view! {
                        <div class=format!("toast {}", kind.css_modifier())>
                            <div class="toast__body">
                                <strong class="toast__title">{title}</strong>
                                {body}
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
