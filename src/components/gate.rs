//! Route guard wrapper for role-specific pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every donor and recipient route renders its page inside `Gate`. The guard
//! is re-evaluated whenever the path or the session store changes, so logging
//! out on a gated page immediately redirects to `/login`.

use access::GuardDecision;
use access::guard::decide_path;
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::pages::not_found::NotFoundPage;
use crate::state::session::SessionContext;

#[component]
pub fn Gate(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let location = use_location();

    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        session.0.with(|store| decide_path(&path, store))
    });

    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Pending => view! {
            <div class="gate-pending" aria-busy="true">
                <span class="spinner"></span>
                <p>"Checking your session..."</p>
            </div>
        }
        .into_any(),
        GuardDecision::Redirect { to, .. } => view! { <Redirect path=to/> }.into_any(),
        GuardDecision::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
