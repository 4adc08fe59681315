use leptos::prelude::*;

use crate::state::session::SessionContext;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let home = move || session.role().map_or_else(|| "/".to_owned(), |r| r.dashboard_path());

    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <p>"We couldn't find that page."</p>
            <a class="button" href=home>"Go home"</a>
        </section>
    }
}
