//! Top navigation bar with a role-aware menu.

use access::routes::{MenuItem, menu_for};
use leptos::prelude::*;

use crate::i18n::use_translate;
use crate::state::session::{AppSessionService, SessionContext};
use crate::util::notify::use_notifier;

#[component]
pub fn Navigation() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let service = expect_context::<AppSessionService>();
    let notifier = use_notifier();
    let t = use_translate();

    let home = move || session.role().map_or_else(|| "/".to_owned(), |role| role.dashboard_path());
    let display_name = move || session.session().map(|s| s.display_name).unwrap_or_default();

    // The link itself navigates to "/"; the guard handles any gated page left
    // behind.
    let on_logout = Callback::new(move |()| {
        if service.logout() {
            notifier.info("Signed out", "See you next time.");
        }
    });

    view! {
        <header class="nav">
            <a class="nav__brand" href=home>{move || t("app.name")}</a>
            <nav class="nav__menu">
                <For
                    each=move || menu_for(session.role())
                    key=|item| item.route.path()
                    children=move |item: MenuItem| {
                        let key = item.label_key;
                        view! { <a class="nav__link" href=item.route.path()>{move || t(key)}</a> }
                    }
                />
            </nav>
            <Show when=move || session.role().is_some()>
                <div class="nav__session">
                    <span class="nav__user">{display_name}</span>
                    <a class="nav__logout" href="/" on:click=move |_| on_logout.run(())>
                        {move || t("nav.logout")}
                    </a>
                </div>
            </Show>
        </header>
    }
}
