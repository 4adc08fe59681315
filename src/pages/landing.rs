//! Public landing page.

use access::Role;
use leptos::prelude::*;

use crate::config::AppConfig;
use crate::i18n::use_translate;
use crate::state::prefs::{Language, PrefsState};
use crate::state::session::SessionContext;
use crate::util::storage;

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let prefs = expect_context::<RwSignal<PrefsState>>();
    let config = expect_context::<AppConfig>();
    let t = use_translate();

    let on_language = move |ev: leptos::ev::Event| {
        let next = Language::from_code(&event_target_value(&ev));
        prefs.update(|p| p.language = next);
        storage::save_prefs(&config, prefs.get_untracked());
    };
    let language_options = Language::ALL
        .into_iter()
        .map(|l| {
            view! { <option value=l.code() selected=move || prefs.with(|p| p.language == l)>{l.native_name()}</option> }
        })
        .collect_view();

    let signup_as = |role: Role| format!("/signup?role={}", role.as_str());

    view! {
        <div class="landing">
            <section class="hero">
                <select class="hero__language" aria-label="Language" on:change=on_language>
                    {language_options}
                </select>
                <h1>{move || t("hero.title")}</h1>
                <p class="hero__tagline">{move || t("app.tagline")}</p>
                <p>{move || t("hero.subtitle")}</p>
                <Show
                    when=move || session.role().is_some()
                    fallback=move || {
                        view! {
                            <div class="hero__actions">
                                <a class="button" href="/signup">{move || t("nav.signup")}</a>
                                <a class="button button--ghost" href="/login">{move || t("nav.login")}</a>
                            </div>
                        }
                    }
                >
                    <a class="button" href=move || session.role().map(|r| r.dashboard_path()).unwrap_or_default()>
                        {move || t("nav.dashboard")}
                    </a>
                </Show>
            </section>

            <section class="features">
                <h2>{move || t("features.title")}</h2>
                <div class="card-grid">
                    <article class="feature-card">
                        <h3>{move || t("features.donor.title")}</h3>
                        <p>{move || t("features.donor.description")}</p>
                    </article>
                    <article class="feature-card">
                        <h3>{move || t("features.recipient.title")}</h3>
                        <p>{move || t("features.recipient.description")}</p>
                    </article>
                </div>
            </section>

            <section class="cta">
                <h2>{move || t("cta.title")}</h2>
                <p>{move || t("cta.description")}</p>
                <a class="button" href=signup_as(Role::Donor)>{move || t("cta.donor")}</a>
                <a class="button button--ghost" href=signup_as(Role::Recipient)>{move || t("cta.recipient")}</a>
            </section>
        </div>
    }
}
