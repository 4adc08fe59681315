//! Profile, notification, and display settings shared by both roles.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::state::prefs::{Language, PrefsState, Theme};
use crate::state::session::SessionContext;
use crate::util::notify::use_notifier;
use crate::util::{storage, theme};

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let prefs = expect_context::<RwSignal<PrefsState>>();
    let config = expect_context::<AppConfig>();
    let notifier = use_notifier();

    let current = session.session();
    let name = RwSignal::new(current.as_ref().map(|s| s.display_name.clone()).unwrap_or_default());
    let email = current.as_ref().map(|s| s.email.clone()).unwrap_or_default();
    let role_label = current.as_ref().map_or("", |s| s.role.label());

    let email_updates = RwSignal::new(true);
    let pickup_reminders = RwSignal::new(true);
    let public_profile = RwSignal::new(false);

    let on_theme = move |ev: leptos::ev::Event| {
        let next = Theme::from_stored(&event_target_value(&ev));
        prefs.update(|p| p.theme = next);
        theme::apply(next);
    };
    let on_language = move |ev: leptos::ev::Event| {
        let next = Language::from_code(&event_target_value(&ev));
        prefs.update(|p| p.language = next);
    };
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        storage::save_prefs(&config, prefs.get_untracked());
        notifier.success("Settings saved", "Your preferences have been updated.");
    };

    let theme_options = Theme::ALL
        .into_iter()
        .map(|t| view! { <option value=t.as_str() selected=move || prefs.with(|p| p.theme == t)>{t.label()}</option> })
        .collect_view();
    let language_options = Language::ALL
        .into_iter()
        .map(|l| {
            view! { <option value=l.code() selected=move || prefs.with(|p| p.language == l)>{l.native_name()}</option> }
        })
        .collect_view();

    view! {
        <form class="settings" on:submit=on_save>
            <fieldset>
                <legend>"Profile"</legend>
                <label>
                    "Name"
                    <input type="text" prop:value=move || name.get() on:input=move |ev| name.set(event_target_value(&ev))/>
                </label>
                <label>"Email" <input type="email" value=email readonly=true/></label>
                <p class="settings__role">{role_label}</p>
            </fieldset>
            <fieldset>
                <legend>"Notifications"</legend>
                <Toggle label="Email notifications" value=email_updates/>
                <Toggle label="Pickup reminders" value=pickup_reminders/>
                <Toggle label="Public profile" value=public_profile/>
            </fieldset>
            <fieldset>
                <legend>"Display"</legend>
                <label>"Theme" <select on:change=on_theme>{theme_options}</select></label>
                <label>"Language" <select on:change=on_language>{language_options}</select></label>
            </fieldset>
            <button type="submit" class="button">"Save Changes"</button>
        </form>
    }
}

#[component]
fn Toggle(label: &'static str, value: RwSignal<bool>) -> impl IntoView {
    view! {
        <label class="toggle">
            <input
                type="checkbox"
                prop:checked=move || value.get()
                on:change=move |ev| value.set(event_target_checked(&ev))
            />
            {label}
        </label>
    }
}
