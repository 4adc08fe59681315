//! Account registration. A successful signup signs the user in immediately.

use access::Role;
use access::backend::SignupProfile;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::session::{AppSessionService, SessionContext};
use crate::util::notify::use_notifier;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let service = expect_context::<AppSessionService>();
    let notifier = use_notifier();
    let navigate = use_navigate();
    let query = use_query_map();

    // Landing-page CTAs link here with `?role=donor|recipient`.
    let preset_role = query
        .with_untracked(|q| q.get("role"))
        .and_then(|r| r.parse::<Role>().ok())
        .map(|r| r.as_str().to_owned())
        .unwrap_or_default();
    let profile = RwSignal::new(SignupProfile { role: preset_role, ..SignupProfile::default() });
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        if !session.is_loading() {
            if let Some(current) = session.role() {
                navigate(&current.dashboard_path(), NavigateOptions::default());
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.0.with_untracked(|s| s.is_loading()) {
            return;
        }
        error.set(None);
        let submitted = profile.get_untracked();
        let service = service.clone();
        leptos::task::spawn_local(async move {
            match service.signup(submitted).await {
                Ok(s) => {
                    notifier.success("Account created", format!("Welcome to Food Bridge, {}!", s.display_name));
                }
                Err(e) => {
                    if e.is_user_facing() {
                        error.set(Some(e.to_string()));
                    }
                    notifier.auth_failed("Signup failed", &e);
                }
            }
        });
    };

    let field = move |label: &'static str, kind: &'static str, set: fn(&mut SignupProfile, String)| {
        view! {
            <label>
                {label}
                <input type=kind on:input=move |ev| profile.update(|p| set(p, event_target_value(&ev)))/>
            </label>
        }
    };

    let role_options = Role::ALL
        .into_iter()
        .map(|r| {
            view! { <option value=r.as_str() selected=move || profile.with(|p| p.role == r.as_str())>{r.label()}</option> }
        })
        .collect_view();

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Join Food Bridge"</h1>
                <p class="auth-card__subtitle">"Create an account to start sharing or receiving food"</p>
                <form class="auth-form" on:submit=on_submit>
                    {field("Full name / organization", "text", |p, v| p.name = v)}
                    {field("Email", "email", |p, v| p.email = v)}
                    {field("Phone", "tel", |p, v| p.phone = v)}
                    {field("Location", "text", |p, v| p.location = v)}
                    <label>
                        "I want to"
                        <select on:change=move |ev| profile.update(|p| p.role = event_target_value(&ev))>
                            <option value="">"Select your role"</option>
                            {role_options}
                        </select>
                    </label>
                    {field("Password", "password", |p, v| p.password = v)}
                    {field("Confirm password", "password", |p, v| p.confirm_password = v)}
                    <Show when=move || error.with(Option::is_some)>
                        <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="button" type="submit" disabled=move || session.is_loading()>
                        {move || if session.is_loading() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-card__footer">"Already registered? " <a href="/login">"Sign in"</a></p>
            </div>
        </div>
    }
}
