//! Email + password sign-in with a role choice.

use access::Role;
use access::backend::{DEFAULT_LOGIN_ROLE, LoginRequest};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::forms::login_role;
use crate::state::session::{AppSessionService, SessionContext};
use crate::util::notify::use_notifier;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let service = expect_context::<AppSessionService>();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(DEFAULT_LOGIN_ROLE.as_str().to_owned());

    // Once a session exists (fresh login or a returning visit), go to its
    // dashboard.
    Effect::new(move || {
        if !session.is_loading() {
            if let Some(current) = session.role() {
                navigate(&current.dashboard_path(), NavigateOptions::default());
            }
        }
    });

    let login_service = service.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.0.with_untracked(|s| s.is_loading()) {
            return;
        }
        let request = LoginRequest::new(email.get_untracked(), password.get_untracked(), login_role(&role.get_untracked()));
        let service = login_service.clone();
        leptos::task::spawn_local(async move {
            match service.login(request).await {
                Ok(s) => {
                    notifier.success("Welcome back", format!("Signed in as {}", s.display_name));
                }
                Err(e) => {
                    notifier.auth_failed("Login failed", &e);
                }
            }
        });
    };

    let on_cancel = Callback::new(move |()| {
        service.cancel_pending();
    });

    let role_options = Role::ALL
        .into_iter()
        .map(|r| view! { <option value=r.as_str() selected=move || role.get() == r.as_str()>{r.label()}</option> })
        .collect_view();

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to your Food Bridge account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label>
                        "Email"
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "I am a"
                        <select on:change=move |ev| role.set(event_target_value(&ev))>{role_options}</select>
                    </label>
                    <button class="button" type="submit" disabled=move || session.is_loading()>
                        {move || if session.is_loading() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || session.is_loading()>
                    <button class="button button--ghost" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                </Show>
                <p class="auth-card__footer">"No account yet? " <a href="/signup">"Sign up"</a></p>
            </div>
        </div>
    }
}
