//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::gate::Gate;
use crate::components::navigation::Navigation;
use crate::components::toaster::Toaster;
use crate::config::AppConfig;
use crate::net::auth::SimulatedAuthBackend;
use crate::pages::community::CommunityPage;
use crate::pages::donor::{
    DonorImpact, DonorSchedule, DonorSettings, dashboard::DonorDashboard, log_food::LogFoodPage, matches::MatchesPage,
};
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::notifications::NotificationsPage;
use crate::pages::recipient::{
    RecipientImpact, RecipientSchedule, RecipientSettings, dashboard::RecipientDashboard, request::RequestPage,
    search::SearchPage, support::SupportPage,
};
use crate::pages::signup::SignupPage;
use crate::state::availability::Availability;
use crate::state::community::CommunityState;
use crate::state::donations::DonationsState;
use crate::state::listings::ListingsState;
use crate::state::matches::MatchesState;
use crate::state::notifications::NotificationsState;
use crate::state::pickups::PickupsState;
use crate::state::session::{AppSessionService, SessionContext};
use crate::state::support::SupportDesk;
use crate::state::toast::ToastState;
use crate::util::notify::Notifier;
use crate::util::{storage, theme};

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing. View
/// models live for the lifetime of the app, so a claim made on one page is
/// visible on every other page until reload.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let prefs = RwSignal::new(storage::load_prefs(&config));
    theme::apply(prefs.get_untracked().theme);

    let backend = SimulatedAuthBackend::from_config(&config);
    log::debug!("auth backend answers after {} ms", backend.delay_ms());
    let service = AppSessionService::new(SessionContext::new(), backend);
    let session = *service.cell();
    let notifier = Notifier::new(RwSignal::new(ToastState::with_limit(config.toast_limit)), config.toast_duration_ms);

    provide_context(config);
    provide_context(prefs);
    provide_context(session);
    provide_context(service);
    provide_context(notifier);
    provide_context(RwSignal::new(ListingsState::default()));
    provide_context(RwSignal::new(PickupsState::default()));
    provide_context(RwSignal::new(DonationsState::default()));
    provide_context(RwSignal::new(CommunityState::default()));
    provide_context(RwSignal::new(MatchesState::default()));
    provide_context(RwSignal::new(SupportDesk::default()));
    provide_context(RwSignal::new(NotificationsState::default()));
    provide_context(RwSignal::new(Availability::default()));

    view! {
        <Stylesheet id="foodbridge" href="/foodbridge.css"/>
        <Title text="FoodBridge"/>

        <Router>
            <Navigation/>
            <main class="app-main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("community") view=CommunityPage/>

                    <Route
                        path=(StaticSegment("donor"), StaticSegment("dashboard"))
                        view=|| view! { <Gate><DonorDashboard/></Gate> }
                    />
                    <Route
                        path=(StaticSegment("donor"), StaticSegment("log-food"))
                        view=|| view! { <Gate><LogFoodPage/></Gate> }
                    />
                    <Route
                        path=(StaticSegment("donor"), StaticSegment("matches"))
                        view=|| view! { <Gate><MatchesPage/></Gate> }
                    />
                    <Route
                        path=(StaticSegment("donor"), StaticSegment("schedule"))
                        view=|| view! { <Gate><DonorSchedule/></Gate> }
                    />
                    <Route
                        path=(StaticSegment("donor"), StaticSegment("impact"))
                        view=|| view! { <Gate><DonorImpact/></Gate> }
                    />
                    <Route
                        path=(StaticSegment("donor"), StaticSegment("notifications"))
                        view=|| view! { <Gate><NotificationsPage/></Gate> }
                    />
                    <Route
                        path=(StaticSegment("donor"), StaticSegment("settings"))
                        view=|| view! { <Gate><DonorSettings/></Gate> }
                    />

                    <Route
                        path=(StaticSegment("recipient"), StaticSegment("dashboard"))
                        view=|| view! { <Gate><RecipientDashboard/></Gate> }
                    />
                    <Route
                        path=(StaticSegment("recipient"), StaticSegment("search"))
                        view=|| view! { <Gate><SearchPage/></Gate> }
                    />
                    <Route
                        path=(StaticSegment("recipient"), StaticSegment("request"), ParamSegment("id"))
                        view=|| view! { <Gate><RequestPage/></Gate> }
                    />
                    <Route
                        path=(StaticSegment("recipient"), StaticSegment("schedule"))
                        view=|| view! { <Gate><RecipientSchedule/></Gate> }
                    />
                    <Route
                        path=(StaticSegment("recipient"), StaticSegment("impact"))
                        view=|| view! { <Gate><RecipientImpact/></Gate> }
                    />
                    <Route
                        path=(StaticSegment("recipient"), StaticSegment("notifications"))
                        view=|| view! { <Gate><NotificationsPage/></Gate> }
                    />
                    <Route
                        path=(StaticSegment("recipient"), StaticSegment("settings"))
                        view=|| view! { <Gate><RecipientSettings/></Gate> }
                    />
                    <Route
                        path=(StaticSegment("recipient"), StaticSegment("support"))
                        view=|| view! { <Gate><SupportPage/></Gate> }
                    />
                </Routes>
            </main>
            <Toaster/>
        </Router>
    }
}
