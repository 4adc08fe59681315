//! The application route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every path the app knows is a [`Route`] variant. The guard, the navigation
//! menu, and redirect targets all derive from this one table; the Leptos
//! router only maps URL shapes onto it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::role::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublicPage {
    Landing,
    Login,
    Signup,
    Community,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DonorPage {
    Dashboard,
    LogFood,
    Matches,
    Schedule,
    Impact,
    Notifications,
    Settings,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecipientPage {
    Dashboard,
    Search,
    Schedule,
    Impact,
    Notifications,
    Settings,
    Support,
    /// Request form for a specific listing id.
    Request(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Public(PublicPage),
    Donor(DonorPage),
    Recipient(RecipientPage),
    /// Normalized path that matched nothing.
    NotFound(String),
}

impl Route {
    pub const LOGIN_PATH: &'static str = "/login";

    /// Parse a URL path (query string and fragment are ignored, as are empty
    /// segments from doubled or trailing slashes).
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Public(PublicPage::Landing),
            ["login"] => Self::Public(PublicPage::Login),
            ["signup"] => Self::Public(PublicPage::Signup),
            ["community"] => Self::Public(PublicPage::Community),
            ["donor", page] => match *page {
                "dashboard" => Self::Donor(DonorPage::Dashboard),
                "log-food" => Self::Donor(DonorPage::LogFood),
                "matches" => Self::Donor(DonorPage::Matches),
                "schedule" => Self::Donor(DonorPage::Schedule),
                "impact" => Self::Donor(DonorPage::Impact),
                "notifications" => Self::Donor(DonorPage::Notifications),
                "settings" => Self::Donor(DonorPage::Settings),
                _ => Self::not_found(&segments),
            },
            ["recipient", page] => match *page {
                "dashboard" => Self::Recipient(RecipientPage::Dashboard),
                "search" => Self::Recipient(RecipientPage::Search),
                "schedule" => Self::Recipient(RecipientPage::Schedule),
                "impact" => Self::Recipient(RecipientPage::Impact),
                "notifications" => Self::Recipient(RecipientPage::Notifications),
                "settings" => Self::Recipient(RecipientPage::Settings),
                "support" => Self::Recipient(RecipientPage::Support),
                _ => Self::not_found(&segments),
            },
            ["recipient", "request", id] => Self::Recipient(RecipientPage::Request((*id).to_owned())),
            _ => Self::not_found(&segments),
        }
    }

    fn not_found(segments: &[&str]) -> Self {
        Self::NotFound(format!("/{}", segments.join("/")))
    }

    /// The role a session must hold to render this route, if any.
    #[must_use]
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Self::Public(_) | Self::NotFound(_) => None,
            Self::Donor(_) => Some(Role::Donor),
            Self::Recipient(_) => Some(Role::Recipient),
        }
    }

    /// Dashboard route for `role`.
    #[must_use]
    pub fn dashboard(role: Role) -> Self {
        match role {
            Role::Donor => Self::Donor(DonorPage::Dashboard),
            Role::Recipient => Self::Recipient(RecipientPage::Dashboard),
        }
    }

    /// Canonical path. `Route::parse(&r.path()) == r` for every known route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Public(PublicPage::Landing) => "/".to_owned(),
            Self::Public(PublicPage::Login) => Self::LOGIN_PATH.to_owned(),
            Self::Public(PublicPage::Signup) => "/signup".to_owned(),
            Self::Public(PublicPage::Community) => "/community".to_owned(),
            Self::Donor(page) => {
                let slug = match page {
                    DonorPage::Dashboard => "dashboard",
                    DonorPage::LogFood => "log-food",
                    DonorPage::Matches => "matches",
                    DonorPage::Schedule => "schedule",
                    DonorPage::Impact => "impact",
                    DonorPage::Notifications => "notifications",
                    DonorPage::Settings => "settings",
                };
                format!("/donor/{slug}")
            }
            Self::Recipient(RecipientPage::Request(id)) => format!("/recipient/request/{id}"),
            Self::Recipient(page) => {
                let slug = match page {
                    RecipientPage::Dashboard => "dashboard",
                    RecipientPage::Search => "search",
                    RecipientPage::Schedule => "schedule",
                    RecipientPage::Impact => "impact",
                    RecipientPage::Notifications => "notifications",
                    RecipientPage::Settings => "settings",
                    RecipientPage::Support => "support",
                    RecipientPage::Request(_) => "request",
                };
                format!("/recipient/{slug}")
            }
            Self::NotFound(path) => path.clone(),
        }
    }
}

/// One entry of the role-aware navigation bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    /// Translation key for the label (see the app's i18n table).
    pub label_key: &'static str,
    pub route: Route,
}

impl MenuItem {
    fn new(label_key: &'static str, route: Route) -> Self {
        Self { label_key, route }
    }
}

/// Navigation entries for the given session role; `None` is the signed-out
/// menu.
#[must_use]
pub fn menu_for(role: Option<Role>) -> Vec<MenuItem> {
    let community = MenuItem::new("nav.community", Route::Public(PublicPage::Community));
    match role {
        None => vec![
            community,
            MenuItem::new("nav.login", Route::Public(PublicPage::Login)),
            MenuItem::new("nav.signup", Route::Public(PublicPage::Signup)),
        ],
        Some(Role::Donor) => vec![
            MenuItem::new("nav.dashboard", Route::dashboard(Role::Donor)),
            MenuItem::new("nav.logFood", Route::Donor(DonorPage::LogFood)),
            MenuItem::new("nav.matches", Route::Donor(DonorPage::Matches)),
            MenuItem::new("nav.schedule", Route::Donor(DonorPage::Schedule)),
            MenuItem::new("nav.impact", Route::Donor(DonorPage::Impact)),
            MenuItem::new("nav.notifications", Route::Donor(DonorPage::Notifications)),
            community,
            MenuItem::new("nav.settings", Route::Donor(DonorPage::Settings)),
        ],
        Some(Role::Recipient) => vec![
            MenuItem::new("nav.dashboard", Route::dashboard(Role::Recipient)),
            MenuItem::new("nav.search", Route::Recipient(RecipientPage::Search)),
            MenuItem::new("nav.schedule", Route::Recipient(RecipientPage::Schedule)),
            MenuItem::new("nav.impact", Route::Recipient(RecipientPage::Impact)),
            MenuItem::new("nav.notifications", Route::Recipient(RecipientPage::Notifications)),
            community,
            MenuItem::new("nav.support", Route::Recipient(RecipientPage::Support)),
            MenuItem::new("nav.settings", Route::Recipient(RecipientPage::Settings)),
        ],
    }
}
