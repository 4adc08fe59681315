use super::*;

fn known_routes() -> Vec<Route> {
    vec![
        Route::Public(PublicPage::Landing),
        Route::Public(PublicPage::Login),
        Route::Public(PublicPage::Signup),
        Route::Public(PublicPage::Community),
        Route::Donor(DonorPage::Dashboard),
        Route::Donor(DonorPage::LogFood),
        Route::Donor(DonorPage::Matches),
        Route::Donor(DonorPage::Schedule),
        Route::Donor(DonorPage::Impact),
        Route::Donor(DonorPage::Notifications),
        Route::Donor(DonorPage::Settings),
        Route::Recipient(RecipientPage::Dashboard),
        Route::Recipient(RecipientPage::Search),
        Route::Recipient(RecipientPage::Schedule),
        Route::Recipient(RecipientPage::Impact),
        Route::Recipient(RecipientPage::Notifications),
        Route::Recipient(RecipientPage::Settings),
        Route::Recipient(RecipientPage::Support),
        Route::Recipient(RecipientPage::Request("42".to_owned())),
    ]
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn every_known_route_round_trips_through_its_path() {
    for route in known_routes() {
        assert_eq!(Route::parse(&route.path()), route, "{}", route.path());
    }
}

#[test]
fn parse_ignores_trailing_slash_query_and_fragment() {
    assert_eq!(Route::parse("/donor/log-food/"), Route::Donor(DonorPage::LogFood));
    assert_eq!(Route::parse("/recipient/search?q=bread"), Route::Recipient(RecipientPage::Search));
    assert_eq!(Route::parse("/login#top"), Route::Public(PublicPage::Login));
    assert_eq!(Route::parse(""), Route::Public(PublicPage::Landing));
}

#[test]
fn unknown_paths_are_not_found() {
    assert_eq!(Route::parse("/volunteer/dashboard"), Route::NotFound("/volunteer/dashboard".to_owned()));
    assert_eq!(Route::parse("/donor/search"), Route::NotFound("/donor/search".to_owned()));
    assert_eq!(Route::parse("/recipient/log-food"), Route::NotFound("/recipient/log-food".to_owned()));
    assert_eq!(Route::parse("/donor"), Route::NotFound("/donor".to_owned()));
}

// =============================================================
// Required roles
// =============================================================

#[test]
fn public_routes_require_no_role() {
    for route in known_routes().into_iter().filter(|r| matches!(r, Route::Public(_))) {
        assert_eq!(route.required_role(), None);
    }
}

#[test]
fn gated_routes_require_their_prefix_role() {
    for route in known_routes() {
        let expected = if route.path().starts_with("/donor/") {
            Some(Role::Donor)
        } else if route.path().starts_with("/recipient/") {
            Some(Role::Recipient)
        } else {
            None
        };
        assert_eq!(route.required_role(), expected, "{}", route.path());
    }
}

#[test]
fn dashboard_route_matches_role_dashboard_path() {
    for role in Role::ALL {
        assert_eq!(Route::dashboard(role).path(), role.dashboard_path());
    }
}

// =============================================================
// Menus
// =============================================================

#[test]
fn signed_out_menu_has_only_public_routes() {
    assert!(menu_for(None).iter().all(|item| item.route.required_role().is_none()));
}

#[test]
fn role_menus_never_link_to_the_other_role() {
    for role in Role::ALL {
        for item in menu_for(Some(role)) {
            let required = item.route.required_role();
            assert!(required.is_none() || required == Some(role), "{role} menu links {}", item.route.path());
        }
    }
}

#[test]
fn role_menus_start_at_dashboard() {
    for role in Role::ALL {
        assert_eq!(menu_for(Some(role))[0].route, Route::dashboard(role));
    }
}

#[test]
fn both_roles_reach_their_notifications_inbox() {
    assert_eq!(Route::parse("/donor/notifications"), Route::Donor(DonorPage::Notifications));
    assert_eq!(Route::parse("/recipient/notifications"), Route::Recipient(RecipientPage::Notifications));
    for role in Role::ALL {
        assert!(menu_for(Some(role)).iter().any(|item| item.label_key == "nav.notifications"));
    }
}
