use super::*;

#[test]
fn english_lookup() {
    assert_eq!(translate(Language::En, "nav.login"), "Login");
}

#[test]
fn spanish_and_french_lookups() {
    assert_eq!(translate(Language::Es, "nav.logout"), "Cerrar Sesión");
    assert_eq!(translate(Language::Fr, "nav.dashboard"), "Tableau de Bord");
}

#[test]
fn missing_translation_falls_back_to_english() {
    assert_eq!(translate(Language::Es, "app.name"), "Food Bridge");
}

#[test]
fn unknown_key_is_returned_verbatim() {
    assert_eq!(translate(Language::Fr, "nav.nowhere"), "nav.nowhere");
}

#[test]
fn every_menu_label_key_has_an_english_entry() {
    for role in [None, Some(access::Role::Donor), Some(access::Role::Recipient)] {
        for item in access::routes::menu_for(role) {
            assert_ne!(translate(Language::En, item.label_key), item.label_key);
        }
    }
}

#[test]
fn non_english_tables_only_use_english_keys() {
    for entries in [ES, FR] {
        for (key, _) in entries {
            assert!(lookup(EN, key).is_some(), "{key} missing from EN");
        }
    }
}
