use super::*;

#[test]
fn defaults_are_system_and_english() {
    let prefs = PrefsState::default();
    assert_eq!(prefs.theme, Theme::System);
    assert_eq!(prefs.language, Language::En);
}

#[test]
fn theme_round_trips_through_stored_string() {
    for theme in Theme::ALL {
        assert_eq!(Theme::from_stored(theme.as_str()), theme);
    }
}

#[test]
fn unknown_theme_is_system() {
    assert_eq!(Theme::from_stored("solarized"), Theme::System);
}

#[test]
fn system_theme_removes_data_attribute() {
    assert_eq!(Theme::System.data_attribute(), None);
    assert_eq!(Theme::Dark.data_attribute(), Some("dark"));
}

#[test]
fn language_round_trips_through_code() {
    for language in Language::ALL {
        assert_eq!(Language::from_code(language.code()), language);
    }
    assert_eq!(Language::from_code(" FR "), Language::Fr);
}

#[test]
fn unknown_language_is_english() {
    assert_eq!(Language::from_code("de"), Language::En);
}
