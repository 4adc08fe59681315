use super::*;

#[test]
fn missing_entries_use_defaults() {
    assert_eq!(prefs_from_stored(None, None), PrefsState::default());
}

#[test]
fn stored_entries_are_parsed() {
    let prefs = prefs_from_stored(Some("dark"), Some("FR"));
    assert_eq!(prefs.theme, Theme::Dark);
    assert_eq!(prefs.language, Language::Fr);
}

#[test]
fn garbage_entries_fall_back() {
    let prefs = prefs_from_stored(Some("neon"), Some("klingon"));
    assert_eq!(prefs, PrefsState::default());
}

#[test]
fn native_storage_is_empty() {
    let config = AppConfig::default();
    save_prefs(&config, PrefsState { theme: Theme::Dark, language: Language::Es });
    assert_eq!(load_prefs(&config), PrefsState::default());
    assert_eq!(load_json::<Vec<u32>>("anything"), None);
}
