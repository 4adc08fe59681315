//! Browser `localStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Preferences and in-progress form drafts are the only values that survive a
//! reload. Outside a `csr` build every read is `None` and every write is a
//! no-op, so callers never branch on the target.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::state::prefs::{Language, PrefsState, Theme};

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for {key}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

pub fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}

/// Load a JSON value for `key`. Corrupt entries read as absent.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_string(key)?;
    serde_json::from_str(&raw).ok()
}

pub fn save_json<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => save_string(key, &raw),
        Err(e) => log::warn!("could not encode {key}: {e}"),
    }
}

/// Stored preferences, falling back to defaults for missing entries.
pub fn load_prefs(config: &AppConfig) -> PrefsState {
    prefs_from_stored(
        load_string(&config.theme_storage_key).as_deref(),
        load_string(&config.language_storage_key).as_deref(),
    )
}

pub fn save_prefs(config: &AppConfig, prefs: PrefsState) {
    save_string(&config.theme_storage_key, prefs.theme.as_str());
    save_string(&config.language_storage_key, prefs.language.code());
}

fn prefs_from_stored(theme: Option<&str>, language: Option<&str>) -> PrefsState {
    PrefsState {
        theme: theme.map(Theme::from_stored).unwrap_or_default(),
        language: language.map(Language::from_code).unwrap_or_default(),
    }
}
