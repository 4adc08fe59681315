//! Apply the theme preference to the document.
//!
//! `Light`/`Dark` set `data-theme` on `<html>`; `System` removes it so the
//! stylesheet's `prefers-color-scheme` query decides.

use crate::state::prefs::Theme;

pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        let result = match theme.data_attribute() {
            Some(value) => el.set_attribute("data-theme", value),
            None => el.remove_attribute("data-theme"),
        };
        if result.is_err() {
            log::warn!("could not apply theme {}", theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}
