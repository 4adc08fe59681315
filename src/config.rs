//! Client configuration baked in at build time.
//!
//! The browser has no process environment, so values come from `option_env!`
//! when the bundle is compiled. Parsing goes through [`AppConfig::from_lookup`]
//! so tests can feed arbitrary key/value sources.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_LOGIN_DELAY_MS: u64 = 800;
pub const DEFAULT_TOAST_DURATION_MS: u64 = 4000;
pub const DEFAULT_TOAST_LIMIT: usize = 3;
pub const DEFAULT_THEME_STORAGE_KEY: &str = "food_bridge_theme";
pub const DEFAULT_LANGUAGE_STORAGE_KEY: &str = "food_bridge_language";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Artificial latency of the simulated auth backend.
    pub login_delay_ms: u64,
    /// How long a toast stays on screen before auto-dismissal.
    pub toast_duration_ms: u64,
    /// Maximum toasts shown at once; the oldest is dropped beyond this.
    pub toast_limit: usize,
    pub theme_storage_key: String,
    pub language_storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            toast_limit: DEFAULT_TOAST_LIMIT,
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            language_storage_key: DEFAULT_LANGUAGE_STORAGE_KEY.to_owned(),
        }
    }
}

impl AppConfig {
    /// Build config from compile-time environment variables.
    ///
    /// Optional:
    /// - `FOOD_BRIDGE_LOGIN_DELAY_MS`: default 800
    /// - `FOOD_BRIDGE_TOAST_DURATION_MS`: default 4000
    /// - `FOOD_BRIDGE_TOAST_LIMIT`: default 3, minimum 1
    /// - `FOOD_BRIDGE_THEME_KEY`: default `food_bridge_theme`
    /// - `FOOD_BRIDGE_LANGUAGE_KEY`: default `food_bridge_language`
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            "FOOD_BRIDGE_LOGIN_DELAY_MS" => option_env!("FOOD_BRIDGE_LOGIN_DELAY_MS"),
            "FOOD_BRIDGE_TOAST_DURATION_MS" => option_env!("FOOD_BRIDGE_TOAST_DURATION_MS"),
            "FOOD_BRIDGE_TOAST_LIMIT" => option_env!("FOOD_BRIDGE_TOAST_LIMIT"),
            "FOOD_BRIDGE_THEME_KEY" => option_env!("FOOD_BRIDGE_THEME_KEY"),
            "FOOD_BRIDGE_LANGUAGE_KEY" => option_env!("FOOD_BRIDGE_LANGUAGE_KEY"),
            _ => None,
        })
    }

    /// Build config from an arbitrary lookup. Missing or unparsable values
    /// fall back to defaults.
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let defaults = Self::default();
        let parse_u64 = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };
        let non_empty = |key: &str, default: String| {
            lookup(key)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map_or(default, str::to_owned)
        };

        let toast_limit = lookup("FOOD_BRIDGE_TOAST_LIMIT")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(defaults.toast_limit);

        Self {
            login_delay_ms: parse_u64("FOOD_BRIDGE_LOGIN_DELAY_MS", defaults.login_delay_ms),
            toast_duration_ms: parse_u64("FOOD_BRIDGE_TOAST_DURATION_MS", defaults.toast_duration_ms),
            toast_limit,
            theme_storage_key: non_empty("FOOD_BRIDGE_THEME_KEY", defaults.theme_storage_key),
            language_storage_key: non_empty("FOOD_BRIDGE_LANGUAGE_KEY", defaults.language_storage_key),
        }
    }
}
