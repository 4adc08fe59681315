//! Actor roles that gate which routes a session may reach.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a role string is outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported role: {0}")]
pub struct ParseRoleError(pub String);

/// Enumerated actor type. Adding a variant is a compile-checked change: the
/// guard and every role-conditional view match on it exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Donor,
    Recipient,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Donor, Role::Recipient];

    /// Lowercase slug used as the URL prefix (`/donor/...`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Donor => "donor",
            Self::Recipient => "recipient",
        }
    }

    /// Human-facing label used in forms and badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Donor => "Food Donor",
            Self::Recipient => "Food Recipient",
        }
    }

    /// Landing path for an authenticated session of this role.
    #[must_use]
    pub fn dashboard_path(self) -> String {
        crate::routes::Route::dashboard(self).path()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "donor" => Ok(Self::Donor),
            "recipient" => Ok(Self::Recipient),
            _ => Err(ParseRoleError(raw.trim().to_owned())),
        }
    }
}
