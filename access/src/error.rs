//! Error taxonomy for session operations.
//!
//! Route guard redirects are deliberately not errors; see
//! [`crate::guard::RedirectReason`].

/// Form-level validation failure. Field names are the stable identifiers the
/// views use to highlight inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid email address")]
    InvalidEmail,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("unsupported role: {0}")]
    UnsupportedRole(String),
}

/// Failure of a login or signup call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The call was superseded by a logout, another login, or an explicit
    /// cancel before it resolved. Its result was discarded.
    #[error("authentication request was cancelled")]
    Cancelled,
}

impl AuthError {
    /// Whether the caller should surface this failure to the user.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}
