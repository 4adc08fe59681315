//! Authentication backend seam.
//!
//! The app has no auth server; [`LocalAuthBackend`] fabricates sessions after a
//! local credential check. Anything that can answer [`AuthBackend`] (a real
//! HTTP client, a delayed wrapper, a test double) can replace it.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use crate::error::{AuthError, ValidationError};
use crate::role::Role;
use crate::session::Session;

/// Credentials submitted by the login form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// Role picked on the form. `None` falls back to [`DEFAULT_LOGIN_ROLE`].
    pub role: Option<Role>,
}

/// Role assumed when a login carries no explicit role; matches the login
/// form's preselected option.
pub const DEFAULT_LOGIN_ROLE: Role = Role::Donor;

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: Option<Role>) -> Self {
        Self { email: email.into(), password: password.into(), role }
    }
}

/// Fields collected by the signup form, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Raw select value; parsed into a [`Role`] during validation.
    pub role: String,
    pub password: String,
    pub confirm_password: String,
}

/// A signup profile that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidSignup {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl SignupProfile {
    /// Check required fields, password confirmation, email shape, and role.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule, checking fields in form order.
    pub fn validate(&self) -> Result<ValidSignup, ValidationError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("location", &self.location),
            ("role", &self.role),
            ("password", &self.password),
            ("confirm_password", &self.confirm_password),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ValidationError::MissingField(*field));
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        let email = normalize_email(&self.email).ok_or(ValidationError::InvalidEmail)?;
        let role = self
            .role
            .parse::<Role>()
            .map_err(|e| ValidationError::UnsupportedRole(e.0))?;
        Ok(ValidSignup { name: self.name.trim().to_owned(), email, role })
    }
}

/// Trim and lowercase an email, requiring exactly one `@` with non-empty
/// local and domain parts.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let mut parts = normalized.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };
    if local.is_empty() || domain.is_empty() {
        return None;
    }
    Some(normalized)
}

/// Display name derived from an email's local part.
#[must_use]
pub fn name_from_email(email: &str) -> String {
    email
        .split('@')
        .next()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("user")
        .to_owned()
}

/// Provider-neutral async auth. Futures are not `Send`: the browser runs
/// them on a single-threaded executor.
#[async_trait::async_trait(?Send)]
pub trait AuthBackend {
    /// # Errors
    ///
    /// `InvalidCredentials` when the credential check fails.
    async fn login(&self, request: LoginRequest) -> Result<Session, AuthError>;

    /// # Errors
    ///
    /// `Validation` when the profile is incomplete or inconsistent.
    async fn signup(&self, profile: SignupProfile) -> Result<Session, AuthError>;
}

/// In-process backend: checks credential shape, then fabricates a session.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalAuthBackend;

impl LocalAuthBackend {
    /// Synchronous core of [`AuthBackend::login`].
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` for a malformed email or empty password.
    pub fn check_login(&self, request: &LoginRequest) -> Result<Session, AuthError> {
        let email = normalize_email(&request.email).ok_or(AuthError::InvalidCredentials)?;
        if request.password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        let role = request.role.unwrap_or(DEFAULT_LOGIN_ROLE);
        Ok(Session::new(name_from_email(&email), email, role))
    }

    /// Synchronous core of [`AuthBackend::signup`].
    ///
    /// # Errors
    ///
    /// `Validation` with the first failing rule.
    pub fn check_signup(&self, profile: &SignupProfile) -> Result<Session, AuthError> {
        let valid = profile.validate()?;
        Ok(Session::new(valid.name, valid.email, valid.role))
    }
}

#[async_trait::async_trait(?Send)]
impl AuthBackend for LocalAuthBackend {
    async fn login(&self, request: LoginRequest) -> Result<Session, AuthError> {
        self.check_login(&request)
    }

    async fn signup(&self, profile: SignupProfile) -> Result<Session, AuthError> {
        self.check_signup(&profile)
    }
}
