//! Auth backend with artificial latency.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use access::backend::{AuthBackend, LocalAuthBackend, LoginRequest, SignupProfile};
use access::{AuthError, Session};

use crate::config::AppConfig;

#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedAuthBackend {
    inner: LocalAuthBackend,
    delay_ms: u64,
}

impl SimulatedAuthBackend {
    #[must_use]
    pub fn new(delay_ms: u64) -> Self {
        Self { inner: LocalAuthBackend, delay_ms }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.login_delay_ms)
    }

    #[must_use]
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }
}

#[async_trait::async_trait(?Send)]
impl AuthBackend for SimulatedAuthBackend {
    async fn login(&self, request: LoginRequest) -> Result<Session, AuthError> {
        pause(self.delay_ms).await;
        self.inner.check_login(&request)
    }

    async fn signup(&self, profile: SignupProfile) -> Result<Session, AuthError> {
        pause(self.delay_ms).await;
        self.inner.check_signup(&profile)
    }
}

#[cfg(feature = "csr")]
async fn pause(ms: u64) {
    if ms > 0 {
        gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    }
}

// Native builds have no timer source; the call resolves immediately.
#[cfg(not(feature = "csr"))]
#[allow(clippy::unused_async)]
async fn pause(ms: u64) {
    let _ = ms;
}
