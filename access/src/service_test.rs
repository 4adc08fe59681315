use std::future::Future;
use std::task::{Context, Poll, Waker};
use std::time::Duration;

use tokio::sync::oneshot;

use super::*;
use crate::backend::LocalAuthBackend;
use crate::role::Role;

// =========================================================================
// Test backends
// =========================================================================

/// Waits on a oneshot before answering, so tests control when a call resolves.
struct GatedBackend {
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl GatedBackend {
    fn new(rx: oneshot::Receiver<()>) -> Self {
        Self { gate: RefCell::new(Some(rx)) }
    }

    async fn wait(&self) {
        let rx = self.gate.borrow_mut().take();
        if let Some(rx) = rx {
            let _ = rx.await;
        }
    }
}

#[async_trait::async_trait(?Send)]
impl AuthBackend for GatedBackend {
    async fn login(&self, request: LoginRequest) -> Result<Session, AuthError> {
        self.wait().await;
        LocalAuthBackend.check_login(&request)
    }

    async fn signup(&self, profile: SignupProfile) -> Result<Session, AuthError> {
        self.wait().await;
        LocalAuthBackend.check_signup(&profile)
    }
}

/// Sleeps for a fixed delay, like the browser's simulated backend.
struct DelayedBackend(Duration);

#[async_trait::async_trait(?Send)]
impl AuthBackend for DelayedBackend {
    async fn login(&self, request: LoginRequest) -> Result<Session, AuthError> {
        tokio::time::sleep(self.0).await;
        LocalAuthBackend.check_login(&request)
    }

    async fn signup(&self, profile: SignupProfile) -> Result<Session, AuthError> {
        tokio::time::sleep(self.0).await;
        LocalAuthBackend.check_signup(&profile)
    }
}

fn new_cell() -> Rc<RefCell<SessionStore>> {
    Rc::new(RefCell::new(SessionStore::default()))
}

fn poll_once<F: Future + ?Sized>(fut: std::pin::Pin<&mut F>) -> Poll<F::Output> {
    let mut cx = Context::from_waker(Waker::noop());
    fut.poll(&mut cx)
}

// =========================================================================
// Happy paths
// =========================================================================

#[tokio::test]
async fn login_installs_session_with_requested_role() {
    let cell = new_cell();
    let service = SessionService::new(cell.clone(), LocalAuthBackend);

    let session = service
        .login(LoginRequest::new("a@b.com", "x", Some(Role::Recipient)))
        .await
        .unwrap();

    assert_eq!(session.role, Role::Recipient);
    assert_eq!(cell.borrow().role(), Some(Role::Recipient));
    assert!(!cell.borrow().is_loading());
}

#[tokio::test]
async fn signup_auto_logs_in() {
    let cell = new_cell();
    let service = SessionService::new(cell.clone(), LocalAuthBackend);
    let profile = SignupProfile {
        name: "Rae".to_owned(),
        email: "rae@shelter.org".to_owned(),
        phone: "555".to_owned(),
        location: "Oakland".to_owned(),
        role: "donor".to_owned(),
        password: "pw".to_owned(),
        confirm_password: "pw".to_owned(),
    };

    service.signup(profile).await.unwrap();
    let store = cell.borrow();
    assert!(store.is_authenticated());
    assert_eq!(store.session().map(|s| s.display_name.as_str()), Some("Rae"));
}

#[tokio::test]
async fn delayed_login_is_loading_until_resolved() {
    let cell = new_cell();
    let service = SessionService::new(cell.clone(), DelayedBackend(Duration::from_millis(20)));

    let mut login = Box::pin(service.login(LoginRequest::new("a@b.com", "x", Some(Role::Donor))));
    assert!(poll_once(login.as_mut()).is_pending());
    assert!(cell.borrow().is_loading());

    login.await.unwrap();
    assert!(!cell.borrow().is_loading());
    assert!(cell.borrow().is_authenticated());
}

// =========================================================================
// Failures
// =========================================================================

#[tokio::test]
async fn invalid_credentials_leave_store_unauthenticated() {
    let cell = new_cell();
    let service = SessionService::new(cell.clone(), LocalAuthBackend);

    let err = service.login(LoginRequest::new("a@b.com", "", None)).await.unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
    assert!(err.is_user_facing());
    assert!(!cell.borrow().is_authenticated());
    assert!(!cell.borrow().is_loading());
}

// =========================================================================
// Cancellation
// =========================================================================

#[tokio::test]
async fn logout_before_login_resolves_leaves_session_null() {
    let cell = new_cell();
    let (tx, rx) = oneshot::channel();
    let service = SessionService::new(cell.clone(), GatedBackend::new(rx));

    let mut login = Box::pin(service.login(LoginRequest::new("a@b.com", "x", Some(Role::Donor))));
    assert!(poll_once(login.as_mut()).is_pending());

    service.logout();
    tx.send(()).unwrap();

    let result = login.await;
    assert_eq!(result, Err(AuthError::Cancelled));
    assert!(!AuthError::Cancelled.is_user_facing());
    assert!(cell.borrow().session().is_none());
    assert!(!cell.borrow().is_loading());
}

#[tokio::test]
async fn cancel_pending_keeps_existing_session() {
    let cell = new_cell();
    let existing = Session::new("old", "old@x.org", Role::Recipient);
    cell.borrow_mut().set(existing.clone());

    let (tx, rx) = oneshot::channel();
    let service = SessionService::new(cell.clone(), GatedBackend::new(rx));
    let mut login = Box::pin(service.login(LoginRequest::new("new@x.org", "x", Some(Role::Donor))));
    assert!(poll_once(login.as_mut()).is_pending());

    assert!(service.cancel_pending());
    tx.send(()).unwrap();

    assert_eq!(login.await, Err(AuthError::Cancelled));
    assert_eq!(cell.borrow().session(), Some(&existing));
}

#[tokio::test]
async fn logout_twice_raises_nothing() {
    let cell = new_cell();
    let service = SessionService::new(cell.clone(), LocalAuthBackend);
    service.login(LoginRequest::new("a@b.com", "x", None)).await.unwrap();

    assert!(service.logout());
    assert!(!service.logout());
    assert!(cell.borrow().session().is_none());
}

#[tokio::test]
async fn borrowed_cell_resolves_as_cancelled() {
    let cell = new_cell();
    let service = SessionService::new(cell.clone(), LocalAuthBackend);
    let _guard = cell.borrow_mut();

    let result = service.login(LoginRequest::new("a@b.com", "x", None)).await;
    assert_eq!(result, Err(AuthError::Cancelled));
}

#[tokio::test]
async fn superseded_failure_resolves_as_cancelled() {
    let cell = new_cell();
    let (tx, rx) = oneshot::channel();
    let service = SessionService::new(cell.clone(), GatedBackend::new(rx));

    let mut login = Box::pin(service.login(LoginRequest::new("a@b.com", "", None)));
    assert!(poll_once(login.as_mut()).is_pending());

    assert!(service.cancel_pending());
    tx.send(()).unwrap();

    assert_eq!(login.await, Err(AuthError::Cancelled));
    assert!(!cell.borrow().is_loading());
}

#[test]
fn superseded_failures_log_below_warn() {
    assert_eq!(failure_level(&Err(AuthError::Cancelled)), log::Level::Debug);
    assert_eq!(failure_level(&Err(AuthError::InvalidCredentials)), log::Level::Warn);
}
