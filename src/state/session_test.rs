use super::*;
use access::AuthError;
use access::backend::{LoginRequest, SignupProfile};

fn service(owner: &Owner) -> AppSessionService {
    owner.with(|| SessionService::new(SessionContext::new(), SimulatedAuthBackend::new(0)))
}

#[tokio::test]
async fn login_updates_signal() {
    let owner = Owner::new();
    let service = service(&owner);
    let ctx = *service.cell();

    let session = service
        .login(LoginRequest::new("ana@example.org", "pw", Some(Role::Recipient)))
        .await
        .unwrap();

    assert_eq!(ctx.session(), Some(session));
    assert_eq!(ctx.role(), Some(Role::Recipient));
    assert!(!ctx.is_loading());
}

#[tokio::test]
async fn signup_with_unsupported_role_leaves_signal_empty() {
    let owner = Owner::new();
    let service = service(&owner);
    let profile = SignupProfile {
        name: "Ana".to_owned(),
        email: "ana@example.org".to_owned(),
        phone: "555-0100".to_owned(),
        location: "Springfield".to_owned(),
        role: "volunteer".to_owned(),
        password: "pw".to_owned(),
        confirm_password: "pw".to_owned(),
    };

    let err = service.signup(profile).await.unwrap_err();
    assert!(matches!(err, AuthError::Validation(_)));
    assert_eq!(service.cell().session(), None);
}

#[tokio::test]
async fn logout_clears_signal() {
    let owner = Owner::new();
    let service = service(&owner);
    service.login(LoginRequest::new("ana@example.org", "pw", None)).await.unwrap();
    assert_eq!(service.cell().role(), Some(Role::Donor));

    assert!(service.logout());
    assert_eq!(service.cell().session(), None);
}

#[tokio::test]
async fn disposed_signal_resolves_as_cancelled() {
    let owner = Owner::new();
    let service = service(&owner);
    service.cell().0.dispose();

    let err = service.login(LoginRequest::new("ana@example.org", "pw", None)).await.unwrap_err();
    assert_eq!(err, AuthError::Cancelled);
    assert!(!service.logout());
}
