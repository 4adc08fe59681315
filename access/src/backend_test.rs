use super::*;

fn profile() -> SignupProfile {
    SignupProfile {
        name: "  Dana Rivers ".to_owned(),
        email: "Dana@Example.org".to_owned(),
        phone: "555-0100".to_owned(),
        location: "Springfield".to_owned(),
        role: "recipient".to_owned(),
        password: "hunter2".to_owned(),
        confirm_password: "hunter2".to_owned(),
    }
}

// =============================================================
// normalize_email / name_from_email
// =============================================================

#[test]
fn normalize_email_trims_and_lowercases() {
    assert_eq!(normalize_email("  A@B.com "), Some("a@b.com".to_owned()));
}

#[test]
fn normalize_email_rejects_malformed() {
    for raw in ["", "   ", "no-at-sign", "@b.com", "a@", "a@b@c"] {
        assert_eq!(normalize_email(raw), None, "{raw:?}");
    }
}

#[test]
fn name_from_email_uses_local_part() {
    assert_eq!(name_from_email("sam@pantry.org"), "sam");
    assert_eq!(name_from_email("@pantry.org"), "user");
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_with_explicit_role() {
    let session = LocalAuthBackend
        .check_login(&LoginRequest::new("a@b.com", "x", Some(Role::Recipient)))
        .unwrap();
    assert_eq!(session.role, Role::Recipient);
    assert_eq!(session.email, "a@b.com");
    assert_eq!(session.display_name, "a");
}

#[test]
fn login_without_role_defaults_to_donor() {
    let session = LocalAuthBackend.check_login(&LoginRequest::new("a@b.com", "x", None)).unwrap();
    assert_eq!(session.role, DEFAULT_LOGIN_ROLE);
}

#[test]
fn login_rejects_empty_password_and_bad_email() {
    assert_eq!(
        LocalAuthBackend.check_login(&LoginRequest::new("a@b.com", "", Some(Role::Donor))),
        Err(AuthError::InvalidCredentials)
    );
    assert_eq!(
        LocalAuthBackend.check_login(&LoginRequest::new("", "x", Some(Role::Donor))),
        Err(AuthError::InvalidCredentials)
    );
}

// =============================================================
// Signup
// =============================================================

#[test]
fn signup_validates_and_normalizes() {
    let valid = profile().validate().unwrap();
    assert_eq!(valid.name, "Dana Rivers");
    assert_eq!(valid.email, "dana@example.org");
    assert_eq!(valid.role, Role::Recipient);
}

#[test]
fn signup_reports_first_missing_field_in_form_order() {
    let mut p = profile();
    p.phone = " ".to_owned();
    p.password = String::new();
    assert_eq!(p.validate(), Err(ValidationError::MissingField("phone")));
}

#[test]
fn signup_rejects_password_mismatch() {
    let mut p = profile();
    p.confirm_password = "hunter3".to_owned();
    assert_eq!(p.validate(), Err(ValidationError::PasswordMismatch));
}

#[test]
fn signup_rejects_volunteer_role() {
    let mut p = profile();
    p.role = "volunteer".to_owned();
    assert_eq!(p.validate(), Err(ValidationError::UnsupportedRole("volunteer".to_owned())));
}

#[test]
fn signup_rejects_malformed_email() {
    let mut p = profile();
    p.email = "dana.example.org".to_owned();
    assert_eq!(p.validate(), Err(ValidationError::InvalidEmail));
}

#[test]
fn signup_session_uses_profile_name() {
    let session = LocalAuthBackend.check_signup(&profile()).unwrap();
    assert_eq!(session.display_name, "Dana Rivers");
    assert_eq!(session.role, Role::Recipient);
}

#[tokio::test]
async fn trait_methods_delegate_to_checks() {
    let backend = LocalAuthBackend;
    assert!(backend.login(LoginRequest::new("a@b.com", "x", None)).await.is_ok());
    assert!(matches!(
        backend.signup(SignupProfile::default()).await,
        Err(AuthError::Validation(ValidationError::MissingField("name")))
    ));
}
