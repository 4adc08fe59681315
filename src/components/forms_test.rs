use super::*;

#[test]
fn parse_count_defaults_to_zero() {
    assert_eq!(parse_count(" 42 "), 42);
    assert_eq!(parse_count(""), 0);
    assert_eq!(parse_count("-3"), 0);
    assert_eq!(parse_count("lots"), 0);
}

#[test]
fn parse_rating_defaults_to_five() {
    assert_eq!(parse_rating("3"), 3);
    assert_eq!(parse_rating(""), 5);
}

#[test]
fn parse_max_distance_rejects_non_positive() {
    assert_eq!(parse_max_distance("5"), Some(5.0));
    assert_eq!(parse_max_distance("2.5"), Some(2.5));
    assert_eq!(parse_max_distance("0"), None);
    assert_eq!(parse_max_distance("-1"), None);
    assert_eq!(parse_max_distance(""), None);
    assert_eq!(parse_max_distance("inf"), None);
}

#[test]
fn login_role_only_accepts_known_roles() {
    assert_eq!(login_role("recipient"), Some(Role::Recipient));
    assert_eq!(login_role("Donor"), Some(Role::Donor));
    assert_eq!(login_role("volunteer"), None);
}

#[test]
fn listing_id_parses_route_param() {
    assert_eq!(listing_id(Some("3".to_owned())), Some(3));
    assert_eq!(listing_id(Some("abc".to_owned())), None);
    assert_eq!(listing_id(None), None);
}
