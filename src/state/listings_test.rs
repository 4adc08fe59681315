use super::*;

#[test]
fn default_state_loads_fixtures() {
    let state = ListingsState::default();
    assert_eq!(state.items.len(), fixtures().len());
    assert!(state.items.iter().all(|l| l.status == ListingStatus::Available));
}

#[test]
fn empty_filter_matches_everything() {
    let state = ListingsState::default();
    assert_eq!(state.filter(&ListingFilter::default()).len(), state.items.len());
}

#[test]
fn query_matches_title_donor_or_description_case_insensitively() {
    let state = ListingsState::default();
    let by_donor = state.filter(&ListingFilter { query: "sunrise".to_owned(), ..ListingFilter::default() });
    assert_eq!(by_donor.iter().map(|l| l.id).collect::<Vec<_>>(), [2]);

    let by_description = state.filter(&ListingFilter { query: "YOGURT".to_owned(), ..ListingFilter::default() });
    assert_eq!(by_description.iter().map(|l| l.id).collect::<Vec<_>>(), [4]);
}

#[test]
fn food_type_and_distance_narrow_results() {
    let state = ListingsState::default();
    let filter = ListingFilter {
        query: String::new(),
        food_type: "canned goods".to_owned(),
        max_distance_km: Some(5.0),
    };
    assert_eq!(state.filter(&filter).iter().map(|l| l.id).collect::<Vec<_>>(), [3]);

    let near = ListingFilter { max_distance_km: Some(3.0), ..ListingFilter::default() };
    assert_eq!(state.filter(&near).iter().map(|l| l.id).collect::<Vec<_>>(), [1]);
}

#[test]
fn food_types_are_distinct() {
    let mut state = ListingsState::default();
    let mut dup = state.items[0].clone();
    dup.id = 99;
    state.items.push(dup);
    let types = state.food_types();
    assert_eq!(types.len(), fixtures().len());
    assert_eq!(types[0], "Fresh Produce");
}

#[test]
fn claim_marks_listing_claimed() {
    let mut state = ListingsState::default();
    let claimed = state.claim(2).unwrap();
    assert_eq!(claimed.status, ListingStatus::Claimed);
    assert_eq!(state.get(2).map(|l| l.status), Some(ListingStatus::Claimed));
}

#[test]
fn claim_twice_fails() {
    let mut state = ListingsState::default();
    state.claim(1).unwrap();
    assert_eq!(state.claim(1), Err(ActionError::AlreadyClaimed(1)));
}

#[test]
fn claim_unknown_fails() {
    let mut state = ListingsState::default();
    assert_eq!(state.claim(404), Err(ActionError::NotFound(404)));
}
