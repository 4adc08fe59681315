use super::*;
use crate::state::error::ValidationError;

#[test]
fn toggle_like_adds_then_removes() {
    let mut state = CommunityState::default();
    assert_eq!(state.toggle_like(1), Ok(25));
    assert!(state.stories().iter().any(|s| s.id == 1 && s.liked_by_me));
    assert_eq!(state.toggle_like(1), Ok(24));
}

#[test]
fn toggle_like_unknown_story() {
    let mut state = CommunityState::default();
    assert_eq!(state.toggle_like(7), Err(ActionError::NotFound(7)));
}

#[test]
fn post_goes_to_top() {
    let mut state = CommunityState::default();
    let story = state.post("Ana", "Food Donor", "First pickup", "It went great").unwrap();
    assert_eq!(state.stories()[0], story);
    assert_eq!(story.likes, 0);
    assert_eq!(story.id, 4);
}

#[test]
fn post_requires_title_and_content() {
    let mut state = CommunityState::default();
    assert_eq!(
        state.post("Ana", "Food Donor", "", "body"),
        Err(ActionError::Validation(ValidationError::MissingField("title")))
    );
    assert_eq!(
        state.post("Ana", "Food Donor", "title", "   "),
        Err(ActionError::Validation(ValidationError::MissingField("content")))
    );
    assert_eq!(state.stories().len(), fixtures().len());
}
