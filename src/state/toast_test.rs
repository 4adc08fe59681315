use super::*;

#[test]
fn default_state_is_empty() {
    let state = ToastState::default();
    assert!(state.items().is_empty());
}

#[test]
fn push_keeps_display_order_and_unique_ids() {
    let mut state = ToastState::with_limit(5);
    let a = state.push(ToastKind::Success, "Saved", "Donation logged");
    let b = state.push(ToastKind::Error, "Oops", "Try again");
    assert_ne!(a, b);
    let titles: Vec<_> = state.items().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["Saved", "Oops"]);
}

#[test]
fn limit_drops_oldest() {
    let mut state = ToastState::with_limit(2);
    state.push(ToastKind::Info, "one", "");
    state.push(ToastKind::Info, "two", "");
    state.push(ToastKind::Info, "three", "");
    let titles: Vec<_> = state.items().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["two", "three"]);
}

#[test]
fn zero_limit_is_clamped_to_one() {
    let mut state = ToastState::with_limit(0);
    state.push(ToastKind::Info, "a", "");
    state.push(ToastKind::Info, "b", "");
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].title, "b");
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a", "");
    let b = state.push(ToastKind::Info, "b", "");
    assert!(state.dismiss(a));
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].id, b);
}

#[test]
fn dismissing_twice_is_a_no_op() {
    let mut state = ToastState::default();
    let id = state.push(ToastKind::Success, "done", "");
    assert!(state.dismiss(id));
    assert!(!state.dismiss(id));
}

#[test]
fn ids_are_not_reused_after_eviction() {
    let mut state = ToastState::with_limit(1);
    let first = state.push(ToastKind::Info, "a", "");
    let second = state.push(ToastKind::Info, "b", "");
    assert!(second > first);
    assert!(!state.dismiss(first));
}
