use super::*;
use crate::state::error::ValidationError;

fn request() -> PickupRequest {
    PickupRequest {
        donor: "Farm Fresh Co.".to_owned(),
        food_type: "Dairy Products".to_owned(),
        date: "2024-03-25".to_owned(),
        time: "11:00".to_owned(),
        address: " 12 Elm St ".to_owned(),
        ..PickupRequest::default()
    }
}

fn report() -> CompletionReport {
    CompletionReport::new("all good", 4, 30, "20 kg", true)
}

// =============================================================================
// schedule
// =============================================================================

#[test]
fn schedule_appends_with_fresh_id() {
    let mut state = PickupsState::default();
    let before = state.items.len();
    let pickup = state.schedule(&request()).unwrap();
    assert_eq!(state.items.len(), before + 1);
    assert_eq!(pickup.id, 4);
    assert_eq!(pickup.status, PickupStatus::Scheduled);
    assert_eq!(pickup.location, "12 Elm St");
    assert_eq!(pickup.items, ["Dairy Products"]);
}

#[test]
fn schedule_reports_first_missing_field() {
    let mut state = PickupsState::default();
    let blank_donor = PickupRequest { donor: "  ".to_owned(), ..request() };
    assert_eq!(
        state.schedule(&blank_donor),
        Err(ActionError::Validation(ValidationError::MissingField("donor")))
    );

    let blank_address = PickupRequest { address: String::new(), ..request() };
    assert_eq!(
        state.schedule(&blank_address),
        Err(ActionError::Validation(ValidationError::MissingField("address")))
    );
}

#[test]
fn schedule_on_empty_state_starts_at_one() {
    let mut state = PickupsState::from_items(Vec::new());
    assert_eq!(state.schedule(&request()).unwrap().id, 1);
    assert_eq!(state.schedule(&request()).unwrap().id, 2);
}

#[test]
fn book_keeps_the_requested_status() {
    let mut state = PickupsState::from_items(Vec::new());
    let pickup = state.book(&request(), PickupStatus::Pending).unwrap();
    assert_eq!(pickup.status, PickupStatus::Pending);
    assert_eq!(state.count(PickupStatus::Pending), 1);
    assert_eq!(state.upcoming().len(), 1);
}

// =============================================================================
// transitions
// =============================================================================

#[test]
fn reschedule_updates_date_and_time() {
    let mut state = PickupsState::default();
    let pickup = state.reschedule(2, "2024-04-01", "3:00 PM").unwrap();
    assert_eq!(pickup.date, "2024-04-01");
    assert_eq!(pickup.time, "3:00 PM");
    assert_eq!(pickup.status, PickupStatus::Scheduled);
}

#[test]
fn cancel_then_complete_is_rejected() {
    let mut state = PickupsState::default();
    state.cancel(1).unwrap();
    assert_eq!(
        state.mark_completed(1, report()),
        Err(ActionError::InvalidTransition { from: "cancelled", to: "completed" })
    );
}

#[test]
fn completed_pickup_cannot_be_rescheduled() {
    let mut state = PickupsState::default();
    assert_eq!(
        state.reschedule(3, "2024-04-01", "9:00"),
        Err(ActionError::InvalidTransition { from: "completed", to: "scheduled" })
    );
}

#[test]
fn mark_completed_attaches_report() {
    let mut state = PickupsState::default();
    let pickup = state.mark_completed(1, report()).unwrap();
    assert_eq!(pickup.status, PickupStatus::Completed);
    assert_eq!(pickup.report.as_ref().map(|r| r.people_fed), Some(30));
    assert_eq!(state.count(PickupStatus::Completed), 2);
}

#[test]
fn unknown_pickup_is_not_found() {
    let mut state = PickupsState::default();
    assert_eq!(state.cancel(99), Err(ActionError::NotFound(99)));
}

#[test]
fn upcoming_excludes_final_pickups() {
    let mut state = PickupsState::default();
    state.cancel(2).unwrap();
    let ids: Vec<u32> = state.upcoming().iter().map(|p| p.id).collect();
    assert_eq!(ids, [1]);
}

#[test]
fn rating_is_clamped() {
    assert_eq!(CompletionReport::new("", 0, 0, "", false).rating, 1);
    assert_eq!(CompletionReport::new("", 9, 0, "", false).rating, 5);
    assert_eq!(CompletionReport::new("", 3, 0, "", false).rating, 3);
}
