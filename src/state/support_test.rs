use super::*;

fn draft() -> SupportTicketDraft {
    SupportTicketDraft {
        issue_type: "pickup".to_owned(),
        subject: "Missed pickup".to_owned(),
        message: "Nobody showed up at 10am".to_owned(),
        email: String::new(),
    }
}

#[test]
fn submit_issues_sequential_references() {
    let mut desk = SupportDesk::default();
    let first = draft().submit(&mut desk).unwrap();
    let second = draft().submit(&mut desk).unwrap();
    assert_eq!(first.reference, "FB-00001");
    assert_eq!(second.reference, "FB-00002");
    assert_eq!(first.email, None);
}

#[test]
fn submit_normalizes_contact_email() {
    let mut desk = SupportDesk::default();
    let ticket = SupportTicketDraft { email: " Help@Example.org ".to_owned(), ..draft() }.submit(&mut desk).unwrap();
    assert_eq!(ticket.email.as_deref(), Some("help@example.org"));
}

#[test]
fn submit_rejects_malformed_email() {
    let mut desk = SupportDesk::default();
    let err = SupportTicketDraft { email: "nope".to_owned(), ..draft() }.submit(&mut desk).unwrap_err();
    assert_eq!(err, ActionError::Validation(ValidationError::InvalidEmail));
}

#[test]
fn submit_requires_subject_and_message() {
    let mut desk = SupportDesk::default();
    let no_subject = SupportTicketDraft { subject: String::new(), ..draft() };
    assert_eq!(
        no_subject.submit(&mut desk),
        Err(ActionError::Validation(ValidationError::MissingField("subject")))
    );
    let no_message = SupportTicketDraft { message: "\n".to_owned(), ..draft() };
    assert_eq!(
        no_message.submit(&mut desk),
        Err(ActionError::Validation(ValidationError::MissingField("message")))
    );
}

#[test]
fn failed_submit_does_not_consume_a_reference() {
    let mut desk = SupportDesk::default();
    let _ = SupportTicketDraft { issue_type: String::new(), ..draft() }.submit(&mut desk);
    assert_eq!(draft().submit(&mut desk).unwrap().reference, "FB-00001");
}
