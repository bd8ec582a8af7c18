//! Request assembly as seen through a session.

#![allow(clippy::unwrap_used)]

use lrtrace::service::{ParseRequest, ParseResponse};
use lrtrace::session::{OutcomeKind, SessionState};
use rstest::rstest;
use serde_json::json;

use crate::helpers::collaborators::RecordingService;
use crate::helpers::fixtures::custom_session;

#[test]
fn test_empty_fields_send_empty_tables() {
    let service = RecordingService::replying(Ok(ParseResponse::default()));
    let mut session = custom_session("", "", "", "");
    session.submit(&service);

    assert_eq!(
        service.requests(),
        vec![ParseRequest::custom(json!([]), json!({}), json!({}), "")]
    );
}

#[rstest]
#[case("[\"S → a\"", "{}", "{}")]
#[case("[]", "{\"0\": ", "{}")]
#[case("[]", "{}", "not json")]
fn test_malformed_field_never_reaches_collaborator(
    #[case] grammar: &str,
    #[case] actions: &str,
    #[case] gotos: &str,
) {
    let service = RecordingService::replying(Ok(ParseResponse::default()));
    let mut session = custom_session(grammar, actions, gotos, "a");

    let outcome = session.submit(&service).unwrap();
    assert_eq!(outcome.kind(), OutcomeKind::MalformedTable);
    assert!(outcome.trace().is_empty());
    assert_eq!(service.calls(), 0);
    assert!(matches!(session.state(), SessionState::Displaying(_)));
}

#[test]
fn test_fields_edited_after_failure_are_used() {
    let service = RecordingService::replying(Ok(ParseResponse::default()));
    let mut session = custom_session("[", "", "", "a");
    session.submit(&service);

    session.fields_mut().grammar = "[\"S → a\"]".to_string();
    session.submit(&service);
    assert_eq!(service.calls(), 1);
    assert_eq!(
        service.requests()[0],
        ParseRequest::custom(json!(["S → a"]), json!({}), json!({}), "a")
    );
}
