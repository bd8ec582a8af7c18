//! Session state transitions driven by hand.

#![allow(clippy::unwrap_used)]

use lrtrace::service::{ParseResponse, TransportError, WireStep};
use lrtrace::session::{OutcomeKind, SessionState, TRANSPORT_FAILURE_REASON};

use crate::helpers::collaborators::RecordingService;
use crate::helpers::fixtures::single_a_session;

#[test]
fn test_trigger_disabled_throughout_submission() {
    let mut session = single_a_session("a");
    assert_eq!(session.state(), &SessionState::Idle);

    let submission = session.trigger().unwrap();
    for _ in 0..3 {
        assert!(!session.trigger_enabled());
        assert!(session.trigger().is_none());
    }
    assert!(matches!(session.state(), SessionState::Submitting { .. }));

    session.complete(submission, Ok(ParseResponse::default()));
    assert!(session.trigger_enabled());
}

#[test]
fn test_resubmit_from_displaying() {
    let service = RecordingService::replying(Ok(ParseResponse::rejected("nope", Vec::new())));
    let mut session = single_a_session("b");

    session.submit(&service);
    session.submit(&service);
    assert_eq!(service.calls(), 2);
    assert_eq!(session.outcome().unwrap().error_reason(), Some("nope"));
}

#[test]
fn test_transport_failure_restores_trigger() {
    let service = RecordingService::replying(Err(TransportError::unreachable("timeout")));
    let mut session = single_a_session("a");

    let outcome = session.submit(&service).unwrap();
    assert!(!outcome.accepted());
    assert_eq!(outcome.kind(), OutcomeKind::TransportFailure);
    assert_eq!(outcome.error_reason(), Some(TRANSPORT_FAILURE_REASON));
    assert!(outcome.trace().is_empty());
    assert!(session.trigger_enabled());
}

#[test]
fn test_rejection_keeps_partial_trace() {
    let steps = vec![
        WireStep {
            stack: vec!["0".to_string()],
            input: "b $".to_string(),
            ..WireStep::default()
        },
    ];
    let service = RecordingService::replying(Ok(ParseResponse::rejected(
        "No action found for state 0 and symbol b",
        steps,
    )));
    let mut session = single_a_session("b");

    let outcome = session.submit(&service).unwrap();
    assert_eq!(outcome.kind(), OutcomeKind::Rejected);
    assert_eq!(outcome.trace().len(), 1);
    assert_eq!(outcome.trace().last().unwrap().index, 1);
}

#[test]
fn test_input_edited_while_submitting_applies_next_time() {
    let mut session = single_a_session("a");
    let submission = session.trigger().unwrap();
    session.set_input("aa");

    assert_eq!(submission.request().input, "a");
    session.complete(submission, Ok(ParseResponse::default()));
    let next = session.trigger().unwrap();
    assert_eq!(next.request().input, "aa");
}
