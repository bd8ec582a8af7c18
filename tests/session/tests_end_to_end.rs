//! Sessions against the in-process server, directly and over JSON.

#![allow(clippy::unwrap_used)]

use lrtrace::engine::ACCEPT_MESSAGE;
use lrtrace::service::{JsonClient, LocalParseServer};
use lrtrace::session::{OutcomeKind, ParseSession, Selection};
use rstest::rstest;

use crate::helpers::collaborators::{CannedEndpoint, DownEndpoint};
use crate::helpers::fixtures::single_a_session;

#[rstest]
#[case("example1", 14)]
#[case("example2", 11)]
fn test_preset_with_suggested_input(#[case] preset: &str, #[case] steps: usize) {
    let server = LocalParseServer::builtin();
    let mut session = ParseSession::new();
    session.select(Selection::from_choice(preset), &server).unwrap();

    let outcome = session.submit(&server).unwrap();
    assert!(outcome.accepted());
    assert_eq!(outcome.message(), Some(ACCEPT_MESSAGE));
    assert_eq!(outcome.trace().len(), steps);
}

#[test]
fn test_json_client_matches_direct_server() {
    let server = LocalParseServer::builtin();
    let client = JsonClient::new(&server);

    let mut direct = ParseSession::new();
    direct.select(Selection::from_choice("example1"), &server).unwrap();
    direct.set_input("id+");
    let mut remote = ParseSession::new();
    remote.select(Selection::from_choice("example1"), &client).unwrap();
    remote.set_input("id+");

    let a = direct.submit(&server).unwrap().clone();
    let b = remote.submit(&client).unwrap();
    assert_eq!(&a, b);
    assert_eq!(
        b.error_reason(),
        Some("No action found for state 6 and symbol $")
    );
    let indexes: Vec<usize> = b.trace().iter().map(|s| s.index).collect();
    assert_eq!(indexes, (1..=b.trace().len()).collect::<Vec<_>>());
}

#[test]
fn test_custom_tables_through_json_client() {
    let server = LocalParseServer::builtin();
    let client = JsonClient::new(&server);
    let mut session = single_a_session("a");

    let outcome = session.submit(&client).unwrap();
    assert!(outcome.accepted());
    let actions: Vec<&str> = outcome.trace().iter().map(|s| s.action.as_str()).collect();
    assert_eq!(actions, ["s2", "r1", "acc"]);
}

#[test]
fn test_unknown_preset_is_displayed() {
    let server = LocalParseServer::builtin();
    let client = JsonClient::new(&server);
    let mut session = ParseSession::new();

    assert!(session.select(Selection::from_choice("example9"), &client).is_err());
    assert_eq!(
        session.outcome().unwrap().kind(),
        OutcomeKind::PresetUnavailable
    );
}

#[test]
fn test_unreachable_endpoint() {
    let client = JsonClient::new(DownEndpoint);
    let mut session = single_a_session("a");
    let outcome = session.submit(&client).unwrap();
    assert_eq!(outcome.kind(), OutcomeKind::TransportFailure);
}

#[test]
fn test_garbage_response_is_transport_failure() {
    let client = JsonClient::new(CannedEndpoint(b"<html>502</html>"));
    let mut session = single_a_session("a");
    let outcome = session.submit(&client).unwrap();
    assert_eq!(outcome.kind(), OutcomeKind::TransportFailure);
    assert!(outcome.trace().is_empty());
}
