//! Byte-level requests against the local server.

#![allow(clippy::unwrap_used)]

use lrtrace::PresetId;
use lrtrace::service::{Endpoint, LocalParseServer, ParseResponse, Route};
use rstest::rstest;
use serde_json::{Value, json};

fn post(server: &LocalParseServer, body: Value) -> ParseResponse {
    let reply = server.call(Route::Parse, body.to_string().as_bytes()).unwrap();
    serde_json::from_slice(&reply).unwrap()
}

#[test]
fn test_example_request_is_resolved_by_id() {
    let response = post(
        &LocalParseServer::builtin(),
        json!({"example": "example2", "input": "a+a*a"}),
    );
    assert!(response.success);
    assert_eq!(response.steps.len(), 11);
    assert_eq!(response.steps.last().unwrap().action, "acc");
}

#[rstest]
#[case(json!({"example": "missing", "input": "a"}), "Example not found")]
#[case(json!({"grammar": ["S → a"], "action_table": {}, "goto_table": {}, "input": "a"}),
       "No action found for state 0 and symbol a")]
fn test_rejections(#[case] body: Value, #[case] error: &str) {
    let response = post(&LocalParseServer::builtin(), body);
    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some(error));
}

#[test]
fn test_undecodable_body() {
    let server = LocalParseServer::builtin();
    let reply = server.call(Route::Parse, b"{ nope").unwrap();
    let response: ParseResponse = serde_json::from_slice(&reply).unwrap();
    assert_eq!(response.error.as_deref(), Some("Invalid JSON format"));
}

#[test]
fn test_example_route_returns_whole_preset() {
    let server = LocalParseServer::builtin();
    let id = PresetId::new("example1");
    let reply: Value = serde_json::from_slice(&server.call(Route::Example(&id), &[]).unwrap()).unwrap();

    assert_eq!(reply["start_symbol"], "E");
    assert_eq!(reply["action_table"]["1"]["$"], "acc");
    assert!(reply["grammar"].as_array().unwrap().len() >= 6);
}

#[test]
fn test_steps_keep_order_on_the_wire() {
    let response = post(
        &LocalParseServer::builtin(),
        json!({"example": "example1", "input": "id+id*id"}),
    );
    let actions: Vec<&str> = response.steps.iter().map(|s| s.action.as_str()).collect();
    assert_eq!(
        actions.join(" "),
        "s5 r6 r4 r2 s6 s5 r6 r4 s7 s5 r6 r3 r1 acc"
    );
}

#[test]
fn test_self_looping_epsilon_reduction_is_bounded() {
    let response = post(
        &LocalParseServer::builtin(),
        json!({
            "grammar": ["S → ε"],
            "action_table": {"0": {"$": "r1"}},
            "goto_table": {"0": {"S": "0"}},
            "input": ""
        }),
    );
    assert!(!response.success);
    assert!(response.error.unwrap().starts_with("Stack depth limit of"));
    assert!(response.steps.iter().all(|s| s.stack.len() <= 512));
}

#[test]
fn test_named_shift_states() {
    let response = post(
        &LocalParseServer::builtin(),
        json!({
            "grammar": ["S → a"],
            "action_table": {"0": {"a": "sq2"}, "q2": {"$": "r1"}, "q1": {"$": "acc"}},
            "goto_table": {"0": {"S": "q1"}},
            "input": "a"
        }),
    );
    assert!(response.success);
    assert_eq!(response.steps.len(), 3);
}
