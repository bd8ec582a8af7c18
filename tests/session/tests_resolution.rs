//! Preset and custom selection.

#![allow(clippy::unwrap_used)]

use lrtrace::PresetId;
use lrtrace::presets::PresetCatalog;
use lrtrace::session::{ParseSession, Selection, TableFields, TableSource};
use rstest::rstest;

use crate::helpers::collaborators::{CountingLookup, GrammarLookup};

#[rstest]
#[case(vec!["E → E+T", "F → id"], Some("id+id*id"))]
#[case(vec!["S → S+S", "S → a"], Some("a+a*a"))]
#[case(vec!["A → id a"], Some("id+id*id"))]
#[case(vec!["X → b"], None)]
fn test_suggested_input(#[case] grammar: Vec<&'static str>, #[case] expected: Option<&str>) {
    let mut session = ParseSession::new();
    session.set_input("typed");
    session
        .select(Selection::from_choice("any"), &GrammarLookup(grammar))
        .unwrap();

    let input = session.tables().fields.input.as_str();
    assert_eq!(input, expected.unwrap_or("typed"));
}

#[test]
fn test_data_production_counts_as_a() {
    let mut session = ParseSession::new();
    session
        .select(Selection::from_choice("any"), &GrammarLookup(vec!["D → data"]))
        .unwrap();
    assert_eq!(session.tables().fields.input, "a+a*a");
}

#[test]
fn test_preset_then_custom_clears_every_field() {
    let catalog = CountingLookup::new(PresetCatalog::builtin());
    let mut session = ParseSession::new();
    session.select(Selection::from_choice("example1"), &catalog).unwrap();
    assert!(!session.tables().fields.grammar.is_empty());

    for _ in 0..2 {
        session.select(Selection::from_choice(""), &catalog).unwrap();
        assert_eq!(session.tables().fields, TableFields::default());
        assert_eq!(session.tables().source, TableSource::Custom);
    }
    assert_eq!(catalog.calls(), 1);
}

#[test]
fn test_switching_presets_replaces_tables() {
    let catalog = PresetCatalog::builtin();
    let mut session = ParseSession::new();
    session.select(Selection::from_choice("example1"), &catalog).unwrap();
    let first = session.tables().fields.clone();

    session.select(Selection::from_choice("example2"), &catalog).unwrap();
    let second = &session.tables().fields;
    assert_ne!(&first, second);
    assert_eq!(second.input, "a+a*a");
    assert_eq!(
        session.tables().source,
        TableSource::Preset(PresetId::new("example2"))
    );
}
