//! Preset catalogs and options read from disk.

#![allow(clippy::unwrap_used)]

use lrtrace::config::{ConfigError, Options};
use lrtrace::presets::PresetCatalog;
use lrtrace::service::LocalParseServer;
use lrtrace::session::{ParseSession, Selection};

const YAML_CATALOG: &str = r#"
single:
  grammar: ["S → a"]
  start_symbol: S
  action_table:
    "0": { a: s2 }
    "1": { "$": acc }
    "2": { "$": r1 }
  goto_table:
    "0": { S: 1 }
"#;

#[test]
fn test_yaml_catalog_drives_a_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("presets.yaml");
    std::fs::write(&path, YAML_CATALOG).unwrap();

    let catalog = PresetCatalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 1);

    let server = LocalParseServer::new(catalog);
    let mut session = ParseSession::new();
    session.select(Selection::from_choice("single"), &server).unwrap();
    assert_eq!(session.tables().fields.input, "a+a*a");
    session.set_input("a");

    let outcome = session.submit(&server).unwrap();
    assert!(outcome.accepted());
    assert_eq!(outcome.trace().len(), 3);
}

#[test]
fn test_config_points_at_catalog() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("presets.yaml"), YAML_CATALOG).unwrap();
    let config = dir.path().join("lrtrace.json");
    std::fs::write(&config, r#"{"catalog": "presets.yaml", "engine": {"max_steps": 2}}"#).unwrap();

    let options = Options::load(&config).unwrap();
    let catalog = PresetCatalog::load(options.catalog.as_deref().unwrap()).unwrap();
    let server = LocalParseServer::new(catalog).with_options(options.engine);

    let mut session = ParseSession::new();
    session.select(Selection::from_choice("single"), &server).unwrap();
    session.set_input("a");
    let outcome = session.submit(&server).unwrap();
    assert_eq!(outcome.error_reason(), Some("Step limit of 2 exceeded"));
    assert_eq!(outcome.trace().len(), 2);
}

#[test]
fn test_unsupported_catalog_extension() {
    let err = PresetCatalog::load(std::path::Path::new("presets.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
}
