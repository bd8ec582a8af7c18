//! Command-line interface for lrtrace.
//! Runs one parse against a preset or against table files and prints the trace.
//!
//! Usage:
//!   lrtrace --example `<id>` [--input `<text>`]                          - Parse with a preset
//!   lrtrace --grammar `<file>` --action `<file>` --goto `<file>` --input `<text>` - Parse with custom tables
//!   lrtrace --list                                                     - List available presets

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};

use lrtrace::config::Options;
use lrtrace::presets::PresetCatalog;
use lrtrace::render::render;
use lrtrace::service::{JsonClient, LocalParseServer};
use lrtrace::session::{ParseSession, ResolutionError, Selection};

const EXIT_REJECTED: u8 = 1;
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let matches = Command::new("lrtrace")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Trace a shift-reduce parse over LR action and goto tables")
        .arg_required_else_help(true)
        .arg(
            Arg::new("example")
                .long("example")
                .short('e')
                .help("Preset to parse with (e.g., 'example1')")
                .conflicts_with_all(["grammar", "action", "goto"]),
        )
        .arg(
            Arg::new("grammar")
                .long("grammar")
                .short('g')
                .value_parser(clap::value_parser!(PathBuf))
                .help("JSON file with the list of productions"),
        )
        .arg(
            Arg::new("action")
                .long("action")
                .short('a')
                .value_parser(clap::value_parser!(PathBuf))
                .help("JSON file with the action table"),
        )
        .arg(
            Arg::new("goto")
                .long("goto")
                .value_parser(clap::value_parser!(PathBuf))
                .help("JSON file with the goto table"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .help("String to parse (defaults to the preset's suggestion)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_parser(clap::value_parser!(PathBuf))
                .help("YAML or JSON options file"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the rendered trace as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .help("List available presets")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    match run(&matches) {
        Ok(code) => code,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn run(matches: &ArgMatches) -> Result<ExitCode, String> {
    let options = match matches.get_one::<PathBuf>("config") {
        Some(path) => Options::load(path).map_err(|e| format!("Config error: {e}"))?,
        None => Options::default(),
    };
    let catalog = match &options.catalog {
        Some(path) => PresetCatalog::load(path).map_err(|e| format!("Catalog error: {e}"))?,
        None => PresetCatalog::builtin(),
    };

    if matches.get_flag("list") {
        handle_list_command(&catalog);
        return Ok(ExitCode::SUCCESS);
    }

    let server = LocalParseServer::new(catalog).with_options(options.engine.clone());
    let client = JsonClient::new(&server);
    let mut session = ParseSession::with_options(options.session.clone());

    match matches.get_one::<String>("example") {
        Some(id) => match session.select(Selection::from_choice(id), &client) {
            // Already on display as the session's outcome.
            Ok(()) | Err(ResolutionError::PresetUnavailable { .. }) => {}
            Err(e) => return Err(format!("Selection error: {e}")),
        },
        None => {
            let fields = session.fields_mut();
            fields.grammar = read_table(matches, "grammar")?;
            fields.action_table = read_table(matches, "action")?;
            fields.goto_table = read_table(matches, "goto")?;
        }
    }
    if let Some(input) = matches.get_one::<String>("input") {
        session.set_input(input.as_str());
    }

    if session.outcome().is_none() {
        session.submit(&client);
    }
    let Some(outcome) = session.outcome() else {
        return Err("No outcome to display".to_string());
    };

    let view = render(outcome);
    if matches.get_flag("json") {
        let text = serde_json::to_string_pretty(&view).map_err(|e| e.to_string())?;
        println!("{text}");
    } else {
        print!("{view}");
    }

    Ok(if outcome.accepted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_REJECTED)
    })
}

/// Read a table file; a missing flag leaves the field blank.
fn read_table(matches: &ArgMatches, name: &str) -> Result<String, String> {
    match matches.get_one::<PathBuf>(name) {
        Some(path) => read_file(path),
        None => Ok(String::new()),
    }
}

fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("Cannot read {}: {e}", path.display()))
}

/// Handle the list command
fn handle_list_command(catalog: &PresetCatalog) {
    println!("Available presets:\n");
    for id in catalog.ids() {
        println!("  {id}");
        if let Some(input) = catalog.get(id.as_str()).and_then(|p| p.suggested_input()) {
            println!("    suggested input: {input}");
        }
        println!();
    }
}
