//! In-process parse collaborator.

use serde_json::{Value, json};

use crate::base::PresetId;
use crate::config::EngineOptions;
use crate::engine::SlrEngine;
use crate::grammar::{ActionTable, GotoTable, Grammar, TableError, parse_productions};
use crate::presets::PresetCatalog;

use super::{
    Endpoint, ExampleLookup, LookupError, ParseRequest, ParseResponse, ParseService,
    PresetTables, RequestSource, Route, TransportError,
};

/// Reply for a preset identifier the catalog does not know.
pub const EXAMPLE_NOT_FOUND: &str = "Example not found";

/// Reply for a request body that is not a parse request.
pub const INVALID_REQUEST: &str = "Invalid JSON format";

/// Serves parse and preset requests from a catalog and the SLR engine.
///
/// Preset requests are re-resolved here by identifier; the client never
/// sends preset tables back.
#[derive(Debug, Clone, Default)]
pub struct LocalParseServer {
    catalog: PresetCatalog,
    options: EngineOptions,
}

impl LocalParseServer {
    pub fn new(catalog: PresetCatalog) -> Self {
        Self {
            catalog,
            options: EngineOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// A server over the built-in presets.
    pub fn builtin() -> Self {
        Self::new(PresetCatalog::builtin())
    }

    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    /// Answer a decoded parse request.
    pub fn handle_parse(&self, request: &ParseRequest) -> ParseResponse {
        match &request.source {
            RequestSource::Example { example } => {
                let Some(preset) = self.catalog.get(example.as_str()) else {
                    tracing::debug!(%example, "parse request for unknown preset");
                    return ParseResponse::rejected(EXAMPLE_NOT_FOUND, Vec::new());
                };
                self.run(&preset.grammar, &preset.action_table, &preset.goto_table, &request.input)
            }
            RequestSource::Custom {
                grammar,
                action_table,
                goto_table,
            } => {
                match decode_custom(grammar, action_table, goto_table) {
                    Ok((grammar, actions, gotos)) => {
                        self.run(&grammar, &actions, &gotos, &request.input)
                    }
                    Err(e) => ParseResponse::rejected(e.to_string(), Vec::new()),
                }
            }
        }
    }

    /// Answer a raw parse request body.
    pub fn handle_parse_json(&self, body: &[u8]) -> Vec<u8> {
        let response = match serde_json::from_slice::<ParseRequest>(body) {
            Ok(request) => self.handle_parse(&request),
            Err(e) => {
                tracing::debug!("undecodable parse request: {e}");
                ParseResponse::rejected(INVALID_REQUEST, Vec::new())
            }
        };
        encode(&response)
    }

    /// Answer a preset request: the full preset, or `{"error": ...}`.
    pub fn handle_example_json(&self, id: &PresetId) -> Vec<u8> {
        let body = match self.catalog.get(id.as_str()) {
            Some(preset) => serde_json::to_vec(preset),
            None => serde_json::to_vec(&json!({ "error": EXAMPLE_NOT_FOUND })),
        };
        body.unwrap_or_default()
    }

    fn run(
        &self,
        grammar: &Grammar,
        actions: &ActionTable,
        gotos: &GotoTable,
        input: &str,
    ) -> ParseResponse {
        match parse_productions(grammar.rules()) {
            Ok(productions) => SlrEngine::new(&productions, actions, gotos)
                .with_options(self.options.clone())
                .run(input),
            Err(e) => ParseResponse::rejected(e.to_string(), Vec::new()),
        }
    }
}

fn decode_custom(
    grammar: &Value,
    action_table: &Value,
    goto_table: &Value,
) -> Result<(Grammar, ActionTable, GotoTable), TableError> {
    Ok((
        Grammar::from_value(grammar)?,
        ActionTable::from_value(action_table)?,
        GotoTable::from_value(goto_table)?,
    ))
}

fn encode(response: &ParseResponse) -> Vec<u8> {
    // Plain strings and numbers only; serialization cannot fail.
    serde_json::to_vec(response).unwrap_or_default()
}

impl Endpoint for LocalParseServer {
    fn call(&self, route: Route<'_>, body: &[u8]) -> Result<Vec<u8>, TransportError> {
        Ok(match route {
            Route::Parse => self.handle_parse_json(body),
            Route::Example(id) => self.handle_example_json(id),
        })
    }
}

impl ParseService for LocalParseServer {
    fn parse(&self, request: &ParseRequest) -> Result<ParseResponse, TransportError> {
        Ok(self.handle_parse(request))
    }
}

impl ExampleLookup for LocalParseServer {
    fn fetch(&self, id: &PresetId) -> Result<PresetTables, LookupError> {
        self.catalog.fetch(id)
    }
}
