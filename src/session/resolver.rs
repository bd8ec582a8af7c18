//! Decides where a session's tables come from.
//!
//! Selecting a preset fetches its tables and copies them into the editable
//! fields; selecting custom input wipes the fields. The fields are an
//! explicit [`TableFields`] value so "clear" and "read" can never
//! interleave.

use serde::Serialize;

use crate::base::PresetId;
use crate::config::SessionOptions;
use crate::presets::suggest_input;
use crate::service::{ExampleLookup, LookupError, PresetTables};

use super::ResolutionError;

/// What the user picked in the preset selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Preset(PresetId),
    Custom,
}

impl Selection {
    /// An empty selector value means custom input.
    pub fn from_choice(choice: &str) -> Self {
        let choice = choice.trim();
        if choice.is_empty() {
            Self::Custom
        } else {
            Self::Preset(PresetId::new(choice))
        }
    }
}

/// Where the next request takes its tables from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TableSource {
    #[default]
    Custom,
    Preset(PresetId),
}

/// The editable texts: three tables as JSON and the input string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFields {
    pub grammar: String,
    pub action_table: String,
    pub goto_table: String,
    pub input: String,
}

impl TableFields {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The current table source together with the field contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTables {
    pub source: TableSource,
    pub fields: TableFields,
}

/// Ticket for a preset lookup that has been started but not completed.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingLookup {
    preset: PresetId,
    ticket: u64,
}

impl PendingLookup {
    pub fn preset(&self) -> &PresetId {
        &self.preset
    }
}

/// Table Source Resolver.
#[derive(Debug, Default)]
pub struct TableSourceResolver {
    current: ResolvedTables,
    pending: Option<(PresetId, u64)>,
    next_ticket: u64,
    options: SessionOptions,
}

impl TableSourceResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SessionOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn current(&self) -> &ResolvedTables {
        &self.current
    }

    pub fn fields_mut(&mut self) -> &mut TableFields {
        &mut self.current.fields
    }

    /// True while a preset lookup is outstanding.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Start resolving a selection.
    ///
    /// Custom input resolves immediately and returns `None`. A preset
    /// returns the lookup the caller must perform and hand back to
    /// [`complete`](Self::complete).
    pub fn begin(&mut self, selection: Selection) -> Result<Option<PendingLookup>, ResolutionError> {
        if self.is_busy() {
            return Err(ResolutionError::Busy);
        }

        match selection {
            Selection::Custom => {
                self.current.source = TableSource::Custom;
                self.current.fields.clear();
                tracing::debug!("switched to custom tables");
                Ok(None)
            }
            Selection::Preset(preset) => {
                let ticket = self.next_ticket;
                self.next_ticket += 1;
                self.pending = Some((preset.clone(), ticket));
                tracing::debug!(%preset, ticket, "preset lookup started");
                Ok(Some(PendingLookup { preset, ticket }))
            }
        }
    }

    /// Apply the result of a lookup started by [`begin`](Self::begin).
    pub fn complete(
        &mut self,
        lookup: PendingLookup,
        result: Result<PresetTables, LookupError>,
    ) -> Result<(), ResolutionError> {
        let is_pending = matches!(
            &self.pending,
            Some((preset, ticket)) if *preset == lookup.preset && *ticket == lookup.ticket
        );
        if !is_pending {
            return Err(ResolutionError::Stale(lookup.preset));
        }
        self.pending = None;

        let tables = match result {
            Ok(tables) => tables,
            Err(source) => {
                tracing::warn!(preset = %lookup.preset, "preset lookup failed: {source}");
                return Err(ResolutionError::PresetUnavailable {
                    preset: lookup.preset,
                    source,
                });
            }
        };

        let pretty = self.options.pretty_tables;
        let fields = &mut self.current.fields;
        fields.grammar = to_json(&tables.grammar, pretty);
        fields.action_table = to_json(&tables.action_table, pretty);
        fields.goto_table = to_json(&tables.goto_table, pretty);
        if let Some(input) = suggest_input(tables.grammar.rules()) {
            fields.input = input.to_string();
        }
        self.current.source = TableSource::Preset(lookup.preset);
        Ok(())
    }

    /// Begin and complete in one call against `lookup`.
    pub fn resolve(
        &mut self,
        selection: Selection,
        lookup: &dyn ExampleLookup,
    ) -> Result<(), ResolutionError> {
        match self.begin(selection)? {
            Some(pending) => {
                let result = lookup.fetch(pending.preset());
                self.complete(pending, result)
            }
            None => Ok(()),
        }
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> String {
    // Grammars and tables hold only strings; serialization cannot fail.
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    text.unwrap_or_default()
}
