//! Preset storage and lookup.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::base::{PresetId, Symbol};
use crate::config::{ConfigError, FileFormat};
use crate::grammar::{ActionTable, Grammar, GrammarError, GotoTable, Production, parse_productions};
use crate::service::{ExampleLookup, LookupError, PresetTables};

use super::{builtin, suggest_input};

/// A curated grammar with its tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub grammar: Grammar,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub terminals: Vec<Symbol>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub non_terminals: Vec<Symbol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_symbol: Option<Symbol>,
    pub action_table: ActionTable,
    pub goto_table: GotoTable,
}

impl Preset {
    /// The part of the preset a lookup hands out.
    pub fn tables(&self) -> PresetTables {
        PresetTables {
            grammar: self.grammar.clone(),
            action_table: self.action_table.clone(),
            goto_table: self.goto_table.clone(),
        }
    }

    pub fn productions(&self) -> Result<Vec<Production>, GrammarError> {
        parse_productions(self.grammar.rules())
    }

    pub fn suggested_input(&self) -> Option<&'static str> {
        suggest_input(self.grammar.rules())
    }
}

/// Ordered collection of presets keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetCatalog {
    presets: IndexMap<PresetId, Preset>,
}

impl PresetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two expression grammars shipped with the crate.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert("example1", builtin::expression_grammar());
        catalog.insert("example2", builtin::ambiguous_sum_grammar());
        catalog
    }

    pub fn insert(&mut self, id: impl Into<PresetId>, preset: Preset) {
        self.presets.insert(id.into(), preset);
    }

    pub fn get(&self, id: &str) -> Option<&Preset> {
        self.presets.get(id)
    }

    /// Identifiers in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &PresetId> {
        self.presets.keys()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Json(e.to_string()))
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(text).map_err(|e| ConfigError::Yaml(e.to_string()))
    }

    /// Load a catalog file (`.json`, `.yaml` or `.yml`).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = FileFormat::detect(path)?;
        let text = std::fs::read_to_string(path)?;
        let catalog = match format {
            FileFormat::Json => Self::from_json_str(&text)?,
            FileFormat::Yaml => Self::from_yaml_str(&text)?,
        };
        tracing::info!("Loaded {} preset(s) from {}", catalog.len(), path.display());
        Ok(catalog)
    }
}

impl ExampleLookup for PresetCatalog {
    fn fetch(&self, id: &PresetId) -> Result<PresetTables, LookupError> {
        self.get(id.as_str())
            .map(Preset::tables)
            .ok_or_else(|| LookupError::NotFound(id.to_string()))
    }
}
