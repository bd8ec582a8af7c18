//! JSON shapes exchanged with the parse and lookup collaborators.
//!
//! ```json
//! {"example": "example1", "input": "id+id*id"}
//! {"grammar": ["S → a"], "action_table": {...}, "goto_table": {...}, "input": "a"}
//! {"success": false, "error": "...", "steps": [{"stack": ["0"], "input": "a $", "action": ""}]}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::base::PresetId;
use crate::grammar::{ActionTable, Grammar, GotoTable};

/// A complete parse request: one table source plus the input string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseRequest {
    #[serde(flatten)]
    pub source: RequestSource,
    pub input: String,
}

/// Where the collaborator should take the tables from. Exactly one variant
/// per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestSource {
    /// A preset the collaborator resolves on its side by identifier.
    Example { example: PresetId },
    /// User-supplied tables, still opaque JSON at this point.
    Custom {
        #[serde(default)]
        grammar: Value,
        #[serde(default)]
        action_table: Value,
        #[serde(default)]
        goto_table: Value,
    },
}

impl ParseRequest {
    pub fn example(id: impl Into<PresetId>, input: impl Into<String>) -> Self {
        Self {
            source: RequestSource::Example { example: id.into() },
            input: input.into(),
        }
    }

    pub fn custom(
        grammar: Value,
        action_table: Value,
        goto_table: Value,
        input: impl Into<String>,
    ) -> Self {
        Self {
            source: RequestSource::Custom {
                grammar,
                action_table,
                goto_table,
            },
            input: input.into(),
        }
    }

    /// The preset this request names, if any.
    pub fn example_id(&self) -> Option<&PresetId> {
        match &self.source {
            RequestSource::Example { example } => Some(example),
            RequestSource::Custom { .. } => None,
        }
    }
}

/// The parse collaborator's answer.
///
/// Every field is optional on the wire; a bare `{"error": "..."}` decodes
/// as an unsuccessful response with no steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub steps: Vec<WireStep>,
}

impl ParseResponse {
    pub fn accepted(message: impl Into<String>, steps: Vec<WireStep>) -> Self {
        Self {
            success: true,
            error: None,
            message: Some(message.into()),
            steps,
        }
    }

    pub fn rejected(error: impl Into<String>, steps: Vec<WireStep>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            message: None,
            steps,
        }
    }
}

/// One recorded parser configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(default)]
    pub stack: Vec<String>,
    /// Remaining input, tokens separated by single spaces.
    #[serde(default)]
    pub input: String,
    /// Raw action descriptor; empty when the table had no entry.
    #[serde(default)]
    pub action: String,
    /// Set when this step reduced, e.g. `Reducing by rule 6: F → id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduce: Option<String>,
}

/// The tables a preset lookup returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetTables {
    pub grammar: Grammar,
    pub action_table: ActionTable,
    pub goto_table: GotoTable,
}
