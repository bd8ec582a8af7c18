//! Error types for table resolution and request assembly.

use std::fmt;

use thiserror::Error;

use crate::base::PresetId;
use crate::service::LookupError;

/// A preset selection could not be turned into tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// The lookup failed; the fields keep their previous contents.
    #[error("Failed to load example {preset}: {source}")]
    PresetUnavailable {
        preset: PresetId,
        #[source]
        source: LookupError,
    },

    /// Another lookup or a submission is still in flight.
    #[error("A request is already in flight")]
    Busy,

    /// A lookup result arrived for a selection that is no longer pending.
    #[error("No pending lookup for example {0}")]
    Stale(PresetId),
}

/// Custom table text could not be turned into a request.
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("Invalid JSON format in {field}: {source}")]
    MalformedTable {
        field: TableField,
        #[source]
        source: serde_json::Error,
    },
}

impl AssemblyError {
    pub fn field(&self) -> TableField {
        match self {
            Self::MalformedTable { field, .. } => *field,
        }
    }
}

/// The three editable table fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableField {
    Grammar,
    ActionTable,
    GotoTable,
}

impl TableField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grammar => "grammar",
            Self::ActionTable => "action table",
            Self::GotoTable => "goto table",
        }
    }
}

impl fmt::Display for TableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
