//! Error types for grammar and table decoding.

use thiserror::Error;

/// A production string could not be split into head and body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// No `→` or `->` separator in the production.
    #[error("Invalid production '{0}': missing '→'")]
    MissingArrow(String),

    /// Nothing before the arrow.
    #[error("Invalid production '{0}': empty left-hand side")]
    EmptyHead(String),
}

/// A table value does not have the shape the engine needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Wrong JSON type at some position in a table.
    #[error("Invalid {table}: {message}")]
    Shape {
        table: &'static str,
        message: String,
    },
}

impl TableError {
    pub fn shape(table: &'static str, message: impl Into<String>) -> Self {
        Self::Shape {
            table,
            message: message.into(),
        }
    }
}
