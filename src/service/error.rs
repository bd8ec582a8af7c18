//! Error types for collaborator calls.

use thiserror::Error;

/// The collaborator could not be reached or answered with something that
/// does not decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Collaborator unreachable: {0}")]
    Unreachable(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl TransportError {
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Unreachable(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }
}

/// A preset lookup did not produce tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The catalog has no preset under that identifier.
    #[error("Example not found: {0}")]
    NotFound(String),

    /// The lookup answered, but not with a grammar and two tables.
    #[error("Malformed example: {0}")]
    Malformed(String),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
