//! The status line shown above the trace.

use std::fmt;

use serde::Serialize;

use crate::session::{OutcomeKind, ParseOutcome};

pub const ACCEPTED_TEXT: &str = "Input string accepted";
pub const REJECTED_TEXT: &str = "Parsing failed";
pub const TRANSPORT_FAILURE_TEXT: &str = "Server error. Please try again.";
pub const MALFORMED_TABLE_TEXT: &str = "Invalid JSON format in one of the inputs";
pub const PRESET_UNAVAILABLE_TEXT: &str = "Failed to load example";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub tone: Tone,
    pub text: String,
}

impl Banner {
    /// Pick the message for an outcome.
    ///
    /// Accepted and rejected parses prefer the collaborator's own wording.
    /// The other kinds never reached a parse, so they get a fixed message.
    pub fn for_outcome(outcome: &ParseOutcome) -> Self {
        let (tone, text) = match outcome.kind() {
            OutcomeKind::Accepted => (Tone::Success, outcome.message().unwrap_or(ACCEPTED_TEXT)),
            OutcomeKind::Rejected => (Tone::Error, outcome.error_reason().unwrap_or(REJECTED_TEXT)),
            OutcomeKind::TransportFailure => (Tone::Error, TRANSPORT_FAILURE_TEXT),
            OutcomeKind::MalformedTable => (Tone::Error, MALFORMED_TABLE_TEXT),
            OutcomeKind::PresetUnavailable => (Tone::Error, PRESET_UNAVAILABLE_TEXT),
        };
        Self {
            tone,
            text: text.to_string(),
        }
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tone {
            Tone::Success => write!(f, "✓ {}", self.text),
            Tone::Error => write!(f, "✗ {}", self.text),
        }
    }
}
