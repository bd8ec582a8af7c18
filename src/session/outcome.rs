//! The result of one parse attempt, as the session sees it.

use crate::base::Symbol;
use crate::service::{ParseResponse, TransportError, WireStep};

use super::{AssemblyError, ResolutionError};

/// Error reason recorded when the collaborator could not be used.
pub const TRANSPORT_FAILURE_REASON: &str = "transport failure";

/// One recorded parser configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStep {
    /// Position in the trace, starting at 1.
    pub index: usize,
    /// Stack contents in the order received.
    pub stack: Vec<Symbol>,
    pub remaining_input: String,
    pub action: String,
    pub reduce_production: Option<String>,
}

/// The ordered steps of one attempt. Built once; there is no way to add,
/// remove or reorder steps afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<ParseStep>,
}

impl Trace {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number steps 1.. in the order the collaborator sent them. Any index
    /// on the wire is ignored.
    pub fn from_wire(steps: Vec<WireStep>) -> Self {
        let steps = steps
            .into_iter()
            .enumerate()
            .map(|(i, step)| ParseStep {
                index: i + 1,
                stack: step.stack.into_iter().map(Symbol::from).collect(),
                remaining_input: step.input,
                action: step.action,
                reduce_production: step.reduce,
            })
            .collect();
        Self { steps }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParseStep> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&ParseStep> {
        self.steps.last()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a ParseStep;
    type IntoIter = std::slice::Iter<'a, ParseStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// How an attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// The collaborator accepted the input.
    Accepted,
    /// The collaborator reported `success: false`.
    Rejected,
    /// The collaborator was unreachable or its reply did not decode.
    TransportFailure,
    /// Custom table text was not valid JSON; nothing was sent.
    MalformedTable,
    /// A preset lookup failed.
    PresetUnavailable,
}

/// What the session displays after an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    kind: OutcomeKind,
    message: Option<String>,
    error_reason: Option<String>,
    trace: Trace,
}

impl ParseOutcome {
    /// Map a collaborator response.
    ///
    /// A response carrying an error is never treated as accepted, even if
    /// it also claims success.
    pub fn from_response(response: ParseResponse) -> Self {
        let kind = if response.success && response.error.is_none() {
            OutcomeKind::Accepted
        } else {
            OutcomeKind::Rejected
        };
        Self {
            kind,
            message: response.message,
            error_reason: response.error,
            trace: Trace::from_wire(response.steps),
        }
    }

    pub fn transport_failure(error: &TransportError) -> Self {
        tracing::warn!("parse collaborator failed: {error}");
        Self::failure(OutcomeKind::TransportFailure, TRANSPORT_FAILURE_REASON)
    }

    pub fn malformed_table(error: &AssemblyError) -> Self {
        Self::failure(OutcomeKind::MalformedTable, error.to_string())
    }

    pub fn preset_unavailable(error: &ResolutionError) -> Self {
        Self::failure(OutcomeKind::PresetUnavailable, error.to_string())
    }

    fn failure(kind: OutcomeKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            message: None,
            error_reason: Some(reason.into()),
            trace: Trace::empty(),
        }
    }

    pub fn kind(&self) -> OutcomeKind {
        self.kind
    }

    pub fn accepted(&self) -> bool {
        self.kind == OutcomeKind::Accepted
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn error_reason(&self) -> Option<&str> {
        self.error_reason.as_deref()
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }
}
