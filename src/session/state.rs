//! Parse Session State Machine.
//!
//! ```text
//!            select(preset)             lookup done
//!   Idle ───────────────────▶ Loading ──────────────▶ Idle
//!    │  ▲                        │ lookup failed
//!    │  └──── select(custom)     ▼
//!    │                       Displaying ◀──────────────┐
//!    │ trigger                 │    ▲                  │
//!    ▼                         │    │ response /       │ assembly
//!  Submitting ◀────────────────┘    │ transport error  │ failure
//!    └──────────────────────────────┘                  │
//!   (Idle | Displaying) ── trigger ────────────────────┘
//! ```
//!
//! Collaborator calls are split into a begin half that hands out a ticket
//! and a complete half that consumes it, so the busy states are real
//! states rather than flags.

use crate::base::PresetId;
use crate::config::SessionOptions;
use crate::service::{
    ExampleLookup, LookupError, ParseRequest, ParseResponse, ParseService, PresetTables,
    TransportError,
};

use super::{
    ParseOutcome, PendingLookup, ResolutionError, ResolvedTables, Selection, TableFields,
    TableSourceResolver, assemble,
};

/// Lifecycle of the current interaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Idle,
    /// A preset lookup is in flight.
    Loading { preset: PresetId },
    /// A parse request is in flight.
    Submitting { attempt: u64, request: ParseRequest },
    /// The last attempt has ended; its outcome is on display.
    Displaying(ParseOutcome),
}

impl SessionState {
    /// True while a collaborator call is outstanding.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Loading { .. } | Self::Submitting { .. })
    }

    pub fn outcome(&self) -> Option<&ParseOutcome> {
        match self {
            Self::Displaying(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading { .. } => "loading",
            Self::Submitting { .. } => "submitting",
            Self::Displaying(_) => "displaying",
        }
    }
}

/// Ticket for a parse request handed to the collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    attempt: u64,
    request: ParseRequest,
}

impl Submission {
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// The request to send.
    pub fn request(&self) -> &ParseRequest {
        &self.request
    }
}

/// One user's parse session: resolver, state machine and last outcome.
#[derive(Debug, Default)]
pub struct ParseSession {
    resolver: TableSourceResolver,
    state: SessionState,
    attempts: u64,
}

impl ParseSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SessionOptions) -> Self {
        Self {
            resolver: TableSourceResolver::with_options(options),
            ..Self::default()
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn tables(&self) -> &ResolvedTables {
        self.resolver.current()
    }

    /// Edit the table texts or the input. Edits made while a request is in
    /// flight only affect the next request.
    pub fn fields_mut(&mut self) -> &mut TableFields {
        self.resolver.fields_mut()
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.resolver.fields_mut().input = input.into();
    }

    /// Whether the parse trigger accepts a press.
    pub fn trigger_enabled(&self) -> bool {
        !self.state.is_busy()
    }

    /// The outcome on display, if any.
    pub fn outcome(&self) -> Option<&ParseOutcome> {
        self.state.outcome()
    }

    // ── Table source ────────────────────────────────────────────────

    /// Start switching the table source. See [`TableSourceResolver::begin`].
    pub fn begin_selection(
        &mut self,
        selection: Selection,
    ) -> Result<Option<PendingLookup>, ResolutionError> {
        if self.state.is_busy() {
            return Err(ResolutionError::Busy);
        }

        let pending = self.resolver.begin(selection)?;
        self.state = match &pending {
            Some(lookup) => SessionState::Loading {
                preset: lookup.preset().clone(),
            },
            None => SessionState::Idle,
        };
        Ok(pending)
    }

    /// Finish a preset lookup. A failed lookup is put on display.
    pub fn finish_selection(
        &mut self,
        lookup: PendingLookup,
        result: Result<PresetTables, LookupError>,
    ) -> Result<(), ResolutionError> {
        match self.resolver.complete(lookup, result) {
            Ok(()) => {
                self.state = SessionState::Idle;
                Ok(())
            }
            Err(error @ ResolutionError::PresetUnavailable { .. }) => {
                self.state = SessionState::Displaying(ParseOutcome::preset_unavailable(&error));
                Err(error)
            }
            Err(error) => Err(error),
        }
    }

    /// Switch the table source, performing any lookup synchronously.
    pub fn select(
        &mut self,
        selection: Selection,
        lookup: &dyn ExampleLookup,
    ) -> Result<(), ResolutionError> {
        match self.begin_selection(selection)? {
            Some(pending) => {
                let result = lookup.fetch(pending.preset());
                self.finish_selection(pending, result)
            }
            None => Ok(()),
        }
    }

    // ── Parsing ─────────────────────────────────────────────────────

    /// Press the parse trigger.
    ///
    /// Returns the request to send, or `None` when nothing is to be sent:
    /// either the trigger is disabled (the press is ignored) or the tables
    /// did not assemble (the failure is put on display).
    pub fn trigger(&mut self) -> Option<Submission> {
        if !self.trigger_enabled() {
            tracing::debug!(state = self.state.name(), "trigger ignored while busy");
            return None;
        }

        let request = match assemble(self.resolver.current()) {
            Ok(request) => request,
            Err(error) => {
                tracing::debug!("request assembly failed: {error}");
                self.state = SessionState::Displaying(ParseOutcome::malformed_table(&error));
                return None;
            }
        };

        self.attempts += 1;
        let attempt = self.attempts;
        tracing::info!(attempt, example = ?request.example_id(), "submitting parse request");
        self.state = SessionState::Submitting {
            attempt,
            request: request.clone(),
        };
        Some(Submission { attempt, request })
    }

    /// Deliver the collaborator's answer for `submission`.
    ///
    /// Answers for anything but the in-flight attempt are dropped.
    pub fn complete(
        &mut self,
        submission: Submission,
        result: Result<ParseResponse, TransportError>,
    ) -> Option<&ParseOutcome> {
        match &self.state {
            SessionState::Submitting { attempt, .. } if *attempt == submission.attempt => {}
            state => {
                tracing::warn!(
                    attempt = submission.attempt,
                    state = state.name(),
                    "dropping response for an attempt that is not in flight"
                );
                return None;
            }
        }

        let outcome = match result {
            Ok(response) => ParseOutcome::from_response(response),
            Err(error) => ParseOutcome::transport_failure(&error),
        };
        tracing::info!(
            attempt = submission.attempt,
            kind = ?outcome.kind(),
            steps = outcome.trace().len(),
            "parse attempt finished"
        );
        self.state = SessionState::Displaying(outcome);
        self.state.outcome()
    }

    /// Trigger and complete in one call against `service`.
    ///
    /// Returns the outcome on display afterwards; `None` if the trigger
    /// was disabled.
    pub fn submit(&mut self, service: &dyn ParseService) -> Option<&ParseOutcome> {
        match self.trigger() {
            Some(submission) => {
                let result = service.parse(submission.request());
                self.complete(submission, result)
            }
            None => self.state.outcome(),
        }
    }
}
