//! Table-driven SLR parse driver.
//!
//! This is the algorithm that sits behind the parse collaborator. It takes
//! a grammar and two tables that nobody has validated, runs the classic
//! shift/reduce/goto loop over the input, and records every configuration
//! it passes through. Every way the tables can fail to cover the input ends
//! the run with a reason and the trace so far; nothing panics.
//!
//! ## Stack layout
//!
//! The stack alternates states and grammar symbols and always has a state
//! on top:
//!
//! ```text
//! 0 E 1 + 6 T 9
//! ```
//!
//! A shift pushes the lookahead and the target state; a reduction by
//! `A → β` pops `2·|β|` entries and pushes `A` and `goto(top, A)`.

mod stack;

use crate::base::Symbol;
use crate::base::constants::{END_MARKER, START_STATE};
use crate::config::EngineOptions;
use crate::grammar::{Action, ActionTable, GotoTable, Production, tokenize_input};
use crate::service::{ParseResponse, WireStep};

use stack::ParseStack;

/// Message attached to accepted parses.
pub const ACCEPT_MESSAGE: &str = "Input accepted";

/// One parse run over borrowed tables.
pub struct SlrEngine<'t> {
    productions: &'t [Production],
    actions: &'t ActionTable,
    gotos: &'t GotoTable,
    options: EngineOptions,
}

impl<'t> SlrEngine<'t> {
    pub fn new(productions: &'t [Production], actions: &'t ActionTable, gotos: &'t GotoTable) -> Self {
        Self {
            productions,
            actions,
            gotos,
            options: EngineOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse `input`, returning the verdict and the recorded steps.
    pub fn run(&self, input: &str) -> ParseResponse {
        let tokens = tokenize_input(input);
        let mut position = 0;
        let mut stack = ParseStack::new(START_STATE);
        let mut steps: Vec<WireStep> = Vec::new();

        tracing::debug!(tokens = tokens.len(), "starting SLR parse");

        loop {
            if steps.len() >= self.options.max_steps {
                tracing::warn!(max_steps = self.options.max_steps, "step limit reached");
                return ParseResponse::rejected(
                    format!("Step limit of {} exceeded", self.options.max_steps),
                    steps,
                );
            }

            if stack.depth() > self.options.max_stack_depth {
                tracing::warn!(
                    max_stack_depth = self.options.max_stack_depth,
                    "stack depth limit reached"
                );
                return ParseResponse::rejected(
                    format!(
                        "Stack depth limit of {} exceeded",
                        self.options.max_stack_depth
                    ),
                    steps,
                );
            }

            let state = stack.top_state().clone();
            // Once the marker has been shifted the lookahead stays at `$`.
            let lookahead = tokens
                .get(position)
                .cloned()
                .unwrap_or_else(|| Symbol::new(END_MARKER));
            let descriptor = self.actions.get(&state, &lookahead).unwrap_or_default();

            steps.push(WireStep {
                index: Some(steps.len() + 1),
                stack: stack.to_strings(),
                input: remaining(tokens.get(position..).unwrap_or_default()),
                action: descriptor.to_string(),
                reduce: None,
            });

            if descriptor.is_empty() {
                return ParseResponse::rejected(
                    format!("No action found for state {state} and symbol {lookahead}"),
                    steps,
                );
            }

            let Some(action) = Action::parse(descriptor) else {
                return ParseResponse::rejected(format!("Invalid action: {descriptor}"), steps);
            };

            tracing::trace!(%state, %lookahead, ?action, "step {}", steps.len());

            match action {
                Action::Shift(target) => {
                    stack.shift(lookahead, target);
                    position += 1;
                }
                Action::Reduce(rule) => {
                    let Some(production) = rule.checked_sub(1).and_then(|i| self.productions.get(i))
                    else {
                        return ParseResponse::rejected(
                            format!("Invalid production index: {rule}"),
                            steps,
                        );
                    };

                    if let Some(step) = steps.last_mut() {
                        step.reduce = Some(format!("Reducing by rule {rule}: {production}"));
                    }

                    if !stack.pop_symbols(production.len()) {
                        return ParseResponse::rejected(
                            format!("Stack underflow reducing by rule {rule}: {production}"),
                            steps,
                        );
                    }

                    let exposed = stack.top_state().clone();
                    let Some(target) = self.gotos.get(&exposed, &production.lhs) else {
                        return ParseResponse::rejected(
                            format!(
                                "No goto found for state {exposed} and non-terminal {}",
                                production.lhs
                            ),
                            steps,
                        );
                    };
                    stack.shift(production.lhs.clone(), target.clone());
                }
                Action::Accept => {
                    tracing::debug!(steps = steps.len(), "input accepted");
                    return ParseResponse::accepted(ACCEPT_MESSAGE, steps);
                }
            }
        }
    }
}

/// Remaining tokens as shown to the user: separated by single spaces.
fn remaining(tokens: &[Symbol]) -> String {
    tokens
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
