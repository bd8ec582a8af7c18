//! The parser stack: states interleaved with the symbols that led to them.

use crate::base::{StateId, Symbol};

/// Alternating `state symbol state ... state` stack.
///
/// Never empty: the start state sits at the bottom and is never popped.
pub(super) struct ParseStack {
    entries: Vec<Symbol>,
}

impl ParseStack {
    pub(super) fn new(start: &str) -> Self {
        Self {
            entries: vec![Symbol::new(start)],
        }
    }

    /// The state on top of the stack.
    pub(super) fn top_state(&self) -> &StateId {
        // `pop_symbols` refuses to remove the bottom entry.
        &self.entries[self.entries.len() - 1]
    }

    /// Push a grammar symbol and the state reached through it.
    pub(super) fn shift(&mut self, symbol: Symbol, state: StateId) {
        self.entries.push(symbol);
        self.entries.push(state);
    }

    /// Pop `count` symbol/state pairs. Returns false, leaving the stack
    /// untouched, when that would expose the bottom.
    pub(super) fn pop_symbols(&mut self, count: usize) -> bool {
        let pairs = count * 2;
        if pairs >= self.entries.len() {
            return false;
        }
        self.entries.truncate(self.entries.len() - pairs);
        true
    }

    /// Number of entries, states and symbols together.
    pub(super) fn depth(&self) -> usize {
        self.entries.len()
    }

    pub(super) fn to_strings(&self) -> Vec<String> {
        self.entries.iter().map(|s| s.to_string()).collect()
    }
}
