//! Production strings (`E → E+T`) and right-hand side symbol counting.

use std::fmt;

use crate::base::Symbol;
use crate::base::constants::{ARROW, ASCII_ARROW, EPSILON_SPELLINGS};

use super::GrammarError;

/// A grammar rule decoded from its display string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    /// Nonterminal on the left of the arrow.
    pub lhs: Symbol,
    /// Right-hand side exactly as written (trimmed).
    pub rhs: String,
    /// Symbols the right-hand side pushes, in order.
    pub body: Vec<Symbol>,
}

impl Production {
    /// Split `lhs → rhs` (or `lhs -> rhs`) into a production.
    pub fn parse(rule: &str) -> Result<Self, GrammarError> {
        let (lhs, rhs) = rule
            .split_once(ARROW)
            .or_else(|| rule.split_once(ASCII_ARROW))
            .ok_or_else(|| GrammarError::MissingArrow(rule.to_string()))?;

        let lhs = lhs.trim();
        if lhs.is_empty() {
            return Err(GrammarError::EmptyHead(rule.to_string()));
        }

        let rhs = rhs.trim();
        Ok(Self {
            lhs: Symbol::new(lhs),
            rhs: rhs.to_string(),
            body: split_body(rhs),
        })
    }

    /// Number of symbols popped (times two, with states) on reduction.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// True for ε-productions.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, ARROW, self.rhs)
    }
}

/// Decode every rule of a grammar, stopping at the first bad one.
pub fn parse_productions<S: AsRef<str>>(rules: &[S]) -> Result<Vec<Production>, GrammarError> {
    rules.iter().map(|rule| Production::parse(rule.as_ref())).collect()
}

/// Split a right-hand side into symbols.
///
/// Grammars are usually written without spaces (`E+T`, `(E)`), so symbols
/// are recognised lexically: `id` is one symbol, the operator characters and
/// `a` stand alone, a character followed by a letter opens a multi-character
/// name, and whitespace only separates.
fn split_body(rhs: &str) -> Vec<Symbol> {
    if rhs.is_empty() || EPSILON_SPELLINGS.contains(&rhs) {
        return Vec::new();
    }

    let chars: Vec<(usize, char)> = rhs.char_indices().collect();
    let end_of = |i: usize| chars.get(i).map_or(rhs.len(), |(offset, _)| *offset);

    let mut body = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let (start, c) = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let next = chars.get(i + 1).map(|(_, n)| *n);
        let len = if c == 'i' && next == Some('d') {
            2
        } else if matches!(c, '+' | '*' | '(' | ')' | 'a') {
            1
        } else if next.is_some_and(char::is_alphabetic) {
            1 + chars[i + 1..]
                .iter()
                .take_while(|(_, n)| n.is_alphanumeric())
                .count()
        } else {
            1
        };

        body.push(Symbol::new(&rhs[start..end_of(i + len)]));
        i += len;
    }
    body
}
