//! Logos-based tokenizer for parser input strings
//!
//! Input strings are written compactly (`id+id*id`): the two-letter `id`
//! terminal is one token, every other non-blank character is a token of its
//! own, and whitespace is skipped.

use logos::Logos;

use crate::base::Symbol;
use crate::base::constants::END_MARKER;

/// Lexer wrapping the logos-generated tokenizer
pub struct InputLexer<'a> {
    inner: logos::Lexer<'a, InputToken>,
}

impl<'a> InputLexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: InputToken::lexer(input),
        }
    }
}

impl<'a> Iterator for InputLexer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        // Every non-blank character matches `Char`, so errors cannot occur;
        // the slice is the token either way.
        let _ = self.inner.next()?;
        Some(self.inner.slice())
    }
}

/// Logos token enum for input strings
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum InputToken {
    #[token("id")]
    Id,

    #[regex(r"[^ \t\r\n\f]")]
    Char,
}

/// Tokenize an input string and terminate it with the end marker.
///
/// The marker is not doubled when the user already typed a trailing `$`.
pub fn tokenize_input(input: &str) -> Vec<Symbol> {
    let mut tokens: Vec<Symbol> = InputLexer::new(input).map(Symbol::new).collect();
    if tokens.last().map(Symbol::as_str) != Some(END_MARKER) {
        tokens.push(Symbol::new(END_MARKER));
    }
    tokens
}
