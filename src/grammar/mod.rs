//! Grammar productions, action descriptors and LR tables.
//!
//! The session layer treats grammars and tables as opaque JSON. This module
//! is where they get a shape: the engine decodes them into the typed forms
//! below before running a parse.
//!
//! - [`Production`] - `lhs → rhs` split into a head and counted body symbols
//! - [`Action`] - decoded action descriptors (`s5`, `r2`, `acc`)
//! - [`ActionTable`], [`GotoTable`] - order-preserving state-keyed tables
//! - [`InputLexer`] - logos tokenizer for parser input strings

mod action;
mod error;
mod lexer;
mod production;
mod tables;

pub use action::Action;
pub use error::{GrammarError, TableError};
pub use lexer::{InputLexer, InputToken, tokenize_input};
pub use production::{Production, parse_productions};
pub use tables::{ActionTable, Grammar, GotoTable};
