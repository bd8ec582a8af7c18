//! Foundation types for the lrtrace toolchain.
//!
//! This module provides the primitives used throughout the crate:
//! - [`Symbol`] - Grammar symbols and parser state labels
//! - [`PresetId`] - Identifier of a canned grammar/table bundle
//! - Domain constants (end marker, start state, suggested inputs)
//!
//! This module has NO dependencies on other lrtrace modules.

pub mod constants;
mod symbol;

pub use symbol::{PresetId, StateId, Symbol};
