//! # lrtrace
//!
//! Step-by-step shift-reduce parse traces from user-supplied LR tables.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! render    → Display model: banner, trace rows, text table
//!   ↓
//! session   → Table source resolver, request assembler, session state machine
//!   ↓
//! service   → Collaborator traits, wire types, local server, JSON client
//!   ↓
//! engine    → Table-driven SLR driver      presets → Canned grammars and tables
//!   ↓
//! grammar   → Productions, action descriptors, typed tables, input lexer
//!   ↓
//! base      → Primitives (Symbol, StateId, PresetId, constants)
//! ```
//!
//! `config` sits beside the stack and is read by `engine`, `presets` and
//! `session`.

// ============================================================================
// MODULES (dependency order: base → grammar → engine/presets → service → session → render)
// ============================================================================

/// Foundation types: Symbol, StateId, PresetId
pub mod base;

/// Grammar productions, action descriptors, LR tables and the input lexer
pub mod grammar;

/// Table-driven SLR parse driver
pub mod engine;

/// Named grammar/table bundles
pub mod presets;

/// Collaborator boundary: example lookup and parse service
pub mod service;

/// Parse-session controller
pub mod session;

/// Trace rendering
pub mod render;

/// Engine, session and catalog options
pub mod config;

// Re-export foundation types
pub use base::{PresetId, StateId, Symbol};

// Re-export the session surface
pub use render::{TraceTable, TraceView, render};
pub use session::{OutcomeKind, ParseOutcome, ParseSession, Selection, SessionState};
