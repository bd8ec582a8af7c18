//! The parse-session controller.
//!
//! A session turns what the user picked and typed into a parse request,
//! hands it to the parse collaborator and keeps the outcome for display.
//!
//! ```text
//! Selection ──▶ TableSourceResolver ──▶ ResolvedTables
//!                                            │ assemble
//!                                            ▼
//!                ParseSession ◀────────── ParseRequest
//!                     │ ParseService
//!                     ▼
//!               ParseOutcome ──▶ render
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use lrtrace::presets::PresetCatalog;
//! use lrtrace::service::LocalParseServer;
//! use lrtrace::session::{ParseSession, Selection};
//!
//! let server = LocalParseServer::builtin();
//! let mut session = ParseSession::new();
//! session.select(Selection::from_choice("example1"), &server)?;
//! let outcome = session.submit(&server);
//! ```

mod assembler;
mod error;
mod outcome;
mod resolver;
mod state;

pub use assembler::assemble;
pub use error::{AssemblyError, ResolutionError, TableField};
pub use outcome::{OutcomeKind, ParseOutcome, ParseStep, TRANSPORT_FAILURE_REASON, Trace};
pub use resolver::{
    PendingLookup, ResolvedTables, Selection, TableFields, TableSource, TableSourceResolver,
};
pub use state::{ParseSession, SessionState, Submission};
