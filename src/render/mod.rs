//! Trace Renderer.
//!
//! Turns a [`ParseOutcome`](crate::session::ParseOutcome) into a plain display model: a banner with the
//! user-facing message and one row per parse step. Nothing here knows
//! about widgets or markup; [`TraceView`] also prints itself as a text
//! table for terminals.
//!
//! Rendering is a pure function of the outcome. [`TraceTable`] is the
//! stateful results region: showing a new outcome replaces whatever it
//! showed before.

mod banner;
mod view;

pub use banner::{
    ACCEPTED_TEXT, Banner, MALFORMED_TABLE_TEXT, PRESET_UNAVAILABLE_TEXT, REJECTED_TEXT,
    TRANSPORT_FAILURE_TEXT, Tone,
};
pub use view::{TraceRow, TraceTable, TraceView, render};
