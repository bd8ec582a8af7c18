//! The two collaborators a parse session talks to.
//!
//! The session never runs a parse or reads a catalog itself. It goes
//! through two traits:
//!
//! - [`ExampleLookup`] - resolve a preset identifier to its tables
//! - [`ParseService`] - run a [`ParseRequest`] and report a [`ParseResponse`]
//!
//! ```text
//! ┌──────────────┐   ParseRequest    ┌──────────────────────┐
//! │ ParseSession │ ────────────────▶ │ ParseService         │
//! │              │ ◀──────────────── │  LocalParseServer    │
//! └──────────────┘   ParseResponse   │  JsonClient<E>       │
//!                                    └──────────────────────┘
//! ```
//!
//! [`LocalParseServer`] answers in-process. [`JsonClient`] speaks the JSON
//! wire format to any [`Endpoint`], which is where transport failures and
//! undecodable responses come from.

mod client;
mod error;
mod local;
mod wire;

pub use client::{Endpoint, JsonClient, Route};
pub use error::{LookupError, TransportError};
pub use local::LocalParseServer;
pub use wire::{ParseRequest, ParseResponse, PresetTables, RequestSource, WireStep};

use crate::base::PresetId;

/// Resolves preset identifiers to grammar/action/goto tables.
pub trait ExampleLookup {
    fn fetch(&self, id: &PresetId) -> Result<PresetTables, LookupError>;
}

/// Runs parse requests.
pub trait ParseService {
    fn parse(&self, request: &ParseRequest) -> Result<ParseResponse, TransportError>;
}

impl<T: ExampleLookup + ?Sized> ExampleLookup for &T {
    fn fetch(&self, id: &PresetId) -> Result<PresetTables, LookupError> {
        (**self).fetch(id)
    }
}

impl<T: ParseService + ?Sized> ParseService for &T {
    fn parse(&self, request: &ParseRequest) -> Result<ParseResponse, TransportError> {
        (**self).parse(request)
    }
}
