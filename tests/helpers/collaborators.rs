//! Collaborator doubles that record how often they are called.

use std::cell::{Cell, RefCell};

use lrtrace::PresetId;
use lrtrace::service::{
    Endpoint, ExampleLookup, LookupError, ParseRequest, ParseResponse, ParseService,
    PresetTables, Route, TransportError,
};

/// Answers every parse with a fixed response and remembers the requests.
pub struct RecordingService {
    reply: Result<ParseResponse, TransportError>,
    requests: RefCell<Vec<ParseRequest>>,
}

impl RecordingService {
    pub fn replying(reply: Result<ParseResponse, TransportError>) -> Self {
        Self {
            reply,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn requests(&self) -> Vec<ParseRequest> {
        self.requests.borrow().clone()
    }
}

impl ParseService for RecordingService {
    fn parse(&self, request: &ParseRequest) -> Result<ParseResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        self.reply.clone()
    }
}

/// A lookup that wraps another and counts calls.
pub struct CountingLookup<L> {
    inner: L,
    calls: Cell<usize>,
}

impl<L: ExampleLookup> CountingLookup<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<L: ExampleLookup> ExampleLookup for CountingLookup<L> {
    fn fetch(&self, id: &PresetId) -> Result<PresetTables, LookupError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.fetch(id)
    }
}

/// Serves presets built from in-test grammars.
pub struct GrammarLookup(pub Vec<&'static str>);

impl ExampleLookup for GrammarLookup {
    fn fetch(&self, _id: &PresetId) -> Result<PresetTables, LookupError> {
        Ok(PresetTables {
            grammar: lrtrace::grammar::Grammar::new(self.0.iter().copied()),
            ..PresetTables::default()
        })
    }
}

/// An endpoint that is never reachable.
pub struct DownEndpoint;

impl Endpoint for DownEndpoint {
    fn call(&self, _route: Route<'_>, _body: &[u8]) -> Result<Vec<u8>, TransportError> {
        Err(TransportError::unreachable("connection refused"))
    }
}

/// An endpoint that answers with fixed bytes.
pub struct CannedEndpoint(pub &'static [u8]);

impl Endpoint for CannedEndpoint {
    fn call(&self, _route: Route<'_>, _body: &[u8]) -> Result<Vec<u8>, TransportError> {
        Ok(self.0.to_vec())
    }
}
