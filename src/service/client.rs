//! JSON client for remote (or simulated) collaborators.

use serde_json::Value;

use crate::base::PresetId;

use super::{
    ExampleLookup, LookupError, ParseRequest, ParseResponse, ParseService, PresetTables,
    TransportError,
};

/// The two routes a collaborator serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// `POST /parse` with a [`ParseRequest`] body.
    Parse,
    /// `GET /get_example/<id>`.
    Example(&'a PresetId),
}

/// Moves request bodies to a collaborator and response bodies back.
pub trait Endpoint {
    fn call(&self, route: Route<'_>, body: &[u8]) -> Result<Vec<u8>, TransportError>;
}

impl<E: Endpoint + ?Sized> Endpoint for &E {
    fn call(&self, route: Route<'_>, body: &[u8]) -> Result<Vec<u8>, TransportError> {
        (**self).call(route, body)
    }
}

/// Implements both collaborator traits over an [`Endpoint`] using JSON
/// bodies.
#[derive(Debug, Clone)]
pub struct JsonClient<E> {
    endpoint: E,
}

impl<E: Endpoint> JsonClient<E> {
    pub fn new(endpoint: E) -> Self {
        Self { endpoint }
    }
}

impl<E: Endpoint> ParseService for JsonClient<E> {
    fn parse(&self, request: &ParseRequest) -> Result<ParseResponse, TransportError> {
        let body = serde_json::to_vec(request)
            .map_err(|e| TransportError::unreachable(format!("cannot encode request: {e}")))?;
        let reply = self.endpoint.call(Route::Parse, &body)?;
        serde_json::from_slice(&reply).map_err(|e| TransportError::malformed(e.to_string()))
    }
}

impl<E: Endpoint> ExampleLookup for JsonClient<E> {
    fn fetch(&self, id: &PresetId) -> Result<PresetTables, LookupError> {
        let reply = self.endpoint.call(Route::Example(id), &[])?;
        let value: Value = serde_json::from_slice(&reply)
            .map_err(|e| TransportError::malformed(e.to_string()))?;

        if let Some(error) = value.get("error") {
            let message = error.as_str().unwrap_or(id.as_str());
            return Err(LookupError::NotFound(message.to_string()));
        }
        serde_json::from_value(value).map_err(|e| LookupError::Malformed(e.to_string()))
    }
}
