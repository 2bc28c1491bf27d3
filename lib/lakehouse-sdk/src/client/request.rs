use http::{HeaderMap, Method};

use super::operation::ResponseType;
use super::parameters::{CallBody, CallQuery};

/// A fully assembled request, ready for a [`Transport`](super::Transport).
///
/// Built after required parameters are validated; the path is already
/// resolved and percent-encoded, headers are merged with the caller's
/// overrides applied last.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    /// Name of the operation that produced this request.
    pub operation: &'static str,
    /// HTTP method.
    pub method: Method,
    /// Resolved path, relative to the service URL.
    pub path: String,
    /// Query string parameters.
    pub query: CallQuery,
    /// Request headers.
    pub headers: HeaderMap,
    /// Optional body; `None` when no body field was supplied.
    pub body: Option<CallBody>,
    /// How the response body should be returned.
    pub response_type: ResponseType,
}

impl RequestOptions {
    /// Returns a header value as a string, if present and visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}
