use std::sync::Arc;

use super::auth::Authenticator;
use super::operation::Operation;
use super::retry::RetryConfig;
use super::{CallBody, CallHeaders, CallPath, CallQuery};

mod builder;
mod execution;

/// A single invocation of an [`Operation`], being assembled.
///
/// Each SDK method fills an `OperationCall` from its parameters: path
/// arguments, query parameters, JSON body fields or form parts, and header
/// parameters. Awaiting the call validates it and sends it through the
/// client's transport.
///
/// # Header precedence
///
/// From lowest to highest:
/// 1. client default headers
/// 2. the operation's `Accept` and `Content-Type`
/// 3. header parameters (e.g. `AuthInstanceId`)
/// 4. the caller's `headers`
///
/// The client credentials and instance id are added afterwards, only for
/// headers the request does not carry yet.
#[derive(Debug)]
pub struct OperationCall<T> {
    pub(super) transport: Arc<T>,
    pub(super) authenticator: Authenticator,
    pub(super) retry: Option<RetryConfig>,
    pub(super) default_headers: CallHeaders,

    pub(super) operation: &'static Operation,
    pub(super) path: CallPath,
    pub(super) query: CallQuery,
    pub(super) param_headers: CallHeaders,
    pub(super) headers: Option<CallHeaders>,
    pub(super) body: Option<CallBody>,
}

impl<T> OperationCall<T> {
    pub(in crate::client) fn new(
        transport: Arc<T>,
        authenticator: Authenticator,
        retry: Option<RetryConfig>,
        default_headers: CallHeaders,
        operation: &'static Operation,
    ) -> Self {
        Self {
            transport,
            authenticator,
            retry,
            default_headers,
            operation,
            path: CallPath::from(operation.path),
            query: CallQuery::default(),
            param_headers: CallHeaders::default(),
            headers: None,
            body: None,
        }
    }

    /// The operation being called.
    pub fn operation(&self) -> &'static Operation {
        self.operation
    }
}
