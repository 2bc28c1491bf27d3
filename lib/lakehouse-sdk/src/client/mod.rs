use std::fmt;
use std::sync::Arc;

mod builder;
pub use self::builder::{DEFAULT_ENV_PREFIX, DEFAULT_SERVICE_URL, LakehouseClientBuilder};

mod call;
pub use self::call::OperationCall;

mod parameters;
pub use self::parameters::{
    CallBody, CallHeaders, CallPath, CallQuery, FileWithMetadata, FormPart, FormValue,
};

mod auth;
use self::auth::Authenticator;
pub use self::auth::{AuthType, Authentication, AuthenticationError, SecureString};

mod error;
pub use self::error::LakehouseError;

mod operation;
pub use self::operation::{HttpMethod, Operation, ResponseType};

mod request;
pub use self::request::RequestOptions;

mod response;
pub use self::response::{DetailedResponse, ResponseBody};

mod retry;
pub use self::retry::RetryConfig;

mod transport;
#[cfg(test)]
pub(crate) use self::transport::testing;
pub use self::transport::{
    ByteStream, ReqwestTransport, Transport, TransportBody, TransportResponse,
};

/// Client of the lakehouse REST service.
///
/// Every service operation is a method of this type, see the
/// [`service`](crate::service) module. A client is cheap to clone: clones share
/// the same transport, while the retry toggle belongs to each instance.
///
/// # Example
///
/// ```rust,no_run
/// use lakehouse_sdk::{LakehouseClient, RetryConfig};
/// use lakehouse_sdk::service::GetDatabasesParams;
///
/// # async fn example() -> Result<(), lakehouse_sdk::LakehouseError> {
/// let mut client = LakehouseClient::builder()
///     .with_service_url("https://lakehouse.example.com/lakehouse/api/v1")
///     .build()?;
/// client.enable_retries(RetryConfig::default());
///
/// let response = client.get_databases(GetDatabasesParams::default()).await?;
/// let databases: serde_json::Value = response.as_json()?;
/// # Ok(())
/// # }
/// ```
pub struct LakehouseClient<T = ReqwestTransport> {
    transport: Arc<T>,
    authenticator: Authenticator,
    default_headers: CallHeaders,
    retry: Option<RetryConfig>,
}

// Create
impl LakehouseClient {
    /// Creates a builder with the default configuration.
    pub fn builder() -> LakehouseClientBuilder {
        LakehouseClientBuilder::default()
    }

    /// Creates a client configured from `LAKEHOUSE_*` environment variables.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid, see
    /// [`LakehouseClientBuilder::from_env`].
    pub fn from_env() -> Result<Self, LakehouseError> {
        LakehouseClientBuilder::from_env(DEFAULT_ENV_PREFIX)?.build()
    }
}

// Retries
impl<T> LakehouseClient<T> {
    /// Enables automatic retries for calls made by this client.
    pub fn enable_retries(&mut self, retry: RetryConfig) {
        self.retry = Some(retry);
    }

    /// Disables automatic retries.
    pub fn disable_retries(&mut self) {
        self.retry = None;
    }

    /// The active retry policy, `None` when retries are disabled.
    pub fn retry_config(&self) -> Option<RetryConfig> {
        self.retry
    }
}

// Calls
impl<T: Transport> LakehouseClient<T> {
    /// Returns the transport used by this client.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Starts a call of `operation`.
    ///
    /// Service methods are built on top of this; it is also the entry point
    /// for operations the SDK does not cover yet.
    pub fn operation(&self, operation: &'static Operation) -> OperationCall<T> {
        OperationCall::new(
            Arc::clone(&self.transport),
            self.authenticator.clone(),
            self.retry,
            self.default_headers.clone(),
            operation,
        )
    }
}

impl<T> Clone for LakehouseClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            authenticator: self.authenticator.clone(),
            default_headers: self.default_headers.clone(),
            retry: self.retry,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LakehouseClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LakehouseClient")
            .field("transport", &self.transport)
            .field("authenticator", &self.authenticator)
            .field("default_headers", &self.default_headers)
            .field("retry", &self.retry)
            .finish()
    }
}
