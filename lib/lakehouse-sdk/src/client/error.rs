use super::auth::AuthenticationError;

/// Errors that can occur when using the [`LakehouseClient`](crate::LakehouseClient).
///
/// Covers local validation failures (raised before any network I/O), request
/// construction failures, transport failures and service error responses.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum LakehouseError {
    /// HTTP client error from the underlying reqwest library.
    ///
    /// Occurs when network requests fail, timeouts occur, or connection issues arise.
    ReqwestError(reqwest::Error),

    /// URL parsing error when constructing request URLs.
    UrlError(url::ParseError),

    /// HTTP protocol error from the http crate.
    HttpError(http::Error),

    /// Invalid HTTP header name.
    InvalidHeaderName(http::header::InvalidHeaderName),

    /// Invalid HTTP header value.
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// JSON serialization/deserialization error.
    JsonValueError(serde_json::Error),

    /// Query parameter serialization error.
    QuerySerializationError(serde_urlencoded::ser::Error),

    /// The configured authentication cannot produce a valid header.
    #[display("Authentication error: {_0}")]
    Authentication(AuthenticationError),

    /// One or more required parameters were not supplied.
    ///
    /// Raised before the request reaches the transport.
    #[display("Missing required parameters for {operation}: {}", missing.join(", "))]
    #[from(skip)]
    MissingRequiredParameters {
        /// The operation that was called.
        operation: &'static str,
        /// Wire names of the missing parameters.
        missing: Vec<&'static str>,
    },

    /// Path template contains unresolved parameters.
    #[display("Path '{path}' is missing required arguments: {missings:?}")]
    #[from(skip)]
    PathUnresolved {
        /// The path template that couldn't be resolved.
        path: String,
        /// List of missing parameter names.
        missings: Vec<String>,
    },

    /// Query parameter value type is not supported.
    #[display("Unsupported query parameter value, objects cannot be sent in a query: {value}")]
    #[from(skip)]
    UnsupportedQueryParameterValue {
        /// The unsupported value that was provided.
        value: serde_json::Value,
    },

    /// The service answered with a non-success status code.
    #[display("Service error ({status_code}): {message}")]
    #[from(skip)]
    Service {
        /// The HTTP status code received.
        status_code: u16,
        /// Message extracted from the error body, or the status reason.
        message: String,
        /// The (possibly truncated) response body.
        body: String,
    },

    /// JSON response deserialization failure.
    #[display("Failed to deserialize JSON at '{path}': {error}\n{body}")]
    #[from(skip)]
    JsonError {
        /// Path inside the document where the error occurred.
        path: String,
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The response body that failed to parse.
        body: String,
    },

    /// The response body cannot be read as JSON (stream, text or empty body).
    #[display("Unsupported {kind} response body for JSON")]
    #[from(skip)]
    UnsupportedJsonOutput {
        /// Kind of the body that was received.
        kind: &'static str,
    },

    /// The response body is not a byte stream.
    #[display("Unsupported {kind} response body for a stream")]
    #[from(skip)]
    UnsupportedStreamOutput {
        /// Kind of the body that was received.
        kind: &'static str,
    },

    /// Request data cannot be converted to the required format.
    #[display("Serialization error: {message}")]
    #[from(skip)]
    SerializationError {
        /// Description of the serialization failure.
        message: String,
    },

    /// Invalid service URL configuration.
    #[display("Invalid service URL: {error}")]
    #[from(skip)]
    InvalidServiceUrl {
        /// Description of why the URL is invalid.
        error: String,
    },

    /// Invalid client configuration, usually coming from the environment.
    #[display("Invalid configuration: {message}")]
    #[from(skip)]
    InvalidConfiguration {
        /// Description of the configuration problem.
        message: String,
    },
}

impl LakehouseError {
    /// Returns `true` when retrying the same request may succeed.
    ///
    /// Connection failures, timeouts, `429 Too Many Requests` and `5xx`
    /// responses (except `501 Not Implemented`) are retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ReqwestError(error) => error.is_connect() || error.is_timeout(),
            Self::Service { status_code, .. } => {
                *status_code == 429 || ((500..600).contains(status_code) && *status_code != 501)
            }
            _ => false,
        }
    }

    /// Returns the HTTP status code of a service error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Service { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}
