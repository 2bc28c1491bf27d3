use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use url::Url;

use super::auth::Authenticator;
use super::{
    Authentication, CallHeaders, LakehouseClient, LakehouseError, ReqwestTransport, RetryConfig,
    Transport,
};

/// Service URL used when none is configured.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8080/lakehouse/api/v1";

/// Prefix of the environment variables read by [`LakehouseClientBuilder::from_env`].
pub const DEFAULT_ENV_PREFIX: &str = "LAKEHOUSE";

/// Builder for [`LakehouseClient`].
///
/// # Default Configuration
///
/// - **Service URL**: `http://localhost:8080/lakehouse/api/v1`
/// - **Authentication**: none
/// - **Retries**: disabled
/// - **Timeouts**: reqwest defaults
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use lakehouse_sdk::{Authentication, LakehouseClient, RetryConfig};
///
/// # fn example() -> Result<(), lakehouse_sdk::LakehouseError> {
/// let client = LakehouseClient::builder()
///     .with_service_url("https://lakehouse.example.com/lakehouse/api/v1")
///     .with_authentication(Authentication::Bearer("my-token".into()))
///     .with_timeout(Duration::from_secs(30))
///     .with_retries(RetryConfig::default())
///     .build()?;
/// assert!(client.retry_config().is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LakehouseClientBuilder {
    service_url: String,
    authenticator: Authenticator,
    default_headers: CallHeaders,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    disable_ssl_verification: bool,
    retry: Option<RetryConfig>,
}

impl Default for LakehouseClientBuilder {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            authenticator: Authenticator::default(),
            default_headers: CallHeaders::default(),
            timeout: None,
            connect_timeout: None,
            disable_ssl_verification: false,
            retry: None,
        }
    }
}

impl LakehouseClientBuilder {
    /// Builds a client using the reqwest transport.
    ///
    /// # Errors
    ///
    /// Fails if the service URL is not an absolute `http(s)` URL, or if the
    /// HTTP client cannot be created.
    pub fn build(self) -> Result<LakehouseClient<ReqwestTransport>, LakehouseError> {
        let service_url = parse_service_url(&self.service_url)?;

        let mut client = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            client = client.timeout(timeout);
        }
        if let Some(connect_timeout) = self.connect_timeout {
            client = client.connect_timeout(connect_timeout);
        }
        if self.disable_ssl_verification {
            client = client.danger_accept_invalid_certs(true);
        }
        let client = client.build()?;

        debug!(%service_url, "lakehouse client created");
        let transport = ReqwestTransport::new(client, service_url);
        Ok(self.build_with_transport(transport))
    }

    /// Builds a client sending requests through a custom transport.
    ///
    /// The service URL and the network settings (timeouts, SSL) are left to
    /// the transport.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> LakehouseClient<T> {
        LakehouseClient {
            transport: Arc::new(transport),
            authenticator: self.authenticator,
            default_headers: self.default_headers,
            retry: self.retry,
        }
    }

    /// Sets the service URL, e.g. `https://host/lakehouse/api/v1`.
    ///
    /// The URL is validated by [`build`](Self::build).
    pub fn with_service_url(mut self, service_url: impl Into<String>) -> Self {
        self.service_url = service_url.into();
        self
    }

    /// Sets the authentication applied to every request.
    pub fn with_authentication(mut self, authentication: Authentication) -> Self {
        self.authenticator.credentials = Some(authentication);
        self
    }

    /// Sets the `AuthInstanceId` sent with every request.
    ///
    /// The `auth_instance_id` parameter of a call takes precedence.
    pub fn with_auth_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.authenticator.instance_id = Some(instance_id.into());
        self
    }

    /// Adds a header sent with every request.
    ///
    /// Operation defaults and per-call headers take precedence.
    pub fn with_default_header(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.default_headers = self.default_headers.add_header(name, value);
        self
    }

    /// Adds headers sent with every request.
    pub fn with_default_headers(mut self, headers: CallHeaders) -> Self {
        self.default_headers = self.default_headers.merge(headers);
        self
    }

    /// Sets the total timeout of a request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }

    /// Accepts invalid TLS certificates. Only meant for test environments.
    pub fn with_disable_ssl_verification(mut self, disable: bool) -> Self {
        self.disable_ssl_verification = disable;
        self
    }

    /// Enables automatic retries.
    pub fn with_retries(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Reads the configuration from `{prefix}_*` environment variables.
    ///
    /// | Variable | Meaning |
    /// |----------|---------|
    /// | `{prefix}_URL` | service URL |
    /// | `{prefix}_AUTH_TYPE` | `bearer`, `basic`, `apikey` or `noauth` |
    /// | `{prefix}_BEARER_TOKEN` | bearer token |
    /// | `{prefix}_USERNAME`, `{prefix}_PASSWORD` | basic credentials |
    /// | `{prefix}_APIKEY`, `{prefix}_APIKEY_HEADER` | API key and its header (`X-API-Key`) |
    /// | `{prefix}_AUTH_INSTANCE_ID` | `AuthInstanceId` sent with every request |
    /// | `{prefix}_DISABLE_SSL` | accept invalid certificates |
    /// | `{prefix}_ENABLE_RETRIES` | enable retries |
    /// | `{prefix}_MAX_RETRIES` | maximum number of retries |
    /// | `{prefix}_RETRY_INTERVAL` | maximum delay between retries, in seconds |
    ///
    /// When `{prefix}_AUTH_TYPE` is unset, a bearer token is used if present.
    ///
    /// # Errors
    ///
    /// Fails on unknown authentication types, missing credentials, or values
    /// that cannot be parsed.
    pub fn from_env(prefix: &str) -> Result<Self, LakehouseError> {
        Self::from_vars(prefix, |name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables from `lookup`.
    ///
    /// # Errors
    ///
    /// See [`from_env`](Self::from_env).
    pub fn from_vars(
        prefix: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, LakehouseError> {
        let var = |suffix: &str| {
            lookup(&format!("{prefix}_{suffix}")).filter(|value| !value.trim().is_empty())
        };

        let mut builder = Self::default();
        if let Some(url) = var("URL") {
            builder = builder.with_service_url(url);
        }

        builder.authenticator = Authenticator::from_vars(prefix, &var).map_err(|err| {
            LakehouseError::InvalidConfiguration {
                message: err.to_string(),
            }
        })?;

        if let Some(value) = var("DISABLE_SSL") {
            builder.disable_ssl_verification = parse_bool(prefix, "DISABLE_SSL", &value)?;
        }

        let enable_retries = var("ENABLE_RETRIES")
            .map(|value| parse_bool(prefix, "ENABLE_RETRIES", &value))
            .transpose()?
            .unwrap_or(false);
        if enable_retries {
            let mut retry = RetryConfig::default();
            if let Some(value) = var("MAX_RETRIES") {
                retry.max_retries = parse_number(prefix, "MAX_RETRIES", &value)?;
            }
            if let Some(value) = var("RETRY_INTERVAL") {
                let seconds = parse_number(prefix, "RETRY_INTERVAL", &value)?;
                retry.max_retry_interval = Duration::from_secs(seconds);
            }
            builder.retry = Some(retry);
        }

        Ok(builder)
    }
}

fn parse_service_url(service_url: &str) -> Result<Url, LakehouseError> {
    let url = Url::parse(service_url).map_err(|err| LakehouseError::InvalidServiceUrl {
        error: format!("'{service_url}': {err}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(LakehouseError::InvalidServiceUrl {
            error: format!("'{service_url}': unsupported scheme '{}'", url.scheme()),
        });
    }
    Ok(url)
}

fn parse_bool(prefix: &str, suffix: &str, value: &str) -> Result<bool, LakehouseError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(LakehouseError::InvalidConfiguration {
            message: format!("{prefix}_{suffix} must be a boolean, got '{value}'"),
        }),
    }
}

fn parse_number<N: std::str::FromStr>(
    prefix: &str,
    suffix: &str,
    value: &str,
) -> Result<N, LakehouseError> {
    value
        .trim()
        .parse()
        .map_err(|_| LakehouseError::InvalidConfiguration {
            message: format!("{prefix}_{suffix} must be a number, got '{value}'"),
        })
}
