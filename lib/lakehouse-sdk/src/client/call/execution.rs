use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::sync::Arc;

use backon::Retryable;
use http::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{debug, warn};

use super::OperationCall;
use crate::client::retry::RetryConfig;
use crate::client::{DetailedResponse, LakehouseError, RequestOptions, Transport};

impl<T> OperationCall<T> {
    /// Validates the call and assembles the request the transport will get.
    ///
    /// Authentication is not part of the returned options; it is added when
    /// the call is sent.
    ///
    /// # Errors
    ///
    /// [`LakehouseError::MissingRequiredParameters`] lists every required
    /// parameter that was not supplied. Invalid header names or values are
    /// rejected too.
    pub fn request_options(&self) -> Result<RequestOptions, LakehouseError> {
        let missing = self.missing_parameters();
        if !missing.is_empty() {
            return Err(LakehouseError::MissingRequiredParameters {
                operation: self.operation.name,
                missing,
            });
        }

        let path = self.path.resolve()?;

        let mut headers = HeaderMap::new();
        self.default_headers.apply_to(&mut headers)?;
        if let Some(accept) = self.operation.accept {
            headers.insert(ACCEPT, HeaderValue::from_static(accept));
        }
        if let Some(content_type) = self.operation.content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        self.param_headers.apply_to(&mut headers)?;
        if let Some(overrides) = &self.headers {
            overrides.apply_to(&mut headers)?;
        }

        Ok(RequestOptions {
            operation: self.operation.name,
            method: self.operation.method.into(),
            path,
            query: self.query.clone(),
            headers,
            body: self.body.clone(),
            response_type: self.operation.response_type,
        })
    }

    fn missing_parameters(&self) -> Vec<&'static str> {
        self.operation
            .required
            .iter()
            .copied()
            .filter(|name| !self.is_supplied(name))
            .collect()
    }

    fn is_supplied(&self, name: &str) -> bool {
        self.path.contains(name)
            || self.query.contains(name)
            || self.param_headers.get(name).is_some()
            || self.body.as_ref().is_some_and(|body| body.contains(name))
    }
}

impl<T: Transport> OperationCall<T> {
    async fn exchange(self) -> Result<DetailedResponse, LakehouseError> {
        let mut request = self.request_options()?;
        self.authenticator.authenticate(&mut request.headers)?;

        send(self.transport, request, self.retry).await
    }
}

async fn send<T: Transport>(
    transport: Arc<T>,
    request: RequestOptions,
    retry: Option<RetryConfig>,
) -> Result<DetailedResponse, LakehouseError> {
    let operation = request.operation;
    let attempt = || {
        let transport = Arc::clone(&transport);
        let request = request.clone();
        async move {
            let response_type = request.response_type;
            debug!(operation, method = %request.method, path = %request.path, "sending...");
            let response = transport.send(request).await?;
            debug!(operation, status = %response.status, "...receiving");
            DetailedResponse::from_transport(response, response_type).await
        }
    };

    match retry {
        Some(config) => {
            attempt
                .retry(config.backoff())
                .when(LakehouseError::is_retryable)
                .notify(|error, delay| {
                    warn!(operation, %error, ?delay, "retrying request");
                })
                .await
        }
        None => attempt().await,
    }
}

/// Awaiting a call sends it:
///
/// ```rust,no_run
/// # async fn example() -> Result<(), lakehouse_sdk::LakehouseError> {
/// use lakehouse_sdk::{LakehouseClient, service::GetBucketUsersParams};
///
/// let client = LakehouseClient::builder().build()?;
/// let response = client
///     .get_bucket_users(GetBucketUsersParams {
///         bucket_id: Some("iceberg-bucket".to_string()),
///         ..Default::default()
///     })
///     .await?;
/// println!("{:?}", response.body());
/// # Ok(())
/// # }
/// ```
impl<T: Transport> IntoFuture for OperationCall<T> {
    type Output = Result<DetailedResponse, LakehouseError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.exchange())
    }
}
