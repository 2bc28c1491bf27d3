use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures::{Stream, TryStreamExt};
use http::header::CONTENT_TYPE;
use http::{HeaderMap, StatusCode};
use reqwest::multipart::{Form, Part};
use tracing::debug;
use url::Url;

use super::operation::ResponseType;
use super::parameters::{CallBody, FormPart, FormValue};
use super::{LakehouseError, RequestOptions};

/// A stream of response body chunks.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, LakehouseError>> + Send>>;

/// Sends assembled requests to the service.
///
/// The client only talks to the network through this trait, which makes it
/// possible to plug a custom HTTP stack or a test double.
pub trait Transport: Debug + Send + Sync + 'static {
    /// Performs one HTTP exchange.
    ///
    /// Non-success statuses are not errors at this level; they are mapped by
    /// the response handling.
    fn send(
        &self,
        request: RequestOptions,
    ) -> impl Future<Output = Result<TransportResponse, LakehouseError>> + Send;
}

/// Raw response returned by a [`Transport`].
#[derive(Debug)]
pub struct TransportResponse {
    /// Response status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: TransportBody,
}

/// Body of a [`TransportResponse`].
#[derive(derive_more::Debug)]
pub enum TransportBody {
    /// The whole body, already read.
    Buffered(Bytes),
    /// The body as a stream of chunks.
    Stream(#[debug(skip)] ByteStream),
}

impl TransportBody {
    /// Reads the whole body.
    ///
    /// # Errors
    ///
    /// Fails if a stream chunk fails.
    pub async fn into_bytes(self) -> Result<Bytes, LakehouseError> {
        match self {
            Self::Buffered(bytes) => Ok(bytes),
            Self::Stream(stream) => {
                let chunks = stream.try_collect::<Vec<_>>().await?;
                Ok(Bytes::from(chunks.concat()))
            }
        }
    }

    /// Turns the body into a stream of chunks.
    pub fn into_stream(self) -> ByteStream {
        match self {
            Self::Buffered(bytes) => Box::pin(futures::stream::once(async move {
                Ok::<_, LakehouseError>(bytes)
            })),
            Self::Stream(stream) => stream,
        }
    }
}

/// The default [`Transport`], backed by [`reqwest`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    service_url: Url,
}

impl ReqwestTransport {
    /// Creates a transport sending requests relative to `service_url`.
    pub fn new(client: reqwest::Client, service_url: Url) -> Self {
        Self {
            client,
            service_url,
        }
    }

    /// Returns the service URL.
    pub fn service_url(&self) -> &Url {
        &self.service_url
    }

    fn build_url(&self, request: &RequestOptions) -> Result<Url, LakehouseError> {
        let base = self.service_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}{}", request.path))?;
        let query = request.query.to_query_string()?;
        if !query.is_empty() {
            url.set_query(Some(&query));
        }
        Ok(url)
    }

    fn build_request(&self, request: RequestOptions) -> Result<reqwest::Request, LakehouseError> {
        let url = self.build_url(&request)?;
        let RequestOptions {
            method,
            mut headers,
            body,
            ..
        } = request;

        let builder = self.client.request(method, url);
        let builder = match body {
            None => builder.headers(headers),
            Some(CallBody::Json(fields)) => builder.headers(headers).json(&fields),
            Some(CallBody::Multipart(parts)) => {
                // reqwest sets the content type along with the boundary
                headers.remove(CONTENT_TYPE);
                builder.headers(headers).multipart(build_form(parts)?)
            }
        };
        let request = builder.build()?;
        Ok(request)
    }
}

fn build_form(parts: Vec<FormPart>) -> Result<Form, LakehouseError> {
    let mut form = Form::new();
    for FormPart { name, value } in parts {
        form = match value {
            FormValue::Text(text) => form.text(name, text),
            FormValue::File(file) => {
                let mut part = Part::bytes(file.data.to_vec());
                if let Some(filename) = file.filename {
                    part = part.file_name(filename);
                }
                let content_type = file
                    .content_type
                    .unwrap_or_else(|| mime::APPLICATION_OCTET_STREAM.to_string());
                form.part(name, part.mime_str(&content_type)?)
            }
        };
    }
    Ok(form)
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: RequestOptions) -> Result<TransportResponse, LakehouseError> {
        let response_type = request.response_type;
        let request = self.build_request(request)?;
        debug!(method = %request.method(), url = %request.url(), "sending request");

        let response = self.client.execute(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = if response_type == ResponseType::Stream && status.is_success() {
            TransportBody::Stream(Box::pin(
                response.bytes_stream().map_err(LakehouseError::from),
            ))
        } else {
            TransportBody::Buffered(response.bytes().await?)
        };

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use http::header::HeaderValue;

    use super::*;

    /// Records every request and answers with queued responses, `200 {}` once
    /// the queue is empty.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingTransport {
        requests: Mutex<Vec<RequestOptions>>,
        responses: Mutex<VecDeque<(StatusCode, &'static str)>>,
    }

    impl RecordingTransport {
        pub(crate) fn with_responses(
            responses: impl IntoIterator<Item = (StatusCode, &'static str)>,
        ) -> Self {
            Self {
                requests: Mutex::default(),
                responses: Mutex::new(responses.into_iter().collect()),
            }
        }

        pub(crate) fn requests(&self) -> Vec<RequestOptions> {
            self.requests
                .lock()
                .map(|requests| requests.clone())
                .unwrap_or_default()
        }

        pub(crate) fn last_request(&self) -> Option<RequestOptions> {
            self.requests().pop()
        }
    }

    impl Transport for RecordingTransport {
        async fn send(&self, request: RequestOptions) -> Result<TransportResponse, LakehouseError> {
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(request);
            }
            let (status, body) = self
                .responses
                .lock()
                .ok()
                .and_then(|mut responses| responses.pop_front())
                .unwrap_or((StatusCode::OK, "{}"));

            let mut headers = HeaderMap::new();
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            Ok(TransportResponse {
                status,
                headers,
                body: TransportBody::Buffered(Bytes::from_static(body.as_bytes())),
            })
        }
    }
}
