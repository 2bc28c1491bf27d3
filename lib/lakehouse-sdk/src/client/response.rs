use bytes::Bytes;
use headers::{ContentType, HeaderMapExt};
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::operation::ResponseType;
use super::transport::{ByteStream, TransportBody, TransportResponse};
use super::LakehouseError;

const BODY_MAX_LENGTH: usize = 1024;

/// Successful response of an operation: status, headers and decoded body.
#[derive(Debug)]
pub struct DetailedResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: ResponseBody,
}

/// Decoded body of a [`DetailedResponse`].
#[derive(derive_more::Debug)]
pub enum ResponseBody {
    /// No content.
    Empty,
    /// A JSON document.
    Json(Value),
    /// A non-JSON textual body.
    Text(String),
    /// A streamed body, for operations returning raw data.
    Stream(#[debug(skip)] ByteStream),
}

impl ResponseBody {
    /// Short name of the body kind: `empty`, `JSON`, `text` or `stream`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Json(_) => "JSON",
            Self::Text(_) => "text",
            Self::Stream(_) => "stream",
        }
    }

    fn from_bytes(headers: &HeaderMap, bytes: &Bytes) -> Result<Self, LakehouseError> {
        if bytes.is_empty() {
            return Ok(Self::Empty);
        }
        match headers.typed_get::<ContentType>().map(mime::Mime::from) {
            Some(content_type) if is_json(&content_type) => {
                let value = serde_json::from_slice(bytes)?;
                Ok(Self::Json(value))
            }
            Some(_) => Ok(Self::Text(String::from_utf8_lossy(bytes).into_owned())),
            None => Ok(serde_json::from_slice(bytes).map_or_else(
                |_| Self::Text(String::from_utf8_lossy(bytes).into_owned()),
                Self::Json,
            )),
        }
    }
}

fn is_json(content_type: &mime::Mime) -> bool {
    content_type.subtype() == mime::JSON || content_type.suffix() == Some(mime::JSON)
}

impl DetailedResponse {
    /// Builds a response from what the transport returned.
    ///
    /// Non-success statuses become [`LakehouseError::Service`].
    pub(crate) async fn from_transport(
        response: TransportResponse,
        response_type: ResponseType,
    ) -> Result<Self, LakehouseError> {
        let TransportResponse {
            status,
            headers,
            body,
        } = response;

        if !status.is_success() {
            let bytes = body.into_bytes().await?;
            let error = service_error(status, &bytes);
            warn!(%status, %error, "service returned an error");
            return Err(error);
        }

        let body = match (response_type, body) {
            (ResponseType::Stream, body) => ResponseBody::Stream(body.into_stream()),
            (ResponseType::Json, TransportBody::Buffered(bytes)) => {
                ResponseBody::from_bytes(&headers, &bytes)?
            }
            (ResponseType::Json, body) => {
                let bytes = body.into_bytes().await?;
                ResponseBody::from_bytes(&headers, &bytes)?
            }
        };
        debug!(%status, kind = body.kind(), "response received");

        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Decoded body.
    pub fn body(&self) -> &ResponseBody {
        &self.body
    }

    /// Consumes the response, returning its body.
    pub fn into_body(self) -> ResponseBody {
        self.body
    }

    /// Deserializes the JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Fails on non-JSON bodies, or if the document does not match `T`;
    /// the error then carries the path of the offending value.
    pub fn as_json<T: DeserializeOwned>(&self) -> Result<T, LakehouseError> {
        let ResponseBody::Json(value) = &self.body else {
            return Err(LakehouseError::UnsupportedJsonOutput {
                kind: self.body.kind(),
            });
        };
        serde_path_to_error::deserialize(value).map_err(|err| {
            let path = err.path().to_string();
            LakehouseError::JsonError {
                path,
                error: err.into_inner(),
                body: truncate(&value.to_string()),
            }
        })
    }

    /// Returns the body as a byte stream.
    ///
    /// # Errors
    ///
    /// Fails if the operation does not stream its response.
    pub fn into_stream(self) -> Result<ByteStream, LakehouseError> {
        match self.body {
            ResponseBody::Stream(stream) => Ok(stream),
            body => Err(LakehouseError::UnsupportedStreamOutput { kind: body.kind() }),
        }
    }

    /// Reads the whole body as raw bytes, whatever its kind.
    ///
    /// # Errors
    ///
    /// Fails if a stream chunk fails.
    pub async fn bytes(self) -> Result<Bytes, LakehouseError> {
        match self.body {
            ResponseBody::Empty => Ok(Bytes::new()),
            ResponseBody::Json(value) => Ok(Bytes::from(serde_json::to_vec(&value)?)),
            ResponseBody::Text(text) => Ok(Bytes::from(text)),
            ResponseBody::Stream(stream) => TransportBody::Stream(stream).into_bytes().await,
        }
    }
}

fn service_error(status: StatusCode, bytes: &[u8]) -> LakehouseError {
    let message = serde_json::from_slice::<Value>(bytes)
        .ok()
        .and_then(|value| error_message(&value))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

    LakehouseError::Service {
        status_code: status.as_u16(),
        message,
        body: truncate(&String::from_utf8_lossy(bytes)),
    }
}

fn error_message(value: &Value) -> Option<String> {
    ["error", "message", "errorMessage", "msg"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .or_else(|| value.pointer("/error/message").and_then(Value::as_str))
        .or_else(|| value.pointer("/errors/0/message").and_then(Value::as_str))
        .map(str::to_string)
}

fn truncate(text: &str) -> String {
    if text.len() <= BODY_MAX_LENGTH {
        return text.to_string();
    }
    let mut end = BODY_MAX_LENGTH;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", text.get(..end).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;
    use http::header::{CONTENT_TYPE, HeaderValue};
    use rstest::rstest;
    use serde::Deserialize;

    use super::*;

    fn buffered(
        status: StatusCode,
        content_type: Option<&'static str>,
        body: &'static str,
    ) -> TransportResponse {
        let mut headers = HeaderMap::new();
        if let Some(content_type) = content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        TransportResponse {
            status,
            headers,
            body: TransportBody::Buffered(Bytes::from_static(body.as_bytes())),
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Bucket {
        bucket_id: String,
        size: u32,
    }

    #[tokio::test]
    async fn test_json_response() {
        let response = DetailedResponse::from_transport(
            buffered(StatusCode::OK, Some("application/json"), r#"{"bucket_id":"b1","size":3}"#),
            ResponseType::Json,
        )
        .await
        .expect("a successful response");

        assert_eq!(response.status(), StatusCode::OK);
        let bucket = response.as_json::<Bucket>().expect("a bucket");
        assert_eq!(
            bucket,
            Bucket {
                bucket_id: "b1".to_string(),
                size: 3
            }
        );
    }

    #[tokio::test]
    async fn test_json_error_has_path() {
        let response = DetailedResponse::from_transport(
            buffered(
                StatusCode::OK,
                Some("application/json"),
                r#"{"bucket_id":"b1","size":"big"}"#,
            ),
            ResponseType::Json,
        )
        .await
        .expect("a successful response");

        let error = response.as_json::<Bucket>().expect_err("size is not a number");

        assert!(matches!(error, LakehouseError::JsonError { ref path, .. } if path == "size"));
    }

    #[rstest]
    #[case(Some("text/plain"), "done", "text")]
    #[case(None, "done", "text")]
    #[case(None, r#"{"a":1}"#, "JSON")]
    #[case(Some("application/problem+json"), r#"{"a":1}"#, "JSON")]
    #[case(Some("application/json"), "", "empty")]
    #[tokio::test]
    async fn test_body_kind(
        #[case] content_type: Option<&'static str>,
        #[case] body: &'static str,
        #[case] expected: &str,
    ) {
        let response = DetailedResponse::from_transport(
            buffered(StatusCode::OK, content_type, body),
            ResponseType::Json,
        )
        .await
        .expect("a successful response");

        assert_eq!(response.body().kind(), expected);
    }

    #[rstest]
    #[case(r#"{"error":"bucket not found"}"#, "bucket not found")]
    #[case(r#"{"message":"bucket not found"}"#, "bucket not found")]
    #[case(r#"{"errorMessage":"bucket not found"}"#, "bucket not found")]
    #[case(r#"{"error":{"message":"bucket not found"}}"#, "bucket not found")]
    #[case(r#"{"errors":[{"code":"x","message":"bucket not found"}]}"#, "bucket not found")]
    #[case("<html>oops</html>", "Not Found")]
    #[tokio::test]
    async fn test_service_error_message(#[case] body: &'static str, #[case] expected: &str) {
        let error = DetailedResponse::from_transport(
            buffered(StatusCode::NOT_FOUND, Some("application/json"), body),
            ResponseType::Json,
        )
        .await
        .expect_err("a service error");

        assert_eq!(error.status_code(), Some(404));
        let LakehouseError::Service {
            message,
            body: error_body,
            ..
        } = error
        else {
            panic!("expected a service error");
        };
        assert_eq!(message, expected);
        assert_eq!(error_body, body);
    }

    #[tokio::test]
    async fn test_error_on_stream_operation_is_buffered() {
        let error = DetailedResponse::from_transport(
            buffered(StatusCode::SERVICE_UNAVAILABLE, None, r#"{"message":"busy"}"#),
            ResponseType::Stream,
        )
        .await
        .expect_err("a service error");

        assert_eq!(error.status_code(), Some(503));
        assert!(error.is_retryable());
    }

    #[tokio::test]
    async fn test_stream_response() {
        let response = DetailedResponse::from_transport(
            buffered(StatusCode::OK, Some("text/csv"), "a,b\n1,2\n"),
            ResponseType::Stream,
        )
        .await
        .expect("a successful response");

        assert!(response.as_json::<Value>().is_err());
        let mut stream = response.into_stream().expect("a stream");
        let chunk = stream.next().await.expect("one chunk").expect("a valid chunk");
        assert_eq!(chunk, Bytes::from_static(b"a,b\n1,2\n"));
    }

    #[tokio::test]
    async fn test_into_body() {
        let response = DetailedResponse::from_transport(
            buffered(StatusCode::OK, Some("application/json"), r#"{"engines":[]}"#),
            ResponseType::Json,
        )
        .await
        .expect("a successful response");

        let ResponseBody::Json(value) = response.into_body() else {
            panic!("expected a JSON body");
        };
        assert_eq!(value, serde_json::json!({"engines": []}));
    }

    #[tokio::test]
    async fn test_bytes_of_json_body() {
        let response = DetailedResponse::from_transport(
            buffered(StatusCode::CREATED, Some("application/json"), r#"{"a":1}"#),
            ResponseType::Json,
        )
        .await
        .expect("a successful response");

        let bytes = response.bytes().await.expect("bytes");

        assert_eq!(bytes, Bytes::from_static(br#"{"a":1}"#));
    }

    #[test]
    fn test_truncate_long_body() {
        let text = "é".repeat(BODY_MAX_LENGTH);

        let truncated = truncate(&text);

        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= BODY_MAX_LENGTH + 3);
    }
}
