use http::Method;

pub(crate) const APPLICATION_JSON: &str = "application/json";
pub(crate) const MULTIPART_FORM_DATA: &str = "multipart/form-data";
pub(crate) const MERGE_PATCH_JSON: &str = "application/merge-patch+json";

/// HTTP method of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HttpMethod {
    /// `GET`
    #[display("GET")]
    Get,
    /// `POST`
    #[display("POST")]
    Post,
    /// `PUT`
    #[display("PUT")]
    Put,
    /// `PATCH`
    #[display("PATCH")]
    Patch,
    /// `DELETE`
    #[display("DELETE")]
    Delete,
}

impl From<HttpMethod> for Method {
    fn from(value: HttpMethod) -> Self {
        match value {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

/// How the transport should hand the response body over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseType {
    /// Buffer the body and parse it as JSON.
    #[default]
    Json,
    /// Hand the body over as a byte stream.
    Stream,
}

/// Static description of a remote operation.
///
/// One descriptor exists per SDK method. Required parameters are listed by
/// their wire name, whatever request part they end up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Operation name, used in errors and logs.
    pub name: &'static str,
    /// HTTP method.
    pub method: HttpMethod,
    /// Path template, relative to the service URL.
    pub path: &'static str,
    /// Wire names of the parameters that must be present.
    pub required: &'static [&'static str],
    /// Default `Accept` header.
    pub accept: Option<&'static str>,
    /// Default `Content-Type` header.
    pub content_type: Option<&'static str>,
    /// Expected response type.
    pub response_type: ResponseType,
}

impl Operation {
    const fn new(name: &'static str, method: HttpMethod, path: &'static str) -> Self {
        Self {
            name,
            method,
            path,
            required: &[],
            accept: Some(APPLICATION_JSON),
            content_type: None,
            response_type: ResponseType::Json,
        }
    }

    pub(crate) const fn get(name: &'static str, path: &'static str) -> Self {
        Self::new(name, HttpMethod::Get, path)
    }

    pub(crate) const fn post(name: &'static str, path: &'static str) -> Self {
        Self::new(name, HttpMethod::Post, path)
    }

    pub(crate) const fn put(name: &'static str, path: &'static str) -> Self {
        Self::new(name, HttpMethod::Put, path)
    }

    pub(crate) const fn patch(name: &'static str, path: &'static str) -> Self {
        Self::new(name, HttpMethod::Patch, path)
    }

    pub(crate) const fn delete(name: &'static str, path: &'static str) -> Self {
        Self::new(name, HttpMethod::Delete, path)
    }

    pub(crate) const fn required(mut self, required: &'static [&'static str]) -> Self {
        self.required = required;
        self
    }

    pub(crate) const fn json_body(mut self) -> Self {
        self.content_type = Some(APPLICATION_JSON);
        self
    }

    pub(crate) const fn merge_patch_body(mut self) -> Self {
        self.content_type = Some(MERGE_PATCH_JSON);
        self
    }

    pub(crate) const fn multipart_body(mut self) -> Self {
        self.content_type = Some(MULTIPART_FORM_DATA);
        self
    }

    pub(crate) const fn stream(mut self) -> Self {
        self.response_type = ResponseType::Stream;
        self
    }
}
