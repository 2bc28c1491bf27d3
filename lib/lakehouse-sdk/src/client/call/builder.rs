use serde::Serialize;

use super::OperationCall;
use crate::client::parameters::{FormPart, FormValue};
use crate::client::{CallBody, CallHeaders, LakehouseError};

impl<T> OperationCall<T> {
    /// Sets a path argument. `None` leaves the placeholder unresolved.
    #[must_use]
    pub fn path_param(mut self, name: &str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.path = self.path.add_param(name, value);
        }
        self
    }

    /// Adds a query parameter. `None` is skipped.
    ///
    /// # Errors
    ///
    /// Fails if the value cannot be serialized.
    pub fn query_param<V: Serialize>(
        mut self,
        name: &str,
        value: Option<V>,
    ) -> Result<Self, LakehouseError> {
        if let Some(value) = value {
            self.query = self.query.add_param(name, &value)?;
        }
        Ok(self)
    }

    /// Adds a field to the JSON body. `None` is skipped, so a call without
    /// any field sends no body at all.
    ///
    /// # Errors
    ///
    /// Fails if the value cannot be serialized, or if the body is multipart.
    pub fn body_field<V: Serialize>(
        mut self,
        name: &str,
        value: Option<V>,
    ) -> Result<Self, LakehouseError> {
        if let Some(value) = value {
            self.body = CallBody::add_json_field(self.body.take(), name, &value)?;
        }
        Ok(self)
    }

    /// Adds a `multipart/form-data` part. `None` is skipped.
    ///
    /// # Errors
    ///
    /// Fails if the body already holds JSON fields.
    pub fn form_part(
        mut self,
        name: &str,
        value: Option<impl Into<FormValue>>,
    ) -> Result<Self, LakehouseError> {
        if let Some(value) = value {
            let part = FormPart {
                name: name.to_string(),
                value: value.into(),
            };
            self.body = Some(CallBody::add_form_part(self.body.take(), part)?);
        }
        Ok(self)
    }

    /// Sets a header parameter, such as `AuthInstanceId`. `None` is skipped.
    #[must_use]
    pub fn header_param(mut self, name: &str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.param_headers = self.param_headers.add_header(name, value);
        }
        self
    }

    /// Merges caller headers; they override every computed header.
    #[must_use]
    pub fn with_headers_option(mut self, headers: Option<CallHeaders>) -> Self {
        self.headers = match (self.headers.take(), headers) {
            (None, None) => None,
            (Some(current), None) => Some(current),
            (None, Some(headers)) => Some(headers),
            (Some(current), Some(headers)) => Some(current.merge(headers)),
        };
        self
    }

    /// Adds a single caller header.
    #[must_use]
    pub fn with_header(self, name: impl Into<String>, value: impl ToString) -> Self {
        self.with_headers_option(Some(CallHeaders::new().add_header(name, value)))
    }
}
