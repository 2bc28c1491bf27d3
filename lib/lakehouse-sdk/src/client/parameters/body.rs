use std::fmt;

use bytes::Bytes;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::client::LakehouseError;

/// Body of a request: a JSON object or `multipart/form-data` parts.
#[derive(Debug, Clone, PartialEq)]
pub enum CallBody {
    /// JSON object whose keys are the wire (snake_case) field names.
    Json(Map<String, Value>),
    /// Multipart form parts, in insertion order.
    Multipart(Vec<FormPart>),
}

impl CallBody {
    /// Returns the JSON object, if this is a JSON body.
    pub fn as_json(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Json(fields) => Some(fields),
            Self::Multipart(_) => None,
        }
    }

    /// Returns the form parts, if this is a multipart body.
    pub fn as_multipart(&self) -> Option<&[FormPart]> {
        match self {
            Self::Json(_) => None,
            Self::Multipart(parts) => Some(parts),
        }
    }

    /// Returns `true` if a field or part with this name was supplied.
    pub fn contains(&self, name: &str) -> bool {
        match self {
            Self::Json(fields) => fields.contains_key(name),
            Self::Multipart(parts) => parts.iter().any(|part| part.name == name),
        }
    }

    /// Adds a JSON field, turning a missing body into an empty JSON object.
    ///
    /// `null` values are skipped.
    pub(in crate::client) fn add_json_field<T: Serialize>(
        body: Option<Self>,
        name: &str,
        value: &T,
    ) -> Result<Option<Self>, LakehouseError> {
        let value = serde_json::to_value(value)?;
        let mut fields = match body {
            Some(Self::Json(fields)) => fields,
            Some(Self::Multipart(parts)) => {
                if value.is_null() {
                    return Ok(Some(Self::Multipart(parts)));
                }
                return Err(LakehouseError::SerializationError {
                    message: format!("cannot add JSON field '{name}' to a multipart body"),
                });
            }
            None => Map::new(),
        };
        if !value.is_null() {
            fields.insert(name.to_string(), value);
        }
        Ok((!fields.is_empty()).then_some(Self::Json(fields)))
    }

    /// Adds a multipart part, turning a missing body into an empty form.
    pub(in crate::client) fn add_form_part(
        body: Option<Self>,
        part: FormPart,
    ) -> Result<Self, LakehouseError> {
        match body {
            None => Ok(Self::Multipart(vec![part])),
            Some(Self::Multipart(mut parts)) => {
                parts.push(part);
                Ok(Self::Multipart(parts))
            }
            Some(Self::Json(_)) => Err(LakehouseError::SerializationError {
                message: format!("cannot add form part '{}' to a JSON body", part.name),
            }),
        }
    }
}

/// One part of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq)]
pub struct FormPart {
    /// The form field name, as sent on the wire.
    pub name: String,
    /// The part content.
    pub value: FormValue,
}

/// Content of a multipart part.
#[derive(Debug, Clone, PartialEq, derive_more::From)]
pub enum FormValue {
    /// A plain text field.
    Text(String),
    /// A file upload.
    File(FileWithMetadata),
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl FormValue {
    /// Returns the text content of a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::File(_) => None,
        }
    }
}

/// File content sent as a multipart part.
///
/// ```rust
/// use lakehouse_sdk::FileWithMetadata;
///
/// let file = FileWithMetadata::new("id,name\n1,alice\n")
///     .with_filename("users.csv")
///     .with_content_type("text/csv");
/// assert_eq!(file.filename.as_deref(), Some("users.csv"));
/// ```
#[derive(Clone, PartialEq)]
pub struct FileWithMetadata {
    /// Raw file content.
    pub data: Bytes,
    /// File name announced in the part's `Content-Disposition`.
    pub filename: Option<String>,
    /// Part content type, `application/octet-stream` when absent.
    pub content_type: Option<String>,
}

impl FileWithMetadata {
    /// Creates a file part from its content.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            filename: None,
            content_type: None,
        }
    }

    /// Sets the file name.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Sets the part content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

impl fmt::Debug for FileWithMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileWithMetadata")
            .field("data", &format_args!("{} bytes", self.data.len()))
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .finish()
    }
}
