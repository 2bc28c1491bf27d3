//! Request parameter types for building operation calls.
//!
//! - [`CallPath`] - Path template and arguments (e.g., `/access/buckets/{bucket_id}`)
//! - [`CallQuery`] - Query string parameters
//! - [`CallHeaders`] - HTTP headers supplied by the caller
//! - [`CallBody`] - JSON or multipart request body

mod path;
pub use self::path::CallPath;

mod query;
pub use self::query::CallQuery;

mod headers;
pub use self::headers::CallHeaders;

mod body;
pub use self::body::{CallBody, FileWithMetadata, FormPart, FormValue};
