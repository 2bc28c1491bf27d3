//! # Lakehouse SDK
//!
//! Client SDK for the lakehouse REST service.
//!
//! The SDK exposes one async method per service operation on
//! [`LakehouseClient`]: buckets, databases, engines, catalogs, schemas, tables,
//! saved queries, SQL statements and access control. Each method takes a
//! parameter struct from the [`service`] module and returns a
//! [`DetailedResponse`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lakehouse_sdk::{Authentication, LakehouseClient};
//! use lakehouse_sdk::service::GetSchemasParams;
//!
//! # async fn example() -> Result<(), lakehouse_sdk::LakehouseError> {
//! let client = LakehouseClient::builder()
//!     .with_service_url("https://lakehouse.example.com/lakehouse/api/v1")
//!     .with_authentication(Authentication::Bearer("my-token".into()))
//!     .build()?;
//!
//! let response = client
//!     .get_schemas(GetSchemasParams {
//!         engine_id: Some("presto-01".to_string()),
//!         catalog_name: Some("iceberg_data".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! let schemas: serde_json::Value = response.as_json()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Required parameters
//!
//! Every parameter is an `Option` so that a call can be assembled freely, but
//! each operation declares the parameters the service requires. A call missing
//! any of them fails with [`LakehouseError::MissingRequiredParameters`] and
//! nothing is sent.
//!
//! ## Configuration
//!
//! [`LakehouseClient::from_env`] reads the service URL, authentication and
//! retry settings from `LAKEHOUSE_*` environment variables, see
//! [`LakehouseClientBuilder::from_env`].
//!
//! ## Retries
//!
//! Retries are off by default. Once enabled with
//! [`LakehouseClient::enable_retries`], transport failures, `429` and `5xx`
//! responses are retried with an exponential backoff.
//!
//! ## Tracing
//!
//! Requests, retries and failures are reported through [`tracing`]; install a
//! subscriber to see them.

mod client;

pub mod models;
pub mod service;

pub use self::client::{
    AuthType, Authentication, AuthenticationError, ByteStream, CallBody, CallHeaders, CallPath,
    CallQuery, DEFAULT_ENV_PREFIX, DEFAULT_SERVICE_URL, DetailedResponse, FileWithMetadata,
    FormPart, FormValue, HttpMethod, LakehouseClient, LakehouseClientBuilder, LakehouseError,
    Operation, OperationCall, ReqwestTransport, RequestOptions, ResponseBody, ResponseType,
    RetryConfig, SecureString, Transport, TransportBody, TransportResponse,
};
