//! SQL statements: explain plans and query execution.

use super::AUTH_INSTANCE_ID;
use crate::client::Operation;
use crate::{CallHeaders, DetailedResponse, LakehouseClient, LakehouseError, Transport};

pub(crate) static EXPLAIN_ANALYZE_STATEMENT: Operation =
    Operation::post("explain_analyze_statement", "/explainanalyze")
        .required(&["catalog_name", "engine_id", "schema_name", "statement"])
        .json_body();
pub(crate) static EXPLAIN_STATEMENT: Operation = Operation::post("explain_statement", "/explain")
    .required(&["engine_id", "statement"])
    .json_body();
pub(crate) static POST_QUERY: Operation = Operation::post("post_query", "/v1/statement")
    .required(&["engine", "catalog", "schema", "sqlQuery"])
    .multipart_body()
    .stream();

/// Parameters of [`LakehouseClient::explain_analyze_statement`].
#[derive(Debug, Clone, Default)]
pub struct ExplainAnalyzeStatementParams {
    /// Catalog name.
    pub catalog_name: Option<String>,
    /// Engine running the statement.
    pub engine_id: Option<String>,
    /// Schema name.
    pub schema_name: Option<String>,
    /// SQL statement.
    pub statement: Option<String>,
    /// Verbose output.
    pub verbose: Option<bool>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::explain_statement`].
#[derive(Debug, Clone, Default)]
pub struct ExplainStatementParams {
    /// Engine running the statement.
    pub engine_id: Option<String>,
    /// SQL statement.
    pub statement: Option<String>,
    /// Catalog name.
    pub catalog_name: Option<String>,
    /// Plan format, `json`, `text` or `graphviz`.
    pub format: Option<String>,
    /// Schema name.
    pub schema_name: Option<String>,
    /// Plan type, e.g. `logical`, `distributed`. Sent as `type`.
    pub plan_type: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::post_query`].
#[derive(Debug, Clone, Default)]
pub struct PostQueryParams {
    /// Engine running the query, sent in the query string.
    pub engine: Option<String>,
    /// Catalog name, sent as a form field.
    pub catalog: Option<String>,
    /// Schema name, sent as a form field.
    pub schema: Option<String>,
    /// SQL query, sent as the `sqlQuery` form field.
    pub sql_query: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

impl<T: Transport> LakehouseClient<T> {
    /// Runs `EXPLAIN ANALYZE` on a statement.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `catalog_name`, `engine_id`,
    /// `schema_name` or `statement` is missing.
    pub async fn explain_analyze_statement(
        &self,
        params: ExplainAnalyzeStatementParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let ExplainAnalyzeStatementParams {
            catalog_name,
            engine_id,
            schema_name,
            statement,
            verbose,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&EXPLAIN_ANALYZE_STATEMENT)
            .body_field("catalog_name", catalog_name)?
            .body_field("engine_id", engine_id)?
            .body_field("schema_name", schema_name)?
            .body_field("statement", statement)?
            .body_field("verbose", verbose)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Explains the plan of a statement.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `engine_id` or `statement` is
    /// missing.
    pub async fn explain_statement(
        &self,
        params: ExplainStatementParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let ExplainStatementParams {
            engine_id,
            statement,
            catalog_name,
            format,
            schema_name,
            plan_type,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&EXPLAIN_STATEMENT)
            .body_field("engine_id", engine_id)?
            .body_field("statement", statement)?
            .body_field("catalog_name", catalog_name)?
            .body_field("format", format)?
            .body_field("schema_name", schema_name)?
            .body_field("type", plan_type)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Runs a SQL query.
    ///
    /// Results are streamed back, see [`DetailedResponse::into_stream`].
    ///
    /// ```rust,no_run
    /// use futures::TryStreamExt;
    /// use lakehouse_sdk::LakehouseClient;
    /// use lakehouse_sdk::service::PostQueryParams;
    ///
    /// # async fn example() -> Result<(), lakehouse_sdk::LakehouseError> {
    /// let client = LakehouseClient::builder().build()?;
    /// let response = client
    ///     .post_query(PostQueryParams {
    ///         engine: Some("presto-01".to_string()),
    ///         catalog: Some("iceberg_data".to_string()),
    ///         schema: Some("sales".to_string()),
    ///         sql_query: Some("SELECT * FROM orders LIMIT 10".to_string()),
    ///         ..Default::default()
    ///     })
    ///     .await?;
    /// let chunks: Vec<_> = response.into_stream()?.try_collect().await?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `engine`, `catalog`, `schema` or
    /// `sql_query` is missing.
    pub async fn post_query(
        &self,
        params: PostQueryParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let PostQueryParams {
            engine,
            catalog,
            schema,
            sql_query,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&POST_QUERY)
            .query_param("engine", engine)?
            .form_part("catalog", catalog)?
            .form_part("schema", schema)?
            .form_part("sqlQuery", sql_query)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }
}
