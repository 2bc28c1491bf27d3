//! Saved queries.

use super::AUTH_INSTANCE_ID;
use crate::client::Operation;
use crate::{CallHeaders, DetailedResponse, LakehouseClient, LakehouseError, Transport};

pub(crate) static GET_QUERIES: Operation = Operation::get("get_queries", "/queries");
pub(crate) static SAVE_QUERY: Operation = Operation::post("save_query", "/queries/{query_name}")
    .required(&["query_name", "created_by", "description", "query_string"])
    .json_body();
pub(crate) static DELETE_QUERY: Operation =
    Operation::delete("delete_query", "/queries/{query_name}").required(&["query_name"]);
pub(crate) static UPDATE_QUERY: Operation =
    Operation::patch("update_query", "/queries/{query_name}")
        .required(&["query_name", "query_string", "description", "new_query_name"])
        .json_body();

/// Parameters of [`LakehouseClient::get_queries`].
#[derive(Debug, Clone, Default)]
pub struct GetQueriesParams {
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::save_query`].
#[derive(Debug, Clone, Default)]
pub struct SaveQueryParams {
    /// Name of the saved query.
    pub query_name: Option<String>,
    /// Author.
    pub created_by: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// SQL text.
    pub query_string: Option<String>,
    /// Creation time.
    pub created_on: Option<String>,
    /// Engine the query targets.
    pub engine_id: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::delete_query`].
#[derive(Debug, Clone, Default)]
pub struct DeleteQueryParams {
    /// Name of the saved query.
    pub query_name: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::update_query`].
#[derive(Debug, Clone, Default)]
pub struct UpdateQueryParams {
    /// Current name of the saved query.
    pub query_name: Option<String>,
    /// New SQL text.
    pub query_string: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New name.
    pub new_query_name: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

impl<T: Transport> LakehouseClient<T> {
    /// Lists saved queries.
    ///
    /// # Errors
    ///
    /// Fails if the call fails or the service answers with an error.
    pub async fn get_queries(
        &self,
        params: GetQueriesParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let GetQueriesParams {
            auth_instance_id,
            headers,
        } = params;
        self.operation(&GET_QUERIES)
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Saves a query.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `query_name`, `created_by`,
    /// `description` or `query_string` is missing.
    pub async fn save_query(
        &self,
        params: SaveQueryParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let SaveQueryParams {
            query_name,
            created_by,
            description,
            query_string,
            created_on,
            engine_id,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&SAVE_QUERY)
            .path_param("query_name", query_name)
            .body_field("created_by", created_by)?
            .body_field("description", description)?
            .body_field("query_string", query_string)?
            .body_field("created_on", created_on)?
            .body_field("engine_id", engine_id)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Deletes a saved query.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `query_name` is missing.
    pub async fn delete_query(
        &self,
        params: DeleteQueryParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let DeleteQueryParams {
            query_name,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&DELETE_QUERY)
            .path_param("query_name", query_name)
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Updates a saved query.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `query_name`, `query_string`,
    /// `description` or `new_query_name` is missing.
    pub async fn update_query(
        &self,
        params: UpdateQueryParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let UpdateQueryParams {
            query_name,
            query_string,
            description,
            new_query_name,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&UPDATE_QUERY)
            .path_param("query_name", query_name)
            .body_field("query_string", query_string)?
            .body_field("description", description)?
            .body_field("new_query_name", new_query_name)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }
}
