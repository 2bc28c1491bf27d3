//! Schemas of a catalog.

use super::AUTH_INSTANCE_ID;
use crate::client::Operation;
use crate::{CallHeaders, DetailedResponse, LakehouseClient, LakehouseError, Transport};

pub(crate) static CREATE_SCHEMA: Operation = Operation::post("create_schema", "/schemas/schema")
    .required(&["catalog_name", "engine_id", "schema_name"])
    .json_body();
pub(crate) static DELETE_SCHEMA: Operation = Operation::delete("delete_schema", "/schemas/schema")
    .required(&["catalog_name", "engine_id", "schema_name"])
    .json_body();
pub(crate) static GET_SCHEMAS: Operation =
    Operation::get("get_schemas", "/schemas").required(&["engine_id", "catalog_name"]);

/// Parameters of [`LakehouseClient::create_schema`].
#[derive(Debug, Clone, Default)]
pub struct CreateSchemaParams {
    /// Catalog of the schema.
    pub catalog_name: Option<String>,
    /// Engine creating the schema.
    pub engine_id: Option<String>,
    /// Schema name.
    pub schema_name: Option<String>,
    /// Bucket holding the schema data.
    pub bucket_name: Option<String>,
    /// Creator.
    pub created_by: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::delete_schema`].
#[derive(Debug, Clone, Default)]
pub struct DeleteSchemaParams {
    /// Catalog of the schema.
    pub catalog_name: Option<String>,
    /// Engine deleting the schema.
    pub engine_id: Option<String>,
    /// Schema name.
    pub schema_name: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::get_schemas`].
#[derive(Debug, Clone, Default)]
pub struct GetSchemasParams {
    /// Engine listing the schemas.
    pub engine_id: Option<String>,
    /// Catalog to list.
    pub catalog_name: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

impl<T: Transport> LakehouseClient<T> {
    /// Creates a schema.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `catalog_name`, `engine_id` or
    /// `schema_name` is missing.
    pub async fn create_schema(
        &self,
        params: CreateSchemaParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let CreateSchemaParams {
            catalog_name,
            engine_id,
            schema_name,
            bucket_name,
            created_by,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&CREATE_SCHEMA)
            .body_field("catalog_name", catalog_name)?
            .body_field("engine_id", engine_id)?
            .body_field("schema_name", schema_name)?
            .body_field("bucket_name", bucket_name)?
            .body_field("created_by", created_by)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Deletes a schema.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `catalog_name`, `engine_id` or
    /// `schema_name` is missing.
    pub async fn delete_schema(
        &self,
        params: DeleteSchemaParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let DeleteSchemaParams {
            catalog_name,
            engine_id,
            schema_name,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&DELETE_SCHEMA)
            .body_field("catalog_name", catalog_name)?
            .body_field("engine_id", engine_id)?
            .body_field("schema_name", schema_name)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Lists the schemas of a catalog.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `engine_id` or `catalog_name` is
    /// missing.
    pub async fn get_schemas(
        &self,
        params: GetSchemasParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let GetSchemasParams {
            engine_id,
            catalog_name,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&GET_SCHEMAS)
            .query_param("engine_id", engine_id)?
            .query_param("catalog_name", catalog_name)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }
}
