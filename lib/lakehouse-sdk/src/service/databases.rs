//! Databases registered as catalogs.

use super::AUTH_INSTANCE_ID;
use crate::client::Operation;
use crate::models::DatabaseDetails;
use crate::{CallHeaders, DetailedResponse, LakehouseClient, LakehouseError, Transport};

pub(crate) static GET_DATABASES: Operation = Operation::get("get_databases", "/databases");
pub(crate) static CREATE_DATABASE_CATALOG: Operation =
    Operation::post("create_database_catalog", "/databases/database")
        .required(&["database_display_name", "database_type", "catalog_name"])
        .json_body();
pub(crate) static DELETE_DATABASE_CATALOG: Operation =
    Operation::delete("delete_database_catalog", "/databases/database")
        .required(&["database_id"])
        .json_body();
pub(crate) static UPDATE_DATABASE: Operation =
    Operation::patch("update_database", "/databases/database")
        .required(&["database_id"])
        .json_body();

/// Parameters of [`LakehouseClient::get_databases`].
#[derive(Debug, Clone, Default)]
pub struct GetDatabasesParams {
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::create_database_catalog`].
#[derive(Debug, Clone, Default)]
pub struct CreateDatabaseCatalogParams {
    /// Display name.
    pub database_display_name: Option<String>,
    /// Database type, e.g. `db2`, `postgresql`, `mysql`.
    pub database_type: Option<String>,
    /// Catalog created for the database.
    pub catalog_name: Option<String>,
    /// Connection details.
    pub database_details: Option<DatabaseDetails>,
    /// Description.
    pub description: Option<String>,
    /// Tags.
    pub tags: Option<Vec<String>>,
    /// Creator.
    pub created_by: Option<String>,
    /// Creation time, in seconds since the epoch.
    pub created_on: Option<i64>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::delete_database_catalog`].
#[derive(Debug, Clone, Default)]
pub struct DeleteDatabaseCatalogParams {
    /// Database identifier.
    pub database_id: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::update_database`].
#[derive(Debug, Clone, Default)]
pub struct UpdateDatabaseParams {
    /// Database identifier.
    pub database_id: Option<String>,
    /// New connection details.
    pub database_details: Option<DatabaseDetails>,
    /// New display name.
    pub database_display_name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New tags.
    pub tags: Option<Vec<String>>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

impl<T: Transport> LakehouseClient<T> {
    /// Lists registered databases.
    ///
    /// # Errors
    ///
    /// Fails if the call fails or the service answers with an error.
    pub async fn get_databases(
        &self,
        params: GetDatabasesParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let GetDatabasesParams {
            auth_instance_id,
            headers,
        } = params;
        self.operation(&GET_DATABASES)
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Registers a database and creates its catalog.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `database_display_name`,
    /// `database_type` or `catalog_name` is missing.
    pub async fn create_database_catalog(
        &self,
        params: CreateDatabaseCatalogParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let CreateDatabaseCatalogParams {
            database_display_name,
            database_type,
            catalog_name,
            database_details,
            description,
            tags,
            created_by,
            created_on,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&CREATE_DATABASE_CATALOG)
            .body_field("database_display_name", database_display_name)?
            .body_field("database_type", database_type)?
            .body_field("catalog_name", catalog_name)?
            .body_field("database_details", database_details)?
            .body_field("description", description)?
            .body_field("tags", tags)?
            .body_field("created_by", created_by)?
            .body_field("created_on", created_on)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Unregisters a database and deletes its catalog.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `database_id` is missing.
    pub async fn delete_database_catalog(
        &self,
        params: DeleteDatabaseCatalogParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let DeleteDatabaseCatalogParams {
            database_id,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&DELETE_DATABASE_CATALOG)
            .body_field("database_id", database_id)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Updates a registered database.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `database_id` is missing.
    pub async fn update_database(
        &self,
        params: UpdateDatabaseParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let UpdateDatabaseParams {
            database_id,
            database_details,
            database_display_name,
            description,
            tags,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&UPDATE_DATABASE)
            .body_field("database_id", database_id)?
            .body_field("database_details", database_details)?
            .body_field("database_display_name", database_display_name)?
            .body_field("description", description)?
            .body_field("tags", tags)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }
}
