//! Tables and their snapshots.

use super::AUTH_INSTANCE_ID;
use crate::client::Operation;
use crate::models::DeleteTableItem;
use crate::{CallHeaders, DetailedResponse, LakehouseClient, LakehouseError, Transport};

pub(crate) static DELETE_TABLE: Operation = Operation::delete("delete_table", "/tables/table")
    .required(&["delete_tables", "engine_id"])
    .json_body();
pub(crate) static UPDATE_TABLE: Operation = Operation::patch("update_table", "/tables/table")
    .required(&["engine_id", "catalog_name", "schema_name", "table_name"])
    .merge_patch_body();
pub(crate) static GET_TABLE_SNAPSHOTS: Operation =
    Operation::get("get_table_snapshots", "/tables/table/snapshots")
        .required(&["engine_id", "catalog_name", "schema_name", "table_name"]);
pub(crate) static ROLLBACK_SNAPSHOT: Operation =
    Operation::post("rollback_snapshot", "/tables/table/rollback")
        .required(&[
            "engine_id",
            "catalog_name",
            "schema_name",
            "snapshot_id",
            "table_name",
        ])
        .json_body();
pub(crate) static GET_TABLES: Operation = Operation::get("get_tables", "/tables")
    .required(&["engine_id", "catalog_name", "schema_name"]);

/// Parameters of [`LakehouseClient::delete_table`].
#[derive(Debug, Clone, Default)]
pub struct DeleteTableParams {
    /// Tables to delete.
    pub delete_tables: Option<Vec<DeleteTableItem>>,
    /// Engine deleting the tables.
    pub engine_id: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::update_table`].
#[derive(Debug, Clone, Default)]
pub struct UpdateTableParams {
    /// Engine running the update.
    pub engine_id: Option<String>,
    /// Catalog of the table.
    pub catalog_name: Option<String>,
    /// Schema of the table.
    pub schema_name: Option<String>,
    /// Current table name.
    pub table_name: Option<String>,
    /// New table name.
    pub new_table_name: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::get_table_snapshots`].
#[derive(Debug, Clone, Default)]
pub struct GetTableSnapshotsParams {
    pub engine_id: Option<String>,
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::rollback_snapshot`].
#[derive(Debug, Clone, Default)]
pub struct RollbackSnapshotParams {
    pub engine_id: Option<String>,
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    /// Snapshot to roll back to.
    pub snapshot_id: Option<String>,
    pub table_name: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::get_tables`].
#[derive(Debug, Clone, Default)]
pub struct GetTablesParams {
    pub engine_id: Option<String>,
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

impl<T: Transport> LakehouseClient<T> {
    /// Deletes tables.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `delete_tables` or `engine_id` is
    /// missing.
    pub async fn delete_table(
        &self,
        params: DeleteTableParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let DeleteTableParams {
            delete_tables,
            engine_id,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&DELETE_TABLE)
            .body_field("delete_tables", delete_tables)?
            .body_field("engine_id", engine_id)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Renames a table.
    ///
    /// The table is identified by query parameters; the body is a JSON merge
    /// patch.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `engine_id`, `catalog_name`,
    /// `schema_name` or `table_name` is missing.
    pub async fn update_table(
        &self,
        params: UpdateTableParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let UpdateTableParams {
            engine_id,
            catalog_name,
            schema_name,
            table_name,
            new_table_name,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&UPDATE_TABLE)
            .query_param("engine_id", engine_id)?
            .query_param("catalog_name", catalog_name)?
            .query_param("schema_name", schema_name)?
            .query_param("table_name", table_name)?
            .body_field("new_table_name", new_table_name)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Lists the snapshots of a table.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `engine_id`, `catalog_name`,
    /// `schema_name` or `table_name` is missing.
    pub async fn get_table_snapshots(
        &self,
        params: GetTableSnapshotsParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let GetTableSnapshotsParams {
            engine_id,
            catalog_name,
            schema_name,
            table_name,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&GET_TABLE_SNAPSHOTS)
            .query_param("engine_id", engine_id)?
            .query_param("catalog_name", catalog_name)?
            .query_param("schema_name", schema_name)?
            .query_param("table_name", table_name)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Rolls a table back to a snapshot.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if any of `engine_id`,
    /// `catalog_name`, `schema_name`, `snapshot_id` and `table_name` is
    /// missing.
    pub async fn rollback_snapshot(
        &self,
        params: RollbackSnapshotParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let RollbackSnapshotParams {
            engine_id,
            catalog_name,
            schema_name,
            snapshot_id,
            table_name,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&ROLLBACK_SNAPSHOT)
            .body_field("engine_id", engine_id)?
            .body_field("catalog_name", catalog_name)?
            .body_field("schema_name", schema_name)?
            .body_field("snapshot_id", snapshot_id)?
            .body_field("table_name", table_name)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Lists the tables of a schema.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `engine_id`, `catalog_name` or
    /// `schema_name` is missing.
    pub async fn get_tables(
        &self,
        params: GetTablesParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let GetTablesParams {
            engine_id,
            catalog_name,
            schema_name,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&GET_TABLES)
            .query_param("engine_id", engine_id)?
            .query_param("catalog_name", catalog_name)?
            .query_param("schema_name", schema_name)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }
}
