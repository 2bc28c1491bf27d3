//! Catalogs and the metastores attached to engines.

use super::AUTH_INSTANCE_ID;
use crate::client::Operation;
use crate::{CallHeaders, DetailedResponse, LakehouseClient, LakehouseError, Transport};

pub(crate) static GET_METASTORES: Operation = Operation::get("get_metastores", "/catalogs");
pub(crate) static GET_HMS: Operation = Operation::get("get_hms", "/metastores");
pub(crate) static ADD_METASTORE_TO_ENGINE: Operation =
    Operation::post("add_metastore_to_engine", "/metastores/metastore")
        .required(&["catalog_name", "engine_id"])
        .json_body();
pub(crate) static REMOVE_CATALOG_FROM_ENGINE: Operation =
    Operation::delete("remove_catalog_from_engine", "/metastores/metastore")
        .required(&["catalog_name", "engine_id"])
        .json_body();

/// Parameters of [`LakehouseClient::get_metastores`].
#[derive(Debug, Clone, Default)]
pub struct GetMetastoresParams {
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::get_hms`].
#[derive(Debug, Clone, Default)]
pub struct GetHmsParams {
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::add_metastore_to_engine`].
#[derive(Debug, Clone, Default)]
pub struct AddMetastoreToEngineParams {
    /// Catalog to attach.
    pub catalog_name: Option<String>,
    /// Target engine.
    pub engine_id: Option<String>,
    /// Who attaches the catalog.
    pub created_by: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::remove_catalog_from_engine`].
#[derive(Debug, Clone, Default)]
pub struct RemoveCatalogFromEngineParams {
    /// Catalog to detach.
    pub catalog_name: Option<String>,
    /// Target engine.
    pub engine_id: Option<String>,
    /// Who detaches the catalog.
    pub created_by: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

impl<T: Transport> LakehouseClient<T> {
    /// Lists catalogs.
    ///
    /// # Errors
    ///
    /// Fails if the call fails or the service answers with an error.
    pub async fn get_metastores(
        &self,
        params: GetMetastoresParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let GetMetastoresParams {
            auth_instance_id,
            headers,
        } = params;
        self.operation(&GET_METASTORES)
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Lists Hive metastores.
    ///
    /// # Errors
    ///
    /// Fails if the call fails or the service answers with an error.
    pub async fn get_hms(&self, params: GetHmsParams) -> Result<DetailedResponse, LakehouseError> {
        let GetHmsParams {
            auth_instance_id,
            headers,
        } = params;
        self.operation(&GET_HMS)
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Attaches a catalog to an engine.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `catalog_name` or `engine_id` is
    /// missing.
    pub async fn add_metastore_to_engine(
        &self,
        params: AddMetastoreToEngineParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let AddMetastoreToEngineParams {
            catalog_name,
            engine_id,
            created_by,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&ADD_METASTORE_TO_ENGINE)
            .body_field("catalog_name", catalog_name)?
            .body_field("engine_id", engine_id)?
            .body_field("created_by", created_by)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Detaches a catalog from an engine.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `catalog_name` or `engine_id` is
    /// missing.
    pub async fn remove_catalog_from_engine(
        &self,
        params: RemoveCatalogFromEngineParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let RemoveCatalogFromEngineParams {
            catalog_name,
            engine_id,
            created_by,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&REMOVE_CATALOG_FROM_ENGINE)
            .body_field("catalog_name", catalog_name)?
            .body_field("engine_id", engine_id)?
            .body_field("created_by", created_by)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }
}
