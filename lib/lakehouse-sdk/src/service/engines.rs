//! Query engines.

use super::AUTH_INSTANCE_ID;
use crate::client::Operation;
use crate::models::{EngineDetails, NodeDescription};
use crate::{CallHeaders, DetailedResponse, LakehouseClient, LakehouseError, Transport};

pub(crate) static PAUSE_PRESTO_ENGINE: Operation =
    Operation::post("pause_presto_engine", "/engines/engine/pause")
        .required(&["engine_id"])
        .json_body();
pub(crate) static GET_ENGINES: Operation = Operation::get("get_engines", "/engines");
pub(crate) static GET_DEPLOYMENTS: Operation = Operation::get("get_deployments", "/instance");
pub(crate) static UPDATE_ENGINE: Operation = Operation::patch("update_engine", "/engines/engine")
    .required(&["engine_id"])
    .json_body();
pub(crate) static CREATE_ENGINE: Operation = Operation::post("create_engine", "/engines/engine")
    .required(&["version", "engine_details", "origin", "type"])
    .json_body();
pub(crate) static DELETE_ENGINE: Operation = Operation::delete("delete_engine", "/engines/engine")
    .required(&["engine_id"])
    .json_body();
pub(crate) static RESUME_PRESTO_ENGINE: Operation =
    Operation::post("resume_presto_engine", "/engines/engine/resume")
        .required(&["engine_id"])
        .json_body();

/// Parameters of [`LakehouseClient::pause_presto_engine`].
#[derive(Debug, Clone, Default)]
pub struct PausePrestoEngineParams {
    /// Engine identifier.
    pub engine_id: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::get_engines`].
#[derive(Debug, Clone, Default)]
pub struct GetEnginesParams {
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::get_deployments`].
#[derive(Debug, Clone, Default)]
pub struct GetDeploymentsParams {
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::update_engine`].
#[derive(Debug, Clone, Default)]
pub struct UpdateEngineParams {
    /// Engine identifier.
    pub engine_id: Option<String>,
    /// Coordinator node sizing.
    pub coordinator: Option<NodeDescription>,
    /// New description.
    pub description: Option<String>,
    /// New display name.
    pub engine_display_name: Option<String>,
    /// New tags.
    pub tags: Option<Vec<String>>,
    /// Worker nodes sizing.
    pub worker: Option<NodeDescription>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::create_engine`].
#[derive(Debug, Clone, Default)]
pub struct CreateEngineParams {
    /// Engine version.
    pub version: Option<String>,
    /// Engine sizing.
    pub engine_details: Option<EngineDetails>,
    /// Origin, `native`, `external` or `discover`.
    pub origin: Option<String>,
    /// Engine type, e.g. `presto`. Sent as `type`.
    pub engine_type: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Display name.
    pub engine_display_name: Option<String>,
    /// Whether this is the first engine of the instance.
    pub first_time_use: Option<bool>,
    /// Region.
    pub region: Option<String>,
    /// Catalogs to attach.
    pub associated_catalogs: Option<Vec<String>>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::delete_engine`].
#[derive(Debug, Clone, Default)]
pub struct DeleteEngineParams {
    /// Engine identifier.
    pub engine_id: Option<String>,
    /// Who deletes the engine.
    pub created_by: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::resume_presto_engine`].
#[derive(Debug, Clone, Default)]
pub struct ResumePrestoEngineParams {
    /// Engine identifier.
    pub engine_id: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

impl<T: Transport> LakehouseClient<T> {
    /// Pauses a Presto engine.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `engine_id` is missing.
    pub async fn pause_presto_engine(
        &self,
        params: PausePrestoEngineParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let PausePrestoEngineParams {
            engine_id,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&PAUSE_PRESTO_ENGINE)
            .body_field("engine_id", engine_id)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Lists engines.
    ///
    /// # Errors
    ///
    /// Fails if the call fails or the service answers with an error.
    pub async fn get_engines(
        &self,
        params: GetEnginesParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let GetEnginesParams {
            auth_instance_id,
            headers,
        } = params;
        self.operation(&GET_ENGINES)
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Gets the deployment of the instance.
    ///
    /// # Errors
    ///
    /// Fails if the call fails or the service answers with an error.
    pub async fn get_deployments(
        &self,
        params: GetDeploymentsParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let GetDeploymentsParams {
            auth_instance_id,
            headers,
        } = params;
        self.operation(&GET_DEPLOYMENTS)
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Updates an engine.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `engine_id` is missing.
    pub async fn update_engine(
        &self,
        params: UpdateEngineParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let UpdateEngineParams {
            engine_id,
            coordinator,
            description,
            engine_display_name,
            tags,
            worker,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&UPDATE_ENGINE)
            .body_field("engine_id", engine_id)?
            .body_field("coordinator", coordinator)?
            .body_field("description", description)?
            .body_field("engine_display_name", engine_display_name)?
            .body_field("tags", tags)?
            .body_field("worker", worker)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Creates an engine.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `version`, `engine_details`,
    /// `origin` or `type` is missing.
    pub async fn create_engine(
        &self,
        params: CreateEngineParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let CreateEngineParams {
            version,
            engine_details,
            origin,
            engine_type,
            description,
            engine_display_name,
            first_time_use,
            region,
            associated_catalogs,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&CREATE_ENGINE)
            .body_field("version", version)?
            .body_field("engine_details", engine_details)?
            .body_field("origin", origin)?
            .body_field("type", engine_type)?
            .body_field("description", description)?
            .body_field("engine_display_name", engine_display_name)?
            .body_field("first_time_use", first_time_use)?
            .body_field("region", region)?
            .body_field("associated_catalogs", associated_catalogs)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Deletes an engine.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `engine_id` is missing.
    pub async fn delete_engine(
        &self,
        params: DeleteEngineParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let DeleteEngineParams {
            engine_id,
            created_by,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&DELETE_ENGINE)
            .body_field("engine_id", engine_id)?
            .body_field("created_by", created_by)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Resumes a paused Presto engine.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `engine_id` is missing.
    pub async fn resume_presto_engine(
        &self,
        params: ResumePrestoEngineParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let ResumePrestoEngineParams {
            engine_id,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&RESUME_PRESTO_ENGINE)
            .body_field("engine_id", engine_id)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }
}
