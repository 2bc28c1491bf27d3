//! Access management: who can use buckets, databases, engines and
//! metastores, plus data policies.

use super::{AUTH_INSTANCE_ID, LH_INSTANCE_ID};
use crate::client::Operation;
use crate::models::{DataPolicyRule, GroupsMetadata, UsersMetadata};
use crate::{CallHeaders, DetailedResponse, LakehouseClient, LakehouseError, Transport};

pub(crate) static CREATE_DB_CONN_USERS: Operation =
    Operation::post("create_db_conn_users", "/access/databases")
        .required(&["database_id"])
        .json_body();
pub(crate) static LIST_DATA_POLICIES: Operation =
    Operation::get("list_data_policies", "/access/data_policies");
pub(crate) static CREATE_DATA_POLICY: Operation =
    Operation::post("create_data_policy", "/access/data_policies")
        .required(&["catalog_name", "data_artifact", "policy_name", "rules"])
        .json_body();
pub(crate) static DELETE_DATA_POLICIES: Operation =
    Operation::delete("delete_data_policies", "/access/data_policies").json_body();
pub(crate) static GET_ENGINE_USERS: Operation =
    Operation::get("get_engine_users", "/access/engines/{engine_id}").required(&["engine_id"]);
pub(crate) static DELETE_ENGINE_USERS: Operation =
    Operation::delete("delete_engine_users", "/access/engines/{engine_id}")
        .required(&["engine_id"])
        .json_body();
pub(crate) static UPDATE_ENGINE_USERS: Operation =
    Operation::patch("update_engine_users", "/access/engines/{engine_id}")
        .required(&["engine_id"])
        .json_body();
pub(crate) static DELETE_DB_CONN_USERS: Operation =
    Operation::delete("delete_db_conn_users", "/access/databases/{database_id}")
        .required(&["database_id"])
        .json_body();
pub(crate) static GET_DB_CONN_USERS: Operation =
    Operation::get("get_db_conn_users", "/access/databases/{database_id}")
        .required(&["database_id"]);
pub(crate) static UPDATE_DB_CONN_USERS: Operation =
    Operation::patch("update_db_conn_users", "/access/databases/{database_id}")
        .required(&["database_id"])
        .json_body();
pub(crate) static GET_DATA_POLICY: Operation =
    Operation::get("get_data_policy", "/access/data_policies/{policy_name}")
        .required(&["policy_name"]);
pub(crate) static REPLACE_DATA_POLICY: Operation =
    Operation::put("replace_data_policy", "/access/data_policies/{policy_name}")
        .required(&["policy_name", "catalog_name", "data_artifact", "rules"])
        .json_body();
pub(crate) static DELETE_DATA_POLICY: Operation =
    Operation::delete("delete_data_policy", "/access/data_policies/{policy_name}")
        .required(&["policy_name"]);
pub(crate) static GET_DEFAULT_POLICIES: Operation =
    Operation::get("get_default_policies", "/access/default_policies");
pub(crate) static GET_POLICY_VERSION: Operation =
    Operation::get("get_policy_version", "/access/policy_versions");
pub(crate) static CREATE_ENGINE_USERS: Operation =
    Operation::post("create_engine_users", "/access/engines")
        .required(&["engine_id"])
        .json_body();
pub(crate) static CREATE_METASTORE_USERS: Operation =
    Operation::post("create_metastore_users", "/access/metastores")
        .required(&["metastore_name"])
        .json_body();
pub(crate) static GET_METASTORE_USERS: Operation =
    Operation::get("get_metastore_users", "/access/metastores/{metastore_name}")
        .required(&["metastore_name"]);
pub(crate) static DELETE_METASTORE_USERS: Operation =
    Operation::delete("delete_metastore_users", "/access/metastores/{metastore_name}")
        .required(&["metastore_name"])
        .json_body();
pub(crate) static UPDATE_METASTORE_USERS: Operation =
    Operation::patch("update_metastore_users", "/access/metastores/{metastore_name}")
        .required(&["metastore_name"])
        .json_body();
pub(crate) static CREATE_BUCKET_USERS: Operation =
    Operation::post("create_bucket_users", "/access/buckets")
        .required(&["bucket_id"])
        .json_body();
pub(crate) static GET_BUCKET_USERS: Operation =
    Operation::get("get_bucket_users", "/access/buckets/{bucket_id}").required(&["bucket_id"]);
pub(crate) static DELETE_BUCKET_USERS: Operation =
    Operation::delete("delete_bucket_users", "/access/buckets/{bucket_id}")
        .required(&["bucket_id"])
        .json_body();
pub(crate) static UPDATE_BUCKET_USERS: Operation =
    Operation::patch("update_bucket_users", "/access/buckets/{bucket_id}")
        .required(&["bucket_id"])
        .json_body();
pub(crate) static GET_POLICIES_LIST: Operation =
    Operation::get("get_policies_list", "/access/policies");

/// Parameters of [`LakehouseClient::create_db_conn_users`].
#[derive(Debug, Clone, Default)]
pub struct CreateDbConnUsersParams {
    /// Database connection identifier.
    pub database_id: Option<String>,
    /// Groups to grant access to.
    pub groups: Option<Vec<GroupsMetadata>>,
    /// Users to grant access to.
    pub users: Option<Vec<UsersMetadata>>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::list_data_policies`].
#[derive(Debug, Clone, Default)]
pub struct ListDataPoliciesParams {
    /// Sent as the `LhInstanceId` header.
    pub lh_instance_id: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Only policies of this catalog.
    pub catalog_name: Option<String>,
    /// Only policies with this status, `active` or `inactive`.
    pub status: Option<String>,
    /// Include policy metadata.
    pub include_metadata: Option<bool>,
    /// Include policy rules.
    pub include_rules: Option<bool>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::create_data_policy`].
#[derive(Debug, Clone, Default)]
pub struct CreateDataPolicyParams {
    /// Catalog the policy applies to.
    pub catalog_name: Option<String>,
    /// Data artifact, e.g. `schema1/table1/(column1|column2)`.
    pub data_artifact: Option<String>,
    /// Policy name.
    pub policy_name: Option<String>,
    /// Policy rules.
    pub rules: Option<Vec<DataPolicyRule>>,
    /// Policy description.
    pub description: Option<String>,
    /// `active` or `inactive`.
    pub status: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::delete_data_policies`].
#[derive(Debug, Clone, Default)]
pub struct DeleteDataPoliciesParams {
    /// Names of the policies to delete.
    pub data_policies: Option<Vec<String>>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::get_engine_users`].
#[derive(Debug, Clone, Default)]
pub struct GetEngineUsersParams {
    /// Engine identifier.
    pub engine_id: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::delete_engine_users`].
#[derive(Debug, Clone, Default)]
pub struct DeleteEngineUsersParams {
    /// Engine identifier.
    pub engine_id: Option<String>,
    /// Group identifiers to revoke.
    pub groups: Option<Vec<String>>,
    /// User names to revoke.
    pub users: Option<Vec<String>>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::update_engine_users`].
#[derive(Debug, Clone, Default)]
pub struct UpdateEngineUsersParams {
    /// Engine identifier.
    pub engine_id: Option<String>,
    /// Group grants to update.
    pub groups: Option<Vec<GroupsMetadata>>,
    /// User grants to update.
    pub users: Option<Vec<UsersMetadata>>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::delete_db_conn_users`].
#[derive(Debug, Clone, Default)]
pub struct DeleteDbConnUsersParams {
    /// Database connection identifier.
    pub database_id: Option<String>,
    /// Group identifiers to revoke.
    pub groups: Option<Vec<String>>,
    /// User names to revoke.
    pub users: Option<Vec<String>>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::get_db_conn_users`].
#[derive(Debug, Clone, Default)]
pub struct GetDbConnUsersParams {
    /// Database connection identifier.
    pub database_id: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::update_db_conn_users`].
#[derive(Debug, Clone, Default)]
pub struct UpdateDbConnUsersParams {
    /// Database connection identifier.
    pub database_id: Option<String>,
    /// Group grants to update.
    pub groups: Option<Vec<GroupsMetadata>>,
    /// User grants to update.
    pub users: Option<Vec<UsersMetadata>>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::get_data_policy`].
#[derive(Debug, Clone, Default)]
pub struct GetDataPolicyParams {
    /// Policy name.
    pub policy_name: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::replace_data_policy`].
#[derive(Debug, Clone, Default)]
pub struct ReplaceDataPolicyParams {
    /// Name of the policy to replace.
    pub policy_name: Option<String>,
    /// Catalog the policy applies to.
    pub catalog_name: Option<String>,
    /// Data artifact.
    pub data_artifact: Option<String>,
    /// Policy rules.
    pub rules: Option<Vec<DataPolicyRule>>,
    /// Policy description.
    pub description: Option<String>,
    /// `active` or `inactive`.
    pub status: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::delete_data_policy`].
#[derive(Debug, Clone, Default)]
pub struct DeleteDataPolicyParams {
    /// Policy name.
    pub policy_name: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::get_default_policies`].
#[derive(Debug, Clone, Default)]
pub struct GetDefaultPoliciesParams {
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::get_policy_version`].
#[derive(Debug, Clone, Default)]
pub struct GetPolicyVersionParams {
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::create_engine_users`].
#[derive(Debug, Clone, Default)]
pub struct CreateEngineUsersParams {
    /// Engine identifier.
    pub engine_id: Option<String>,
    /// Groups to grant access to.
    pub groups: Option<Vec<GroupsMetadata>>,
    /// Users to grant access to.
    pub users: Option<Vec<UsersMetadata>>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::create_metastore_users`].
#[derive(Debug, Clone, Default)]
pub struct CreateMetastoreUsersParams {
    /// Metastore name.
    pub metastore_name: Option<String>,
    /// Groups to grant access to.
    pub groups: Option<Vec<GroupsMetadata>>,
    /// Users to grant access to.
    pub users: Option<Vec<UsersMetadata>>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::get_metastore_users`].
#[derive(Debug, Clone, Default)]
pub struct GetMetastoreUsersParams {
    /// Metastore name.
    pub metastore_name: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::delete_metastore_users`].
#[derive(Debug, Clone, Default)]
pub struct DeleteMetastoreUsersParams {
    /// Metastore name.
    pub metastore_name: Option<String>,
    /// Group identifiers to revoke.
    pub groups: Option<Vec<String>>,
    /// User names to revoke.
    pub users: Option<Vec<String>>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::update_metastore_users`].
#[derive(Debug, Clone, Default)]
pub struct UpdateMetastoreUsersParams {
    /// Metastore name.
    pub metastore_name: Option<String>,
    /// Group grants to update.
    pub groups: Option<Vec<GroupsMetadata>>,
    /// User grants to update.
    pub users: Option<Vec<UsersMetadata>>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::create_bucket_users`].
#[derive(Debug, Clone, Default)]
pub struct CreateBucketUsersParams {
    /// Bucket identifier.
    pub bucket_id: Option<String>,
    /// Groups to grant access to.
    pub groups: Option<Vec<GroupsMetadata>>,
    /// Users to grant access to.
    pub users: Option<Vec<UsersMetadata>>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::get_bucket_users`].
#[derive(Debug, Clone, Default)]
pub struct GetBucketUsersParams {
    /// Bucket identifier.
    pub bucket_id: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::delete_bucket_users`].
#[derive(Debug, Clone, Default)]
pub struct DeleteBucketUsersParams {
    /// Bucket identifier.
    pub bucket_id: Option<String>,
    /// Group identifiers to revoke.
    pub groups: Option<Vec<String>>,
    /// User names to revoke.
    pub users: Option<Vec<String>>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::update_bucket_users`].
#[derive(Debug, Clone, Default)]
pub struct UpdateBucketUsersParams {
    /// Bucket identifier.
    pub bucket_id: Option<String>,
    /// Group grants to update.
    pub groups: Option<Vec<GroupsMetadata>>,
    /// User grants to update.
    pub users: Option<Vec<UsersMetadata>>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::get_policies_list`].
#[derive(Debug, Clone, Default)]
pub struct GetPoliciesListParams {
    /// Catalogs to list policies for, sent comma-separated.
    pub catalog_list: Option<Vec<String>>,
    /// Engines to list policies for, sent comma-separated.
    pub engine_list: Option<Vec<String>>,
    /// Data policies to list, sent comma-separated.
    pub data_policies_list: Option<Vec<String>>,
    /// Include data policies in the result.
    pub include_data_policies: Option<bool>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

impl<T: Transport> LakehouseClient<T> {
    /// Grants users and groups access to a database connection.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `database_id` is missing.
    pub async fn create_db_conn_users(
        &self,
        params: CreateDbConnUsersParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let CreateDbConnUsersParams {
            database_id,
            groups,
            users,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&CREATE_DB_CONN_USERS)
            .body_field("database_id", database_id)?
            .body_field("groups", groups)?
            .body_field("users", users)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Lists data policies.
    ///
    /// # Errors
    ///
    /// Fails if the call fails or the service answers with an error.
    pub async fn list_data_policies(
        &self,
        params: ListDataPoliciesParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let ListDataPoliciesParams {
            lh_instance_id,
            auth_instance_id,
            catalog_name,
            status,
            include_metadata,
            include_rules,
            headers,
        } = params;
        self.operation(&LIST_DATA_POLICIES)
            .query_param("catalog_name", catalog_name)?
            .query_param("status", status)?
            .query_param("include_metadata", include_metadata)?
            .query_param("include_rules", include_rules)?
            .header_param(LH_INSTANCE_ID, lh_instance_id)
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Creates a data policy.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `catalog_name`, `data_artifact`,
    /// `policy_name` or `rules` is missing.
    pub async fn create_data_policy(
        &self,
        params: CreateDataPolicyParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let CreateDataPolicyParams {
            catalog_name,
            data_artifact,
            policy_name,
            rules,
            description,
            status,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&CREATE_DATA_POLICY)
            .body_field("catalog_name", catalog_name)?
            .body_field("data_artifact", data_artifact)?
            .body_field("policy_name", policy_name)?
            .body_field("rules", rules)?
            .body_field("description", description)?
            .body_field("status", status)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Deletes several data policies.
    ///
    /// # Errors
    ///
    /// Fails if the call fails or the service answers with an error.
    pub async fn delete_data_policies(
        &self,
        params: DeleteDataPoliciesParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let DeleteDataPoliciesParams {
            data_policies,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&DELETE_DATA_POLICIES)
            .body_field("data_policies", data_policies)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Gets the users and groups with access to an engine.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `engine_id` is missing.
    pub async fn get_engine_users(
        &self,
        params: GetEngineUsersParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let GetEngineUsersParams {
            engine_id,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&GET_ENGINE_USERS)
            .path_param("engine_id", engine_id)
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Revokes access to an engine.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `engine_id` is missing.
    pub async fn delete_engine_users(
        &self,
        params: DeleteEngineUsersParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let DeleteEngineUsersParams {
            engine_id,
            groups,
            users,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&DELETE_ENGINE_USERS)
            .path_param("engine_id", engine_id)
            .body_field("groups", groups)?
            .body_field("users", users)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Updates access to an engine.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `engine_id` is missing.
    pub async fn update_engine_users(
        &self,
        params: UpdateEngineUsersParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let UpdateEngineUsersParams {
            engine_id,
            groups,
            users,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&UPDATE_ENGINE_USERS)
            .path_param("engine_id", engine_id)
            .body_field("groups", groups)?
            .body_field("users", users)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Revokes access to a database connection.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `database_id` is missing.
    pub async fn delete_db_conn_users(
        &self,
        params: DeleteDbConnUsersParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let DeleteDbConnUsersParams {
            database_id,
            groups,
            users,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&DELETE_DB_CONN_USERS)
            .path_param("database_id", database_id)
            .body_field("groups", groups)?
            .body_field("users", users)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Gets the users and groups with access to a database connection.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `database_id` is missing.
    pub async fn get_db_conn_users(
        &self,
        params: GetDbConnUsersParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let GetDbConnUsersParams {
            database_id,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&GET_DB_CONN_USERS)
            .path_param("database_id", database_id)
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Updates access to a database connection.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `database_id` is missing.
    pub async fn update_db_conn_users(
        &self,
        params: UpdateDbConnUsersParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let UpdateDbConnUsersParams {
            database_id,
            groups,
            users,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&UPDATE_DB_CONN_USERS)
            .path_param("database_id", database_id)
            .body_field("groups", groups)?
            .body_field("users", users)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Gets a data policy.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `policy_name` is missing.
    pub async fn get_data_policy(
        &self,
        params: GetDataPolicyParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let GetDataPolicyParams {
            policy_name,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&GET_DATA_POLICY)
            .path_param("policy_name", policy_name)
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Replaces a data policy.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `policy_name`, `catalog_name`,
    /// `data_artifact` or `rules` is missing.
    pub async fn replace_data_policy(
        &self,
        params: ReplaceDataPolicyParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let ReplaceDataPolicyParams {
            policy_name,
            catalog_name,
            data_artifact,
            rules,
            description,
            status,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&REPLACE_DATA_POLICY)
            .path_param("policy_name", policy_name)
            .body_field("catalog_name", catalog_name)?
            .body_field("data_artifact", data_artifact)?
            .body_field("rules", rules)?
            .body_field("description", description)?
            .body_field("status", status)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Deletes a data policy.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `policy_name` is missing.
    pub async fn delete_data_policy(
        &self,
        params: DeleteDataPolicyParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let DeleteDataPolicyParams {
            policy_name,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&DELETE_DATA_POLICY)
            .path_param("policy_name", policy_name)
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Gets the default access policies.
    ///
    /// # Errors
    ///
    /// Fails if the call fails or the service answers with an error.
    pub async fn get_default_policies(
        &self,
        params: GetDefaultPoliciesParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let GetDefaultPoliciesParams {
            auth_instance_id,
            headers,
        } = params;
        self.operation(&GET_DEFAULT_POLICIES)
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Gets the version of the access policies.
    ///
    /// # Errors
    ///
    /// Fails if the call fails or the service answers with an error.
    pub async fn get_policy_version(
        &self,
        params: GetPolicyVersionParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let GetPolicyVersionParams {
            auth_instance_id,
            headers,
        } = params;
        self.operation(&GET_POLICY_VERSION)
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Grants users and groups access to an engine.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `engine_id` is missing.
    pub async fn create_engine_users(
        &self,
        params: CreateEngineUsersParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let CreateEngineUsersParams {
            engine_id,
            groups,
            users,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&CREATE_ENGINE_USERS)
            .body_field("engine_id", engine_id)?
            .body_field("groups", groups)?
            .body_field("users", users)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Grants users and groups access to a metastore.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `metastore_name` is missing.
    pub async fn create_metastore_users(
        &self,
        params: CreateMetastoreUsersParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let CreateMetastoreUsersParams {
            metastore_name,
            groups,
            users,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&CREATE_METASTORE_USERS)
            .body_field("metastore_name", metastore_name)?
            .body_field("groups", groups)?
            .body_field("users", users)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Gets the users and groups with access to a metastore.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `metastore_name` is missing.
    pub async fn get_metastore_users(
        &self,
        params: GetMetastoreUsersParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let GetMetastoreUsersParams {
            metastore_name,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&GET_METASTORE_USERS)
            .path_param("metastore_name", metastore_name)
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Revokes access to a metastore.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `metastore_name` is missing.
    pub async fn delete_metastore_users(
        &self,
        params: DeleteMetastoreUsersParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let DeleteMetastoreUsersParams {
            metastore_name,
            groups,
            users,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&DELETE_METASTORE_USERS)
            .path_param("metastore_name", metastore_name)
            .body_field("groups", groups)?
            .body_field("users", users)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Updates access to a metastore.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `metastore_name` is missing.
    pub async fn update_metastore_users(
        &self,
        params: UpdateMetastoreUsersParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let UpdateMetastoreUsersParams {
            metastore_name,
            groups,
            users,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&UPDATE_METASTORE_USERS)
            .path_param("metastore_name", metastore_name)
            .body_field("groups", groups)?
            .body_field("users", users)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Grants users and groups access to a bucket.
    ///
    /// ```rust,no_run
    /// use lakehouse_sdk::LakehouseClient;
    /// use lakehouse_sdk::models::{GroupsMetadata, UsersMetadata};
    /// use lakehouse_sdk::service::CreateBucketUsersParams;
    ///
    /// # async fn example() -> Result<(), lakehouse_sdk::LakehouseError> {
    /// let client = LakehouseClient::builder().build()?;
    /// client
    ///     .create_bucket_users(CreateBucketUsersParams {
    ///         bucket_id: Some("iceberg-data".to_string()),
    ///         groups: Some(vec![GroupsMetadata::new("analysts", "can_access")]),
    ///         users: Some(vec![UsersMetadata::new("alice", "can_access")]),
    ///         ..Default::default()
    ///     })
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `bucket_id` is missing.
    pub async fn create_bucket_users(
        &self,
        params: CreateBucketUsersParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let CreateBucketUsersParams {
            bucket_id,
            groups,
            users,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&CREATE_BUCKET_USERS)
            .body_field("bucket_id", bucket_id)?
            .body_field("groups", groups)?
            .body_field("users", users)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Gets the users and groups with access to a bucket.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `bucket_id` is missing.
    pub async fn get_bucket_users(
        &self,
        params: GetBucketUsersParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let GetBucketUsersParams {
            bucket_id,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&GET_BUCKET_USERS)
            .path_param("bucket_id", bucket_id)
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Revokes access to a bucket.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `bucket_id` is missing.
    pub async fn delete_bucket_users(
        &self,
        params: DeleteBucketUsersParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let DeleteBucketUsersParams {
            bucket_id,
            groups,
            users,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&DELETE_BUCKET_USERS)
            .path_param("bucket_id", bucket_id)
            .body_field("groups", groups)?
            .body_field("users", users)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Updates access to a bucket.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `bucket_id` is missing.
    pub async fn update_bucket_users(
        &self,
        params: UpdateBucketUsersParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let UpdateBucketUsersParams {
            bucket_id,
            groups,
            users,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&UPDATE_BUCKET_USERS)
            .path_param("bucket_id", bucket_id)
            .body_field("groups", groups)?
            .body_field("users", users)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Lists access policies of catalogs, engines and data policies.
    ///
    /// # Errors
    ///
    /// Fails if the call fails or the service answers with an error.
    pub async fn get_policies_list(
        &self,
        params: GetPoliciesListParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let GetPoliciesListParams {
            catalog_list,
            engine_list,
            data_policies_list,
            include_data_policies,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&GET_POLICIES_LIST)
            .query_param("catalog_list", catalog_list)?
            .query_param("engine_list", engine_list)?
            .query_param("data_policies_list", data_policies_list)?
            .query_param("include_data_policies", include_data_policies)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }
}
