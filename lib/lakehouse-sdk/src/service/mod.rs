//! Operations of the lakehouse service, grouped by resource.
//!
//! Each operation is an async method of [`LakehouseClient`](crate::LakehouseClient)
//! taking a parameter struct. Every field is optional at the type level;
//! required ones are checked when the call is made, before anything is sent.
//! Every parameter struct also has a `headers` field whose entries override
//! the headers computed by the SDK.

mod access;
pub use self::access::{
    CreateBucketUsersParams, CreateDataPolicyParams, CreateDbConnUsersParams,
    CreateEngineUsersParams, CreateMetastoreUsersParams, DeleteBucketUsersParams,
    DeleteDataPoliciesParams, DeleteDataPolicyParams, DeleteDbConnUsersParams,
    DeleteEngineUsersParams, DeleteMetastoreUsersParams, GetBucketUsersParams,
    GetDataPolicyParams, GetDbConnUsersParams, GetDefaultPoliciesParams, GetEngineUsersParams,
    GetMetastoreUsersParams, GetPoliciesListParams, GetPolicyVersionParams,
    ListDataPoliciesParams, ReplaceDataPolicyParams, UpdateBucketUsersParams,
    UpdateDbConnUsersParams, UpdateEngineUsersParams, UpdateMetastoreUsersParams,
};

mod buckets;
pub use self::buckets::{
    ActivateBucketParams, DeactivateBucketParams, GetBucketObjectsParams, GetBucketsParams,
    RegisterBucketParams, UnregisterBucketParams, UpdateBucketParams,
};

mod databases;
pub use self::databases::{
    CreateDatabaseCatalogParams, DeleteDatabaseCatalogParams, GetDatabasesParams,
    UpdateDatabaseParams,
};

mod engines;
pub use self::engines::{
    CreateEngineParams, DeleteEngineParams, GetDeploymentsParams, GetEnginesParams,
    PausePrestoEngineParams, ResumePrestoEngineParams, UpdateEngineParams,
};

mod statements;
pub use self::statements::{ExplainAnalyzeStatementParams, ExplainStatementParams, PostQueryParams};

mod catalogs;
pub use self::catalogs::{
    AddMetastoreToEngineParams, GetHmsParams, GetMetastoresParams, RemoveCatalogFromEngineParams,
};

mod queries;
pub use self::queries::{DeleteQueryParams, GetQueriesParams, SaveQueryParams, UpdateQueryParams};

mod schemas;
pub use self::schemas::{CreateSchemaParams, DeleteSchemaParams, GetSchemasParams};

mod tables;
pub use self::tables::{
    DeleteTableParams, GetTableSnapshotsParams, GetTablesParams, RollbackSnapshotParams,
    UpdateTableParams,
};

mod system;
pub use self::system::{ParseCsvParams, TestLhConsoleParams, UploadJsonParams};


use crate::client::Operation;

/// Header carrying the service instance identifier.
pub const AUTH_INSTANCE_ID: &str = "AuthInstanceId";

/// Header carrying the lakehouse instance identifier of data policy listings.
pub const LH_INSTANCE_ID: &str = "LhInstanceId";

/// Descriptors of every operation the SDK exposes.
pub static OPERATIONS: &[&Operation] = &[
    &access::CREATE_DB_CONN_USERS,
    &access::LIST_DATA_POLICIES,
    &access::CREATE_DATA_POLICY,
    &access::DELETE_DATA_POLICIES,
    &access::GET_ENGINE_USERS,
    &access::DELETE_ENGINE_USERS,
    &access::UPDATE_ENGINE_USERS,
    &access::DELETE_DB_CONN_USERS,
    &access::GET_DB_CONN_USERS,
    &access::UPDATE_DB_CONN_USERS,
    &access::GET_DATA_POLICY,
    &access::REPLACE_DATA_POLICY,
    &access::DELETE_DATA_POLICY,
    &access::GET_DEFAULT_POLICIES,
    &access::GET_POLICY_VERSION,
    &access::CREATE_ENGINE_USERS,
    &access::CREATE_METASTORE_USERS,
    &access::GET_METASTORE_USERS,
    &access::DELETE_METASTORE_USERS,
    &access::UPDATE_METASTORE_USERS,
    &access::CREATE_BUCKET_USERS,
    &access::GET_BUCKET_USERS,
    &access::DELETE_BUCKET_USERS,
    &access::UPDATE_BUCKET_USERS,
    &access::GET_POLICIES_LIST,
    &buckets::GET_BUCKETS,
    &buckets::GET_BUCKET_OBJECTS,
    &buckets::DEACTIVATE_BUCKET,
    &buckets::REGISTER_BUCKET,
    &buckets::UNREGISTER_BUCKET,
    &buckets::UPDATE_BUCKET,
    &buckets::ACTIVATE_BUCKET,
    &databases::GET_DATABASES,
    &databases::CREATE_DATABASE_CATALOG,
    &databases::DELETE_DATABASE_CATALOG,
    &databases::UPDATE_DATABASE,
    &engines::PAUSE_PRESTO_ENGINE,
    &engines::GET_ENGINES,
    &engines::GET_DEPLOYMENTS,
    &engines::UPDATE_ENGINE,
    &engines::CREATE_ENGINE,
    &engines::DELETE_ENGINE,
    &engines::RESUME_PRESTO_ENGINE,
    &statements::EXPLAIN_ANALYZE_STATEMENT,
    &statements::EXPLAIN_STATEMENT,
    &statements::POST_QUERY,
    &catalogs::GET_METASTORES,
    &catalogs::GET_HMS,
    &catalogs::ADD_METASTORE_TO_ENGINE,
    &catalogs::REMOVE_CATALOG_FROM_ENGINE,
    &queries::GET_QUERIES,
    &queries::SAVE_QUERY,
    &queries::DELETE_QUERY,
    &queries::UPDATE_QUERY,
    &schemas::CREATE_SCHEMA,
    &schemas::DELETE_SCHEMA,
    &schemas::GET_SCHEMAS,
    &tables::DELETE_TABLE,
    &tables::UPDATE_TABLE,
    &tables::GET_TABLE_SNAPSHOTS,
    &tables::ROLLBACK_SNAPSHOT,
    &tables::GET_TABLES,
    &system::PARSE_CSV,
    &system::UPLOAD_JSON,
    &system::TEST_LH_CONSOLE,
];
