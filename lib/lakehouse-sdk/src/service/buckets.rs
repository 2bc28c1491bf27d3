//! Bucket registration.

use super::AUTH_INSTANCE_ID;
use crate::client::Operation;
use crate::models::BucketDetails;
use crate::{
    CallHeaders, DetailedResponse, LakehouseClient, LakehouseError, SecureString, Transport,
};

pub(crate) static GET_BUCKETS: Operation = Operation::get("get_buckets", "/buckets");
pub(crate) static GET_BUCKET_OBJECTS: Operation =
    Operation::get("get_bucket_objects", "/buckets/bucket/objects")
        .required(&["bucket_id"])
        .stream();
pub(crate) static DEACTIVATE_BUCKET: Operation =
    Operation::post("deactivate_bucket", "/buckets/bucket/deactivate")
        .required(&["bucket_id"])
        .json_body();
pub(crate) static REGISTER_BUCKET: Operation = Operation::post("register_bucket", "/buckets/bucket")
    .required(&[
        "bucket_details",
        "description",
        "table_type",
        "bucket_type",
        "catalog_name",
        "managed_by",
    ])
    .json_body();
pub(crate) static UNREGISTER_BUCKET: Operation =
    Operation::delete("unregister_bucket", "/buckets/bucket")
        .required(&["bucket_id"])
        .json_body();
pub(crate) static UPDATE_BUCKET: Operation = Operation::patch("update_bucket", "/buckets/bucket")
    .required(&["bucket_id"])
    .json_body();
pub(crate) static ACTIVATE_BUCKET: Operation =
    Operation::post("activate_bucket", "/buckets/bucket/activate")
        .required(&["bucket_id"])
        .json_body();

/// Parameters of [`LakehouseClient::get_buckets`].
#[derive(Debug, Clone, Default)]
pub struct GetBucketsParams {
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::get_bucket_objects`].
#[derive(Debug, Clone, Default)]
pub struct GetBucketObjectsParams {
    /// Bucket identifier.
    pub bucket_id: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::deactivate_bucket`].
#[derive(Debug, Clone, Default)]
pub struct DeactivateBucketParams {
    /// Bucket identifier.
    pub bucket_id: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::register_bucket`].
#[derive(Debug, Clone, Default)]
pub struct RegisterBucketParams {
    /// Object storage connection.
    pub bucket_details: Option<BucketDetails>,
    /// Bucket description.
    pub description: Option<String>,
    /// Table format, e.g. `iceberg`.
    pub table_type: Option<String>,
    /// Storage type, e.g. `amazon_s3`, `minio`.
    pub bucket_type: Option<String>,
    /// Catalog created for the bucket.
    pub catalog_name: Option<String>,
    /// Who manages the bucket, `ibm` or `customer`.
    pub managed_by: Option<String>,
    /// Display name.
    pub bucket_display_name: Option<String>,
    /// Bucket tags.
    pub bucket_tags: Option<Vec<String>>,
    /// Catalog tags.
    pub catalog_tags: Option<Vec<String>>,
    /// Thrift URI of an external metastore.
    pub thrift_uri: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::unregister_bucket`].
#[derive(Debug, Clone, Default)]
pub struct UnregisterBucketParams {
    /// Bucket identifier.
    pub bucket_id: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::update_bucket`].
#[derive(Debug, Clone, Default)]
pub struct UpdateBucketParams {
    /// Bucket identifier.
    pub bucket_id: Option<String>,
    /// New access key.
    pub access_key: Option<SecureString>,
    /// New display name.
    pub bucket_display_name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New secret key.
    pub secret_key: Option<SecureString>,
    /// New tags.
    pub tags: Option<Vec<String>>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

/// Parameters of [`LakehouseClient::activate_bucket`].
#[derive(Debug, Clone, Default)]
pub struct ActivateBucketParams {
    /// Bucket identifier.
    pub bucket_id: Option<String>,
    /// Sent as the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Headers overriding the computed ones.
    pub headers: Option<CallHeaders>,
}

impl<T: Transport> LakehouseClient<T> {
    /// Lists registered buckets.
    ///
    /// # Errors
    ///
    /// Fails if the call fails or the service answers with an error.
    pub async fn get_buckets(
        &self,
        params: GetBucketsParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let GetBucketsParams {
            auth_instance_id,
            headers,
        } = params;
        self.operation(&GET_BUCKETS)
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Lists the objects of a bucket.
    ///
    /// The listing is returned as a byte stream, see
    /// [`DetailedResponse::into_stream`].
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `bucket_id` is missing.
    pub async fn get_bucket_objects(
        &self,
        params: GetBucketObjectsParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let GetBucketObjectsParams {
            bucket_id,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&GET_BUCKET_OBJECTS)
            .query_param("bucket_id", bucket_id)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Deactivates a bucket.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `bucket_id` is missing.
    pub async fn deactivate_bucket(
        &self,
        params: DeactivateBucketParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let DeactivateBucketParams {
            bucket_id,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&DEACTIVATE_BUCKET)
            .body_field("bucket_id", bucket_id)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Registers a bucket and creates its catalog.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `bucket_details`, `description`,
    /// `table_type`, `bucket_type`, `catalog_name` or `managed_by` is missing.
    pub async fn register_bucket(
        &self,
        params: RegisterBucketParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let RegisterBucketParams {
            bucket_details,
            description,
            table_type,
            bucket_type,
            catalog_name,
            managed_by,
            bucket_display_name,
            bucket_tags,
            catalog_tags,
            thrift_uri,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&REGISTER_BUCKET)
            .body_field("bucket_details", bucket_details)?
            .body_field("description", description)?
            .body_field("table_type", table_type)?
            .body_field("bucket_type", bucket_type)?
            .body_field("catalog_name", catalog_name)?
            .body_field("managed_by", managed_by)?
            .body_field("bucket_display_name", bucket_display_name)?
            .body_field("bucket_tags", bucket_tags)?
            .body_field("catalog_tags", catalog_tags)?
            .body_field("thrift_uri", thrift_uri)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Unregisters a bucket.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `bucket_id` is missing.
    pub async fn unregister_bucket(
        &self,
        params: UnregisterBucketParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let UnregisterBucketParams {
            bucket_id,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&UNREGISTER_BUCKET)
            .body_field("bucket_id", bucket_id)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Updates a bucket's credentials or metadata.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `bucket_id` is missing.
    pub async fn update_bucket(
        &self,
        params: UpdateBucketParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let UpdateBucketParams {
            bucket_id,
            access_key,
            bucket_display_name,
            description,
            secret_key,
            tags,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&UPDATE_BUCKET)
            .body_field("bucket_id", bucket_id)?
            .body_field("access_key", access_key)?
            .body_field("bucket_display_name", bucket_display_name)?
            .body_field("description", description)?
            .body_field("secret_key", secret_key)?
            .body_field("tags", tags)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }

    /// Activates a bucket.
    ///
    /// # Errors
    ///
    /// Fails without calling the service if `bucket_id` is missing.
    pub async fn activate_bucket(
        &self,
        params: ActivateBucketParams,
    ) -> Result<DetailedResponse, LakehouseError> {
        let ActivateBucketParams {
            bucket_id,
            auth_instance_id,
            headers,
        } = params;
        self.operation(&ACTIVATE_BUCKET)
            .body_field("bucket_id", bucket_id)?
            .header_param(AUTH_INSTANCE_ID, auth_instance_id)
            .with_headers_option(headers)
            .await
    }
}
