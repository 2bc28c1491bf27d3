#![allow(missing_docs)]

use std::time::Duration;

use rstest::rstest;
use serde_json::{Value, json};

use lakehouse_sdk::models::GroupsMetadata;
use lakehouse_sdk::service::{
    CreateBucketUsersParams, DeleteQueryParams, GetBucketObjectsParams, GetBucketsParams,
    GetEnginesParams, GetSchemasParams, ParseCsvParams,
};
use lakehouse_sdk::{Authentication, CallHeaders, FileWithMetadata, LakehouseError, RetryConfig};

mod common;
pub use self::common::*;

fn fast_retries(max_retries: usize) -> RetryConfig {
    RetryConfig::default()
        .with_max_retries(max_retries)
        .with_min_delay(Duration::from_millis(5))
        .with_max_retry_interval(Duration::from_millis(20))
        .with_jitter(false)
}

#[rstest]
#[tokio::test]
async fn test_json_body_reaches_service(#[future] service: MockService) -> anyhow::Result<()> {
    let service = service.await;
    let client = service.client();

    let response = client
        .create_bucket_users(CreateBucketUsersParams {
            bucket_id: Some("lake".to_string()),
            groups: Some(vec![GroupsMetadata::new("analysts", "can_access")]),
            ..Default::default()
        })
        .await?;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.as_json()?;
    assert_eq!(body["content_type"], json!("application/json"));
    assert_eq!(
        body["received"],
        json!({
            "bucket_id": "lake",
            "groups": [{"group_id": "analysts", "permission": "can_access"}],
        })
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_query_parameters_are_serialized(
    #[future] service: MockService,
) -> anyhow::Result<()> {
    let service = service.await;
    let client = service.client();

    let response = client
        .get_schemas(GetSchemasParams {
            engine_id: Some("presto-01".to_string()),
            catalog_name: Some("iceberg data".to_string()),
            ..Default::default()
        })
        .await?;

    let body: Value = response.as_json()?;
    assert_eq!(body["query"], json!("engine_id=presto-01&catalog_name=iceberg+data"));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_headers_and_authentication(#[future] service: MockService) -> anyhow::Result<()> {
    let service = service.await;
    let client = service
        .client_builder()
        .with_authentication(Authentication::Bearer("secret-token".into()))
        .build()?;

    let response = client
        .get_engines(GetEnginesParams {
            auth_instance_id: Some("crn:instance".to_string()),
            headers: Some(
                CallHeaders::new().add_header("Accept", "application/vnd.lakehouse+json"),
            ),
        })
        .await?;

    let body: Value = response.as_json()?;
    assert_eq!(
        body,
        json!({
            "accept": "application/vnd.lakehouse+json",
            "authorization": "Bearer secret-token",
            "auth_instance_id": "crn:instance",
        })
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_multipart_upload(#[future] service: MockService) -> anyhow::Result<()> {
    let service = service.await;
    let client = service.client();

    let response = client
        .parse_csv(ParseCsvParams {
            engine: Some("presto-01".to_string()),
            parse_file: Some(
                FileWithMetadata::new("id,name\n1,alice\n")
                    .with_filename("people.csv")
                    .with_content_type("text/csv"),
            ),
            file_type: Some("csv".to_string()),
            ..Default::default()
        })
        .await?;

    let body: Value = response.as_json()?;
    assert_eq!(body["engine"]["text"], json!("presto-01"));
    assert_eq!(body["file_type"]["text"], json!("csv"));
    assert_eq!(
        body["parse_file"],
        json!({"file_name": "people.csv", "content_type": "text/csv", "text": "id,name\n1,alice\n"})
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_streamed_response(#[future] service: MockService) -> anyhow::Result<()> {
    let service = service.await;
    let client = service.client();

    let response = client
        .get_bucket_objects(GetBucketObjectsParams {
            bucket_id: Some("lake".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(response.body().kind(), "stream");
    let bytes = response.bytes().await?;
    assert_eq!(bytes.as_ref(), b"lake/orders.parquet\nlake/customers.parquet\n");
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_service_error(#[future] service: MockService) -> anyhow::Result<()> {
    let service = service.await;
    let client = service.client();

    let error = client
        .delete_query(DeleteQueryParams {
            query_name: Some("nightly".to_string()),
            ..Default::default()
        })
        .await
        .expect_err("the query does not exist");

    assert_eq!(error.status_code(), Some(404));
    let LakehouseError::Service { message, .. } = &error else {
        anyhow::bail!("expected a service error, got {error}");
    };
    assert_eq!(message, "query nightly not found");
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_retries_until_success(#[future] service: MockService) -> anyhow::Result<()> {
    let service = service.await;
    service.state.fail_buckets(2);
    let mut client = service.client();
    client.enable_retries(fast_retries(3));

    let response = client.get_buckets(GetBucketsParams::default()).await?;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(service.state.bucket_calls(), 3);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_no_retry_when_disabled(#[future] service: MockService) -> anyhow::Result<()> {
    let service = service.await;
    service.state.fail_buckets(1);
    let client = service.client();

    let error = client
        .get_buckets(GetBucketsParams::default())
        .await
        .expect_err("the first call fails");

    assert_eq!(error.status_code(), Some(503));
    assert_eq!(service.state.bucket_calls(), 1);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_missing_parameters_skip_the_network(
    #[future] service: MockService,
) -> anyhow::Result<()> {
    let service = service.await;
    let client = service.client();

    let error = client
        .get_bucket_objects(GetBucketObjectsParams::default())
        .await
        .expect_err("bucket_id is required");

    assert!(matches!(
        error,
        LakehouseError::MissingRequiredParameters { operation: "get_bucket_objects", .. }
    ));
    Ok(())
}
