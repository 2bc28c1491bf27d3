#![allow(dead_code, missing_docs, clippy::expect_used)]

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{Json, Router};
use axum::extract::{Multipart, Path, RawQuery, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use rstest::fixture;
use serde_json::{Map, Value, json};
use tokio::task::JoinHandle;
use tracing::info;

use lakehouse_sdk::{LakehouseClient, LakehouseClientBuilder};

pub fn init_tracing() {
    // should be run once, fail otherwise, we skip that error
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// State shared by the mock routes.
#[derive(Debug, Clone, Default)]
pub struct MockState {
    /// Number of `503` answers of `GET /buckets` before it succeeds.
    pub bucket_failures: Arc<AtomicUsize>,
    /// Number of `GET /buckets` calls received.
    pub bucket_calls: Arc<AtomicUsize>,
}

impl MockState {
    pub fn fail_buckets(&self, count: usize) {
        self.bucket_failures.store(count, Ordering::SeqCst);
    }

    pub fn bucket_calls(&self) -> usize {
        self.bucket_calls.load(Ordering::SeqCst)
    }
}

/// A minimal lakehouse service listening on a random local port.
#[derive(Debug)]
pub struct MockService {
    pub addr: SocketAddr,
    pub state: MockState,
    handle: JoinHandle<()>,
}

impl MockService {
    pub async fn start() -> anyhow::Result<Self> {
        let state = MockState::default();
        let api = Router::new()
            .route("/access/buckets", post(create_bucket_users))
            .route("/buckets", get(get_buckets))
            .route("/buckets/bucket/objects", get(get_bucket_objects))
            .route("/engines", get(echo_headers))
            .route("/schemas", get(echo_query))
            .route("/parse/csv", post(parse_csv))
            .route("/queries/{query_name}", delete(delete_query))
            .with_state(state.clone());
        let router = Router::new().nest("/lakehouse/api/v1", api);

        let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
        let addr = listener.local_addr()?;
        info!(%addr, "mock service listening");
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self {
            addr,
            state,
            handle,
        })
    }

    pub fn service_url(&self) -> String {
        format!("http://{}/lakehouse/api/v1", self.addr)
    }

    pub fn client_builder(&self) -> LakehouseClientBuilder {
        LakehouseClient::builder().with_service_url(self.service_url())
    }

    pub fn client(&self) -> LakehouseClient {
        self.client_builder().build().expect("a valid client")
    }
}

impl Drop for MockService {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[fixture]
pub async fn service() -> MockService {
    init_tracing();
    match MockService::start().await {
        Ok(service) => service,
        Err(error) => panic!("fail to start mock service: {error:?}"),
    }
}

fn header(headers: &HeaderMap, name: &str) -> Value {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map_or(Value::Null, |value| Value::String(value.to_string()))
}

async fn create_bucket_users(headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
    (
        StatusCode::CREATED,
        Json(json!({
            "content_type": header(&headers, "content-type"),
            "received": body,
        })),
    )
}

async fn get_buckets(State(state): State<MockState>) -> impl IntoResponse {
    let call = state.bucket_calls.fetch_add(1, Ordering::SeqCst);
    if call < state.bucket_failures.load(Ordering::SeqCst) {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"message": "warming up"})),
        )
    } else {
        (StatusCode::OK, Json(json!({"buckets": [{"bucket_id": "lake"}]})))
    }
}

async fn get_bucket_objects(RawQuery(query): RawQuery) -> impl IntoResponse {
    if query.as_deref() != Some("bucket_id=lake") {
        return (StatusCode::BAD_REQUEST, [(CONTENT_TYPE, "text/plain")], String::new());
    }
    (
        StatusCode::OK,
        [(CONTENT_TYPE, "text/plain")],
        "lake/orders.parquet\nlake/customers.parquet\n".to_string(),
    )
}

async fn echo_headers(headers: HeaderMap) -> Json<Value> {
    Json(json!({
        "accept": header(&headers, "accept"),
        "authorization": header(&headers, "authorization"),
        "auth_instance_id": header(&headers, "authinstanceid"),
    }))
}

async fn echo_query(RawQuery(query): RawQuery) -> Json<Value> {
    Json(json!({"query": query}))
}

async fn parse_csv(mut multipart: Multipart) -> Result<Json<Value>, StatusCode> {
    let mut parts = Map::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?
    {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let text = field.text().await.map_err(|_| StatusCode::BAD_REQUEST)?;
        parts.insert(
            name,
            json!({"file_name": file_name, "content_type": content_type, "text": text}),
        );
    }
    Ok(Json(Value::Object(parts)))
}

async fn delete_query(Path(query_name): Path<String>) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"message": format!("query {query_name} not found")})),
    )
}
