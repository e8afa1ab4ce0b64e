//! HTTP surface over the JSON-file store.
//!
//! One route pair per collection, all sharing the same generic handlers:
//!
//! - `GET /<collection>` - full array
//! - `POST /<collection>` - validate + create
//! - `GET /<collection>/:id` - single record
//! - `PUT /<collection>/:id` - partial merge + re-validate
//! - `DELETE /<collection>/:id` - permanent removal
//!
//! Validation failures answer 400 with per-field details, missing records
//! 404, store faults 500 with a generic message (the detail is logged, not
//! leaked).

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde_json::json;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

use crate::models::{CrmRecord, Customer, Sale, Task};
use crate::store::{JsonFileStore, StoreError};

/// Shared state for the API server.
#[derive(Clone)]
pub struct ApiState {
    /// The flat-file store backing every collection.
    pub store: Arc<JsonFileStore>,
}

impl ApiState {
    /// Create state around a store.
    pub fn new(store: Arc<JsonFileStore>) -> Self {
        Self { store }
    }
}

/// Build the full API router.
pub fn build_router(state: ApiState) -> Router {
    // Permissive CORS: the dashboard is served from a different origin in
    // local development.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/customers",
            get(list_records::<Customer>).post(create_record::<Customer>),
        )
        .route(
            "/customers/:id",
            get(get_record::<Customer>)
                .put(update_record::<Customer>)
                .delete(delete_record::<Customer>),
        )
        .route("/tasks", get(list_records::<Task>).post(create_record::<Task>))
        .route(
            "/tasks/:id",
            get(get_record::<Task>)
                .put(update_record::<Task>)
                .delete(delete_record::<Task>),
        )
        .route("/sales", get(list_records::<Sale>).post(create_record::<Sale>))
        .route(
            "/sales/:id",
            get(get_record::<Sale>)
                .put(update_record::<Sale>)
                .delete(delete_record::<Sale>),
        )
        .layer(cors)
        .with_state(state)
}

/// Bind `addr` and serve the API in a background task.
///
/// Returns the task handle and the actual bound address (useful with port
/// 0 in tests).
pub async fn start_server(
    addr: SocketAddr,
    store: Arc<JsonFileStore>,
) -> color_eyre::Result<(JoinHandle<()>, SocketAddr)> {
    let app = build_router(ApiState::new(store));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(%local_addr, "persistence backend listening");

    let handle = tokio::spawn(async move {
        if let Err(error) = axum::serve(listener, app).await {
            tracing::error!(%error, "api server terminated");
        }
    });

    Ok((handle, local_addr))
}

/// Map a store failure onto the response the original API shape promises.
fn error_response<R: CrmRecord>(error: StoreError) -> Response {
    // All three collection names are plural-'s'; the label is the singular.
    let label = R::COLLECTION.trim_end_matches('s');
    match error {
        StoreError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("{} not found", capitalize(label)) })),
        )
            .into_response(),
        StoreError::Validation(validation) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": format!("Invalid {} data", label),
                "details": validation.issues,
            })),
        )
            .into_response(),
        StoreError::Io { .. } | StoreError::Format { .. } => {
            tracing::error!(collection = R::COLLECTION, %error, "store failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": format!("Failed to access {}", R::COLLECTION) })),
            )
                .into_response()
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

async fn list_records<R: CrmRecord>(State(state): State<ApiState>) -> Response {
    tracing::debug!(collection = R::COLLECTION, "list");
    match state.store.list::<R>() {
        Ok(records) => Json(records).into_response(),
        Err(error) => error_response::<R>(error),
    }
}

async fn get_record<R: CrmRecord>(
    State(state): State<ApiState>,
    Path(id): Path<u64>,
) -> Response {
    tracing::debug!(collection = R::COLLECTION, id, "get");
    match state.store.get::<R>(id) {
        Ok(record) => Json(record).into_response(),
        Err(error) => error_response::<R>(error),
    }
}

async fn create_record<R: CrmRecord>(
    State(state): State<ApiState>,
    Json(draft): Json<R::Draft>,
) -> Response {
    tracing::debug!(collection = R::COLLECTION, "create");
    match state.store.create::<R>(draft) {
        Ok(record) => Json(record).into_response(),
        Err(error) => error_response::<R>(error),
    }
}

async fn update_record<R: CrmRecord>(
    State(state): State<ApiState>,
    Path(id): Path<u64>,
    Json(patch): Json<R::Patch>,
) -> Response {
    tracing::debug!(collection = R::COLLECTION, id, "update");
    match state.store.update::<R>(id, patch) {
        Ok(record) => Json(record).into_response(),
        Err(error) => error_response::<R>(error),
    }
}

async fn delete_record<R: CrmRecord>(
    State(state): State<ApiState>,
    Path(id): Path<u64>,
) -> Response {
    tracing::debug!(collection = R::COLLECTION, id, "delete");
    match state.store.delete::<R>(id) {
        Ok(()) => Json(json!({ "success": true })).into_response(),
        Err(error) => error_response::<R>(error),
    }
}
