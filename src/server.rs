//! Search-as-you-type HTTP server.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/` | Full page with the search box (no query processing) |
//! | `GET`  | `/search?q=` | Results fragment for incremental page updates |
//! | `GET`  | `/api/search?q=` | The same result as JSON |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! A missing `q` parameter is treated as the empty string.
//!
//! # Error Contract
//!
//! Failures while listing records or rendering a view are returned as
//! `500` with a JSON body:
//!
//! ```json
//! { "error": { "code": "internal", "message": "Failed to render results fragment" } }
//! ```

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use typeahead_core::filter::{filter_with, FilterParams, QueryResult};
use typeahead_core::store::RecordStore;

use crate::views;

/// Shared application state passed to all route handlers via Axum's `State` extractor.
///
/// Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RecordStore>,
    params: FilterParams,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, params: FilterParams) -> Self {
        Self { store, params }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/search", get(handle_search))
        .route("/api/search", get(handle_api_search))
        .route("/health", get(handle_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the HTTP server on `bind_addr`.
///
/// Runs until Ctrl-C is received, then drains in-flight requests.
pub async fn run_server(bind_addr: &str, state: AppState) -> anyhow::Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    /// Machine-readable error code.
    code: String,
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
#[derive(Debug)]
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        error!("request failed: {:#}", err);
        AppError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "internal".to_string(),
            message: err.to_string(),
        }
    }
}

// ============ Handlers ============

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

async fn run_query(state: &AppState, query: &str) -> Result<QueryResult, AppError> {
    let records = state.store.list_all_records().await?;
    let result = filter_with(&state.params, query, &records);
    debug!(
        query,
        matches = result.matches.len(),
        too_short = result.query_too_short,
        "filtered records"
    );
    Ok(result)
}

/// Handler for `GET /`.
async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(views::render_index(state.params.min_query_chars)?))
}

/// Handler for `GET /search`.
async fn handle_search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>, AppError> {
    let result = run_query(&state, &query.q).await?;
    Ok(Html(views::render_results(
        &result,
        state.params.min_query_chars,
    )?))
}

/// Handler for `GET /api/search`.
async fn handle_api_search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<QueryResult>, AppError> {
    Ok(Json(run_query(&state, &query.q).await?))
}

#[derive(Serialize)]
struct HealthResponse {
    /// Always `"ok"` when the server is running.
    status: String,
    version: String,
}

/// Handler for `GET /health`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
