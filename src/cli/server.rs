//! HTTP server mode for paging over the seeded collection
//!
//! Two endpoints serve the same collection with different page-info
//! policies:
//! - `GET /api/projects` - strict
//! - `GET /api/projects-error` - best-effort, honours `conversationRelayId`

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::client::endpoint_path;
use crate::error::{Error, Result};
use crate::pagination::{
    ErrorResponse, PageResponse, PagedResult, Paginator, PolicyKind, RawPaginationArgs,
};
use crate::store::Collection;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Allow cross-origin requests from any origin
    pub cors: bool,
}

/// App state shared across handlers
struct AppState {
    collection: Arc<Collection>,
    strict: Paginator,
    best_effort: Paginator,
}

/// Build the router over a collection
pub fn router(collection: Arc<Collection>, cors: bool) -> Router {
    let state = AppState {
        collection,
        strict: Paginator::for_kind(PolicyKind::Strict),
        best_effort: Paginator::for_kind(PolicyKind::BestEffort),
    };

    let mut app = Router::new()
        .route("/health", get(health))
        .route(endpoint_path(PolicyKind::Strict), get(list_projects))
        .route(endpoint_path(PolicyKind::BestEffort), get(list_projects_best_effort))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state));

    if cors {
        // Allow all origins for the browser client
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    app
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig, collection: Arc<Collection>) -> Result<()> {
    let app = router(collection, config.cors);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| Error::config(format!("Invalid listen address: {e}")))?;
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to {addr}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Strict pagination endpoint
async fn list_projects(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<RawPaginationArgs>, QueryRejection>,
) -> Response {
    page_response(
        query_args(query).and_then(|args| state.strict.paginate(&state.collection, &args)),
    )
}

/// Best-effort pagination endpoint
async fn list_projects_best_effort(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<RawPaginationArgs>, QueryRejection>,
) -> Response {
    page_response(
        query_args(query).and_then(|args| state.best_effort.paginate(&state.collection, &args)),
    )
}

/// Unwrap extracted query args, keeping rejections inside the error envelope
fn query_args(
    query: std::result::Result<Query<RawPaginationArgs>, QueryRejection>,
) -> Result<RawPaginationArgs> {
    query
        .map(|Query(args)| args)
        .map_err(|rejection| Error::InvalidQuery {
            message: rejection.body_text(),
        })
}

/// Wrap a pagination outcome in the response envelope
fn page_response(result: Result<PagedResult>) -> Response {
    match result {
        Ok(data) => (StatusCode::OK, Json(PageResponse { data })).into_response(),
        Err(e) => {
            let status = if e.is_client_error() {
                StatusCode::BAD_REQUEST
            } else {
                tracing::error!("Pagination failed: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
