//! JSON HTTP API over the service layer
//!
//! Routes:
//! - `GET /health`
//! - `POST /api/spec` generate and parse a specification
//! - `POST /api/tasks` extract tasks from raw text
//! - `POST /api/apply` apply a task to the workspace
//! - `GET|POST|DELETE /api/files` list, read, write, delete workspace files
//!
//! Request bodies are parsed leniently: a missing or malformed body is
//! treated as an empty object. Mutating routes share one lock per
//! workspace so the notes-file append cannot lose updates between requests.

use crate::services::{self, file_service};
use crate::workspace::WorkspaceError;
use crate::{AppContext, Result};
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

// =============================================================================
// Application State
// =============================================================================

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub ctx: Arc<AppContext>,
    /// Serialises workspace mutations
    write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self {
            ctx,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}

// =============================================================================
// Request Models
// =============================================================================

#[derive(Debug, Default, Deserialize)]
struct SpecRequest {
    prompt: Option<String>,
    system: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct TasksRequest {
    raw: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ApplyRequest {
    task: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileRequest {
    path: Option<String>,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FileQuery {
    path: Option<String>,
}

fn lenient_json<T: DeserializeOwned + Default>(body: &Bytes) -> T {
    serde_json::from_slice(body).unwrap_or_default()
}

fn required_path(path: Option<String>) -> std::result::Result<String, ApiError> {
    path.filter(|p| !p.is_empty())
        .ok_or(ApiError::BadRequest("path required"))
}

// =============================================================================
// Errors
// =============================================================================

enum ApiError {
    BadRequest(&'static str),
    Workspace(WorkspaceError),
}

impl From<WorkspaceError> for ApiError {
    fn from(e: WorkspaceError) -> Self {
        ApiError::Workspace(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.to_string()),
            ApiError::Workspace(WorkspaceError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "not found".to_string())
            }
            ApiError::Workspace(e @ WorkspaceError::UnsafePath(_)) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            ApiError::Workspace(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

type ApiResult = std::result::Result<Response, ApiError>;

// =============================================================================
// Router
// =============================================================================

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/spec", post(api_spec))
        .route("/api/tasks", post(api_tasks))
        .route("/api/apply", post(api_apply))
        .route(
            "/api/files",
            get(api_files_get).post(api_files_post).delete(api_files_delete),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState::new(ctx))
}

/// Serve the API on 127.0.0.1 until the process is stopped
pub async fn start_server(ctx: Arc<AppContext>, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let workspace = ctx.store.root().display().to_string();
    let app = build_router(ctx);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, %workspace, "kiro-lite server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

// =============================================================================
// Handlers
// =============================================================================

async fn health_check() -> &'static str {
    "OK"
}

async fn api_spec(State(state): State<AppState>, body: Bytes) -> Response {
    let request: SpecRequest = lenient_json(&body);
    let result =
        services::generate_spec(&state.ctx, request.prompt.as_deref(), request.system.as_deref())
            .await;
    Json(result).into_response()
}

async fn api_tasks(State(state): State<AppState>, body: Bytes) -> Response {
    let request: TasksRequest = lenient_json(&body);
    let tasks = services::extract_tasks(&state.ctx, request.raw.as_deref().unwrap_or_default());
    Json(json!({ "tasks": tasks })).into_response()
}

async fn api_apply(State(state): State<AppState>, body: Bytes) -> ApiResult {
    let request: ApplyRequest = lenient_json(&body);
    let _guard = state.write_lock.lock().await;
    let result = services::apply_task(&state.ctx, request.task.as_deref())?;
    Ok(Json(result).into_response())
}

async fn api_files_get(State(state): State<AppState>, Query(query): Query<FileQuery>) -> ApiResult {
    match query.path.filter(|p| !p.is_empty()) {
        Some(path) => {
            let file = file_service::read_file(&state.ctx, &path)?;
            Ok(Json(file).into_response())
        }
        None => {
            let files = file_service::list_files(&state.ctx);
            Ok(Json(json!({ "files": files })).into_response())
        }
    }
}

async fn api_files_post(State(state): State<AppState>, body: Bytes) -> ApiResult {
    let request: FileRequest = lenient_json(&body);
    let path = required_path(request.path)?;
    let content = request.content.unwrap_or_default();

    let _guard = state.write_lock.lock().await;
    file_service::write_file(&state.ctx, &path, &content)?;
    Ok(Json(json!({ "ok": true })).into_response())
}

async fn api_files_delete(State(state): State<AppState>, body: Bytes) -> ApiResult {
    let request: FileRequest = lenient_json(&body);
    let path = required_path(request.path)?;

    let _guard = state.write_lock.lock().await;
    file_service::delete_file(&state.ctx, &path)?;
    Ok(Json(json!({ "ok": true })).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::KiroConfig;
    use crate::orchestrator::SpecGenerator;
    use axum::body::Body;
    use axum::http::Request;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn router(temp_dir: &TempDir) -> Router {
        let config = KiroConfig {
            workspace: temp_dir.path().join("ws"),
            ..Default::default()
        };
        let ctx = AppContext::with_generator(config, SpecGenerator::fallback()).unwrap();
        build_router(Arc::new(ctx))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let temp_dir = TempDir::new().unwrap();
        let app = router(&temp_dir);

        let (status, body) = send(&app, "GET", "/health", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn test_malformed_body_treated_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let app = router(&temp_dir);

        let (status, body) = send(&app, "POST", "/api/tasks", "{not json").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["tasks"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_write_requires_path() {
        let temp_dir = TempDir::new().unwrap();
        let app = router(&temp_dir);

        let (status, body) = send(&app, "POST", "/api/files", r#"{"content":"x"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("path required"));

        let (status, _) = send(&app, "DELETE", "/api/files", "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unsafe_path_is_bad_request() {
        let temp_dir = TempDir::new().unwrap();
        let app = router(&temp_dir);

        let (status, body) = send(&app, "GET", "/api/files?path=../secret", "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("unsafe path"));
    }
}
