//! HTTP request handlers for the planner service.
//!
//! Implements session establishment, natural-language task creation, task
//! listing and a health check using axum.

use crate::session::{SessionError, SessionManager, SessionResponse};
use crate::store::{InMemoryTaskStore, StoreError};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use planner_domain::{ExtractedTask, NewTask, Task, TaskStore};
use planner_extractor::TaskExtractor;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Session manager for JWT token operations
    pub session_manager: Arc<SessionManager>,
    /// Natural-language field extractor
    pub extractor: Arc<TaskExtractor>,
    /// Task storage
    pub store: InMemoryTaskStore,
    /// Whether natural-language entry is accepted
    pub natural_language_enabled: bool,
}

/// Session establishment request
#[derive(Debug, Deserialize)]
pub struct EstablishSessionRequest {
    /// Optional user ID, defaults to "default-user"
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Response for a task created from natural language
#[derive(Debug, Serialize, Deserialize)]
pub struct NaturalLanguageTaskResponse {
    /// Always true on success
    pub success: bool,
    /// The stored task
    pub task: Task,
    /// Fields the extractor derived from the input
    pub parsed_data: ExtractedTask,
}

/// Task listing response
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskListResponse {
    /// The caller's tasks, oldest first
    pub tasks: Vec<Task>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Number of stored tasks
    pub task_count: usize,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Underlying cause, when there is one worth showing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Missing or invalid session
    Unauthorized,
    /// Natural-language entry is switched off
    FeatureDisabled,
    /// Request failed validation
    BadRequest(String),
    /// Session-related error
    SessionError(SessionError),
    /// Storage failure
    StoreError(StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string(), None),
            AppError::FeatureDisabled => (
                StatusCode::FORBIDDEN,
                "Natural language task entry is disabled".to_string(),
                None,
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::SessionError(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                Some(e.to_string()),
            ),
            AppError::StoreError(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
                Some(e.to_string()),
            ),
        };

        let body = Json(ErrorResponse { error, details });
        (status, body).into_response()
    }
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        AppError::SessionError(e)
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::StoreError(e)
    }
}

/// Resolve the calling user from the bearer token
fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<String, AppError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    match state.session_manager.validate_bearer(header) {
        Ok(claims) => Ok(claims.user_id),
        Err(e) => {
            warn!("Rejected session: {}", e);
            Err(AppError::Unauthorized)
        }
    }
}

/// POST /session/establish - Establish a new session
async fn establish_session(
    State(state): State<AppState>,
    Json(request): Json<EstablishSessionRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let user_id = request.user_id.unwrap_or_else(|| "default-user".to_string());

    let token = state.session_manager.generate_token(&user_id)?;

    Ok(Json(SessionResponse {
        token,
        user_id,
        expires_in: state.session_manager.token_expiry_secs(),
    }))
}

/// POST /api/tasks/natural-language - Create a task from free text
///
/// Body: `{ "natural_language_input": string, "list_id"?: number }`
async fn create_natural_language_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<NaturalLanguageTaskResponse>), AppError> {
    let user_id = authenticate(&state, &headers)?;

    if !state.natural_language_enabled {
        return Err(AppError::FeatureDisabled);
    }

    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let input = body
        .get("natural_language_input")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            AppError::BadRequest(
                "Natural language input is required and must be a string".to_string(),
            )
        })?;

    let list_id = match body.get("list_id") {
        None | Some(Value::Null) => None,
        Some(value) => Some(
            value
                .as_i64()
                .ok_or_else(|| AppError::BadRequest("list_id must be an integer".to_string()))?,
        ),
    };

    // Whitespace-only input gets this far and yields an empty title
    let parsed = state.extractor.extract(input);
    if !parsed.has_title() {
        return Err(AppError::BadRequest(
            "Could not extract task title from input".to_string(),
        ));
    }

    let task = state
        .store
        .create_task(NewTask::from_extracted(user_id, list_id, parsed.clone()))?;

    info!(
        "Created task {} for user '{}' (priority {}, due {:?})",
        task.id, task.user_id, task.priority, task.due_date
    );

    Ok((
        StatusCode::CREATED,
        Json(NaturalLanguageTaskResponse {
            success: true,
            task,
            parsed_data: parsed,
        }),
    ))
}

/// GET /api/tasks - List the caller's tasks
async fn list_tasks(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<TaskListResponse>, AppError> {
    let user_id = authenticate(&state, &headers)?;
    let tasks = state.store.list_tasks(&user_id)?;
    Ok(Json(TaskListResponse { tasks }))
}

/// GET /health - Health check
async fn health_check(State(state): State<AppState>) -> Result<Json<HealthCheckResponse>, AppError> {
    Ok(Json(HealthCheckResponse {
        status: "healthy".to_string(),
        task_count: state.store.count()?,
    }))
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/session/establish", post(establish_session))
        .route("/api/tasks/natural-language", post(create_natural_language_task))
        .route("/api/tasks", get(list_tasks))
        .route("/health", get(health_check))
        .with_state(state)
}
