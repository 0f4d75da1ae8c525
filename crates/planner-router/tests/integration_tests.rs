//! Integration tests for the Router service

use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    Router,
};
use chrono::NaiveDate;
use planner_domain::Priority;
use planner_router::{
    build_state,
    config::RouterConfig,
    handlers::{
        create_router, ErrorResponse, HealthCheckResponse, NaturalLanguageTaskResponse,
        TaskListResponse,
    },
    session::SessionResponse,
};
use serde::de::DeserializeOwned;
use tower::ServiceExt; // for oneshot

/// Helper to create a router over a fresh store
fn create_test_app() -> Router {
    let state = build_state(&RouterConfig::default_test_config()).unwrap();
    create_router(state)
}

async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn establish(app: &Router, user_id: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/session/establish")
        .header("content-type", "application/json")
        .body(Body::from(format!(r#"{{"user_id": "{}"}}"#, user_id)))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let session: SessionResponse = read_json(response).await;
    session.token
}

async fn post_task(app: &Router, token: Option<&str>, body: &str) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/tasks/natural-language")
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    app.clone()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = create_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let health: HealthCheckResponse = read_json(response).await;
    assert_eq!(health.status, "healthy");
    assert_eq!(health.task_count, 0);
}

#[tokio::test]
async fn test_establish_session_default_user() {
    let app = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/session/establish")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let session: SessionResponse = read_json(response).await;
    assert_eq!(session.user_id, "default-user");
    assert_eq!(session.expires_in, 3600);
    assert!(!session.token.is_empty());
}

#[tokio::test]
async fn test_create_task_from_natural_language() {
    let app = create_test_app();
    let token = establish(&app, "alice").await;

    let response = post_task(
        &app,
        Some(&token),
        r#"{"natural_language_input": "Ship release 2030-03-15 - urgent, about 3 hours. Remind me at 4pm", "list_id": 7}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: NaturalLanguageTaskResponse = read_json(response).await;
    assert!(created.success);
    assert_eq!(created.parsed_data.title, "Ship release 2030");
    assert_eq!(created.parsed_data.priority, Priority::High);
    assert_eq!(
        created.parsed_data.due_date,
        NaiveDate::from_ymd_opt(2030, 3, 15)
    );
    assert_eq!(created.parsed_data.estimate, Some(180));
    assert_eq!(created.parsed_data.reminders, vec!["16:00"]);

    assert_eq!(created.task.user_id, "alice");
    assert_eq!(created.task.list_id, Some(7));
    assert_eq!(created.task.title, created.parsed_data.title);
    assert_eq!(created.task.priority, Priority::High);
}

#[tokio::test]
async fn test_created_tasks_are_listed_per_user() {
    let app = create_test_app();
    let alice = establish(&app, "alice").await;
    let bob = establish(&app, "bob").await;

    for input in ["Buy milk", "Call mom tomorrow"] {
        let body = format!(r#"{{"natural_language_input": "{}"}}"#, input);
        let response = post_task(&app, Some(&alice), &body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    let response = post_task(&app, Some(&bob), r#"{"natural_language_input": "Walk dog"}"#).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let request = Request::builder()
        .method("GET")
        .uri("/api/tasks")
        .header("authorization", format!("Bearer {}", alice))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listed: TaskListResponse = read_json(response).await;
    let titles: Vec<_> = listed.tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Buy milk", "Call mom tomorrow"]);
    assert!(listed.tasks[1].due_date.is_some());

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let health: HealthCheckResponse = read_json(app.oneshot(request).await.unwrap()).await;
    assert_eq!(health.task_count, 3);
}

#[tokio::test]
async fn test_missing_input_is_rejected() {
    let app = create_test_app();
    let token = establish(&app, "alice").await;

    for body in [
        r#"{}"#,
        r#"{"natural_language_input": 42}"#,
        r#"{"natural_language_input": ""}"#,
    ] {
        let response = post_task(&app, Some(&token), body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = read_json(response).await;
        assert_eq!(
            error.error,
            "Natural language input is required and must be a string"
        );
    }
}

#[tokio::test]
async fn test_blank_input_has_no_title() {
    let app = create_test_app();
    let token = establish(&app, "alice").await;

    let response = post_task(&app, Some(&token), r#"{"natural_language_input": "   "}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "Could not extract task title from input");
}

#[tokio::test]
async fn test_non_integer_list_id_is_rejected() {
    let app = create_test_app();
    let token = establish(&app, "alice").await;

    let response = post_task(
        &app,
        Some(&token),
        r#"{"natural_language_input": "Buy milk", "list_id": "groceries"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "list_id must be an integer");
}

#[tokio::test]
async fn test_invalid_token_is_unauthorized() {
    let app = create_test_app();

    let response = post_task(
        &app,
        Some("not-a-token"),
        r#"{"natural_language_input": "Buy milk"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "Unauthorized");
    assert!(error.details.is_none());
}

#[tokio::test]
async fn test_list_requires_session() {
    let app = create_test_app();

    let request = Request::builder()
        .uri("/api/tasks")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
