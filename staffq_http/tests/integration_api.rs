//! End-to-end tests over the HTTP router with a seeded in-memory store.
//!
//! These tests verify that:
//! - Every taxonomy outcome is rendered as HTTP 200 JSON
//! - List answers arrive as arrays and text answers as plain strings
//! - The embedded page is served at the root

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use std::sync::Arc;

use staffq_config::ServerConfig;
use staffq_core::QueryDispatcher;
use staffq_directory::DirectoryStore;
use staffq_http::{ApiState, create_router};
use staffq_nlp::PatternRecognizer;
use tower::ServiceExt;

async fn router() -> Router {
    let store = DirectoryStore::connect("sqlite::memory:")
        .await
        .expect("in-memory database should connect");
    store
        .initialize()
        .await
        .expect("initialization should succeed");

    let recognizer = PatternRecognizer::with_defaults().expect("default patterns should compile");
    let state = Arc::new(ApiState::new(QueryDispatcher::new(store, recognizer)));

    create_router(state, &ServerConfig::default())
}

async fn post_query(router: Router, query: &str) -> serde_json::Value {
    let request = Request::builder()
        .method("POST")
        .uri("/query")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({ "query": query }).to_string(),
        ))
        .expect("request should build");

    let response = router
        .oneshot(request)
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("response should be JSON")
}

#[tokio::test]
async fn test_employees_by_department() {
    let value = post_query(router().await, "Which employees work in Sales?").await;
    assert_eq!(value["response"], serde_json::json!(["Alice", "David"]));
}

#[tokio::test]
async fn test_manager_by_department() {
    let value = post_query(router().await, "Who is the manager of Sales?").await;
    assert_eq!(value["response"], serde_json::json!("Alice"));
}

#[tokio::test]
async fn test_hired_after_date() {
    let value = post_query(router().await, "Who was hired after 2021-01-01?").await;
    assert_eq!(
        value["response"],
        serde_json::json!(["Alice", "Charlie", "David", "Frank"])
    );
}

#[tokio::test]
async fn test_hired_after_spoken_date_is_silent() {
    // "last week" is extracted verbatim and matches no ISO hire date.
    let value = post_query(router().await, "Anyone hired after last week?").await;
    assert_eq!(value["response"], serde_json::json!("No employees found."));
}

#[tokio::test]
async fn test_hired_after_without_date() {
    let value = post_query(router().await, "Who was hired after the reorg?").await;
    assert_eq!(
        value["response"],
        serde_json::json!("Invalid date format. Use YYYY-MM-DD.")
    );
}

#[tokio::test]
async fn test_salary_expense() {
    let value = post_query(
        router().await,
        "What is the salary expense for Engineering?",
    )
    .await;
    assert_eq!(
        value["response"],
        serde_json::json!("Total salary expense for Engineering: 145000")
    );
}

#[tokio::test]
async fn test_recognized_but_unseeded_department_is_silent() {
    // The recognizer tags "Initech Inc" as an organization; the store then
    // matches nothing, and the outcome is the usual empty-result message.
    let value = post_query(router().await, "Do any employees work at Initech Inc?").await;
    assert_eq!(value["response"], serde_json::json!("No employees found."));
}

#[tokio::test]
async fn test_unsupported_query() {
    let value = post_query(router().await, "what is the weather").await;
    assert_eq!(
        value["response"],
        serde_json::json!("Unsupported query. Try another question.")
    );
}

#[tokio::test]
async fn test_index_page() {
    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .expect("request should build");

    let response = router()
        .await
        .oneshot(request)
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    let body = String::from_utf8_lossy(&bytes);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("staffq"));
}
