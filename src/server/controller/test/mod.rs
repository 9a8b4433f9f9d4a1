mod club;
mod member;

use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};

/// Builds the application router over a fresh in-memory database.
///
/// The context is returned alongside so the database outlives the router.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    (test, router(AppState::new(db), Duration::from_secs(5)))
}

/// Sends a request and returns the status with the decoded JSON body.
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

/// Tests that the OpenAPI document lists the club endpoints.
///
/// Expected: 200 OK with `/club` and `/brawl/{id}` among the paths
#[tokio::test]
async fn serves_openapi_document() {
    let (_test, app) = setup().await;

    let (status, body) = get(&app, "/api/docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/club"].is_object());
    assert!(body["paths"]["/brawl/{id}"].is_object());
    assert!(body["paths"]["/member/club"]["post"].is_object());
}

/// Tests that persistence failures surface as a generic 500.
///
/// Verifies that a request against a database without tables returns the
/// error envelope without leaking database details.
///
/// Expected: 500 with "Internal server error"
#[tokio::test]
async fn hides_database_errors() {
    let test = TestBuilder::new().build().await.unwrap();
    let app = router(
        AppState::new(test.db.clone().unwrap()),
        Duration::from_secs(5),
    );

    let (status, body) = get(&app, "/club").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "success": false, "error": "Internal server error" })
    );
}
