//! Shared harness: the production router over a fresh in-memory SQLite store per test.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use starwars_api::{app, connect, ensure_tables, AppState, Backend};
use tower::ServiceExt;

pub const TEST_BODY_LIMIT: usize = 64 * 1024;

/// One connection keeps every request on the same in-memory database.
pub async fn test_app() -> Router {
    let pool = connect("sqlite::memory:", 1).await.unwrap();
    ensure_tables(&pool, Backend::Sqlite).await.unwrap();
    app(AppState::new(pool, Backend::Sqlite), TEST_BODY_LIMIT)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_json(response.into_body()).await)
}

pub async fn body_json(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

/// POST /planets and return the created row.
pub async fn create_planet(app: &Router, name: &str) -> Value {
    let (status, json) = post(
        app,
        "/planets",
        serde_json::json!({ "name": name, "description": "arid", "diameter": "10465" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{json}");
    json["data"].clone()
}

/// POST /people and return the created row.
pub async fn create_character(app: &Router, name: &str) -> Value {
    let (status, json) = post(
        app,
        "/people",
        serde_json::json!({ "name": name, "description": "pilot", "gender": "male", "height": 172 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{json}");
    json["data"].clone()
}

/// POST /user and return the created row.
pub async fn create_user(app: &Router, email: &str) -> Value {
    let (status, json) = post(
        app,
        "/user",
        serde_json::json!({ "name": "Test User", "email": email, "password": "secret", "is_active": true }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{json}");
    json["data"].clone()
}
