use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::{ConnectOptions, Database};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use rust_kalakriti::entities::{seed_admin, setup_schema};
use rust_kalakriti::routes::api_router;

pub const ADMIN_PASSWORD: &str = "Secret15admin";

/// Fresh app over an in-memory SQLite database. A single pooled connection
/// keeps the in-memory database alive and shared across requests.
pub async fn setup_app() -> Router {
    std::env::set_var("SECRET", "integration-test-secret");

    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);

    let db = Database::connect(options)
        .await
        .expect("Failed to connect to in-memory database");
    setup_schema(&db).await;
    seed_admin(&db, "admin", ADMIN_PASSWORD).await;

    api_router(Arc::new(db))
}

pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request"),
        None => builder.body(Body::empty()).expect("Failed to build request"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read response body")
        .to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = request(
        app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(serde_json::json!({
            "username": username,
            "password": password
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"].as_str().expect("Token missing").to_string()
}

pub async fn admin_token(app: &Router) -> String {
    login(app, "admin", ADMIN_PASSWORD).await
}
