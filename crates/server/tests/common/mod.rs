//! Shared test harness: an app router over a fresh in-memory database.

// Not every test binary uses every helper.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use secrecy::SecretString;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use storeroom_server::config::ServerConfig;
use storeroom_server::db::MIGRATOR;
use storeroom_server::state::AppState;

/// Build the full application router over a fresh in-memory store with
/// migrations applied.
pub async fn test_app() -> Router {
    // Every connection to sqlite::memory: is its own database, so the pool
    // must be capped at a single connection.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    MIGRATOR.run(&pool).await.expect("migrations failed");

    let config = ServerConfig {
        database_url: SecretString::from("sqlite::memory:".to_owned()),
        host: "127.0.0.1".parse().expect("valid host"),
        port: 0,
        sentry_dsn: None,
        sentry_environment: None,
    };

    storeroom_server::app(AppState::new(config, pool))
}

/// Send a request with an optional JSON body; returns status and parsed body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            builder
                .body(Body::from(json.to_string()))
                .expect("valid request")
        }
        None => builder.body(Body::empty()).expect("valid request"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request failed");
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };

    (status, body)
}

/// Create a customer through the API and return its id.
pub async fn create_customer(app: &Router, name: &str, email: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/customers",
        Some(serde_json::json!({
            "name": name,
            "email": email,
            "address": "1 Main St",
            "phoneNumber": "555-0100",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "customer create failed: {body}");
    body["id"].as_str().expect("customer id").to_owned()
}

/// Create a product through the API and return its id.
pub async fn create_product(app: &Router, name: &str, price: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/products",
        Some(serde_json::json!({
            "name": name,
            "price": price,
            "category": "Peripherals",
            "model": "MK-87",
            "description": "A test product",
            "image": "https://cdn.example.com/p.jpg",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "product create failed: {body}");
    body["id"].as_str().expect("product id").to_owned()
}
