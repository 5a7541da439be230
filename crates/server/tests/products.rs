//! Product endpoint integration tests.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{send, test_app};

#[tokio::test]
async fn create_returns_submitted_fields_and_read_round_trips() {
    let app = test_app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/products",
        Some(json!({
            "name": "Mechanical Keyboard",
            "price": "79.99",
            "category": "Peripherals",
            "model": "MK-87",
            "description": "87-key tenkeyless",
            "image": "https://cdn.example.com/mk87.jpg",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Mechanical Keyboard");
    assert_eq!(created["price"], "79.99");
    assert_eq!(created["category"], "Peripherals");
    assert_eq!(created["model"], "MK-87");

    let id = created["id"].as_str().expect("id");
    let (status, fetched) = send(&app, "GET", &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["price"], "79.99");
    assert_eq!(fetched["image"], "https://cdn.example.com/mk87.jpg");
}

#[tokio::test]
async fn create_accepts_numeric_price() {
    let app = test_app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/products",
        Some(json!({
            "name": "Mouse",
            "price": 9.5,
            "category": "Peripherals",
            "model": "M-1",
            "description": "Two buttons",
            "image": "https://cdn.example.com/m1.jpg",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["price"], "9.5");
}

#[tokio::test]
async fn create_rejects_missing_field() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/products",
        Some(json!({
            "name": "Mechanical Keyboard",
            "price": "79.99",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = send(&app, "GET", "/products", None).await;
    assert_eq!(list.as_array().expect("list").len(), 0);
}

#[tokio::test]
async fn put_replaces_all_fields() {
    let app = test_app().await;
    let id = common::create_product(&app, "Mechanical Keyboard", "79.99").await;

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/products/{id}"),
        Some(json!({
            "name": "Mechanical Keyboard v2",
            "price": "89.99",
            "category": "Peripherals",
            "model": "MK-88",
            "description": "Now with more keys",
            "image": "https://cdn.example.com/mk88.jpg",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Mechanical Keyboard v2");
    assert_eq!(updated["price"], "89.99");
    assert_eq!(updated["model"], "MK-88");
}

#[tokio::test]
async fn delete_then_read_yields_not_found() {
    let app = test_app().await;
    let id = common::create_product(&app, "Mechanical Keyboard", "79.99").await;

    let (status, _) = send(&app, "DELETE", &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_of_unknown_id_yields_not_found() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "PUT",
        "/products/65226e1bb4d19cde3b85a001",
        Some(json!({
            "name": "Ghost",
            "price": "1.00",
            "category": "None",
            "model": "G-0",
            "description": "Does not exist",
            "image": "https://cdn.example.com/g.jpg",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
