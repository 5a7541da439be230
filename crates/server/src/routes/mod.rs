//! HTTP route handlers for the back-office API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (database reachable)
//!
//! # Customers
//! GET    /customers            - List all customers
//! POST   /customers            - Create a customer
//! GET    /customers/{id}       - Fetch a customer
//! PUT    /customers/{id}       - Replace a customer's fields
//! DELETE /customers/{id}       - Delete a customer
//!
//! # Products
//! GET    /products             - List all products
//! POST   /products             - Create a product
//! GET    /products/{id}        - Fetch a product
//! PUT    /products/{id}        - Replace a product's fields
//! DELETE /products/{id}        - Delete a product
//!
//! # Orders
//! GET    /orders               - List all orders, references expanded
//! POST   /orders               - Create an order (strict validation)
//! GET    /orders/{id}          - Fetch an order, references expanded
//! PUT    /orders/{id}          - Replace line items, customer, and total
//! DELETE /orders/{id}          - Delete an order
//! ```
//!
//! All bodies are JSON with camelCase fields. There is no authentication;
//! every request is handled independently and statelessly.

pub mod customers;
pub mod orders;
pub mod products;

use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Response body for successful deletions.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// Build the combined API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(customers::router())
        .merge(products::router())
        .merge(orders::router())
}

/// Liveness check.
async fn health() -> &'static str {
    "OK"
}

/// Readiness check: verifies the database is reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").execute(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
