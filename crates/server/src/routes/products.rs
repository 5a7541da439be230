//! Product CRUD handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use storeroom_core::ProductId;

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::models::{NewProduct, Product};
use crate::routes::DeleteResponse;
use crate::state::AppState;

/// Build the products router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list).post(create))
        .route(
            "/products/{id}",
            get(get_one).put(replace).delete(delete_one),
        )
}

/// Request body for creating or replacing a product.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub model: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl ProductPayload {
    /// Validate the payload into a full field set.
    fn validate(self) -> Result<NewProduct> {
        let (Some(name), Some(price), Some(category), Some(model), Some(description), Some(image)) = (
            self.name,
            self.price,
            self.category,
            self.model,
            self.description,
            self.image,
        ) else {
            return Err(AppError::Validation("Missing required fields".to_owned()));
        };

        Ok(NewProduct {
            name,
            price,
            category,
            model,
            description,
            image,
        })
    }
}

/// Parse a path id; an id that is not even shaped like one cannot resolve.
fn parse_id(id: &str) -> Result<ProductId> {
    ProductId::parse(id).map_err(|_| AppError::NotFound("Product".to_owned()))
}

/// List all products.
async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(Json(products))
}

/// Create a new product.
async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<Product>)> {
    let new = payload.validate()?;
    let product = ProductRepository::new(state.pool()).insert(new).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Fetch a product by id.
async fn get_one(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Product>> {
    let id = parse_id(&id)?;
    let product = ProductRepository::new(state.pool())
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_owned()))?;
    Ok(Json(product))
}

/// Replace all of a product's fields.
async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>> {
    let id = parse_id(&id)?;
    let new = payload.validate()?;
    let product = ProductRepository::new(state.pool())
        .replace(&id, new)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_owned()))?;
    Ok(Json(product))
}

/// Delete a product unconditionally by id.
///
/// Orders referencing the product are left untouched; their line items
/// resolve as missing from then on.
async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let id = parse_id(&id)?;
    let deleted = ProductRepository::new(state.pool()).delete(&id).await?;
    if deleted {
        Ok(Json(DeleteResponse {
            message: "Product deleted successfully",
        }))
    } else {
        Err(AppError::NotFound("Product".to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> ProductPayload {
        ProductPayload {
            name: Some("Mechanical Keyboard".to_owned()),
            price: Some("79.99".parse().unwrap()),
            category: Some("Peripherals".to_owned()),
            model: Some("MK-87".to_owned()),
            description: Some("87-key tenkeyless".to_owned()),
            image: Some("https://cdn.example.com/mk87.jpg".to_owned()),
        }
    }

    #[test]
    fn validate_accepts_full_payload() {
        let new = full_payload().validate().unwrap();
        assert_eq!(new.model, "MK-87");
        assert_eq!(new.price, "79.99".parse::<Decimal>().unwrap());
    }

    #[test]
    fn validate_rejects_missing_price() {
        let payload = ProductPayload {
            price: None,
            ..full_payload()
        };
        assert!(matches!(payload.validate(), Err(AppError::Validation(_))));
    }
}
