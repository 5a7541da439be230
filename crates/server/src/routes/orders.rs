//! Order lifecycle handlers: create, read/list with reference expansion,
//! full-replacement update, delete.
//!
//! Creation is the strict contract: the customer id must have the
//! 24-character hex shape, the line-item list must be non-empty and fully
//! populated, and the client-generated display id is required. The submitted
//! total is stored verbatim; the server never recomputes it from current
//! product prices.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use storeroom_core::{CustomerId, LineItem, OrderId, ProductId};

use crate::db::OrderRepository;
use crate::error::{AppError, Result};
use crate::models::{NewOrder, Order, OrderUpdate, OrderView};
use crate::resolver::{resolve_order, resolve_orders};
use crate::routes::DeleteResponse;
use crate::state::AppState;

/// Build the orders router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list).post(create))
        .route("/orders/{id}", get(get_one).put(replace).delete(delete_one))
}

/// One line item as submitted by the client.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemPayload {
    pub product_id: Option<String>,
    pub quantity: Option<u32>,
}

/// Request body for creating an order.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderPayload {
    pub customer_id: Option<String>,
    pub products: Option<Vec<LineItemPayload>>,
    pub total: Option<Decimal>,
    #[serde(rename = "orderId")]
    pub display_id: Option<String>,
}

/// Request body for replacing an order's mutable fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderPayload {
    pub customer_id: Option<String>,
    pub products: Option<Vec<LineItemPayload>>,
    pub total: Option<Decimal>,
}

/// Validate the shared (customer, line items, total) portion of an order
/// payload. Rejection means no write is performed.
fn validate_order_fields(
    customer_id: Option<String>,
    products: Option<Vec<LineItemPayload>>,
    total: Option<Decimal>,
) -> Result<(CustomerId, Vec<LineItem>, Decimal)> {
    let customer_id = customer_id
        .ok_or_else(|| AppError::Validation("Missing customerId".to_owned()))
        .and_then(|id| {
            CustomerId::parse(&id).map_err(|_| {
                AppError::Validation("customerId must be a 24-character hex id".to_owned())
            })
        })?;

    let products =
        products.ok_or_else(|| AppError::Validation("Missing products".to_owned()))?;
    if products.is_empty() {
        return Err(AppError::Validation(
            "Order must contain at least one product".to_owned(),
        ));
    }

    let mut items = Vec::with_capacity(products.len());
    for item in products {
        let (Some(product_id), Some(quantity)) = (item.product_id, item.quantity) else {
            return Err(AppError::Validation(
                "Every line item needs a productId and a quantity".to_owned(),
            ));
        };
        let product_id = ProductId::parse(&product_id).map_err(|_| {
            AppError::Validation("productId must be a 24-character hex id".to_owned())
        })?;
        items.push(LineItem::new(product_id, quantity));
    }

    let total = total.ok_or_else(|| AppError::Validation("Missing total".to_owned()))?;

    Ok((customer_id, items, total))
}

impl CreateOrderPayload {
    /// Validate into the full creation field set (strict contract).
    fn validate(self) -> Result<NewOrder> {
        let (customer_id, items, total) =
            validate_order_fields(self.customer_id, self.products, self.total)?;

        let display_id = self
            .display_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::Validation("Missing orderId".to_owned()))?;

        Ok(NewOrder {
            customer_id,
            items,
            total,
            display_id,
        })
    }
}

impl UpdateOrderPayload {
    /// Validate into the full replacement field set.
    fn validate(self) -> Result<OrderUpdate> {
        let (customer_id, items, total) =
            validate_order_fields(self.customer_id, self.products, self.total)?;

        Ok(OrderUpdate {
            customer_id,
            items,
            total,
        })
    }
}

/// Parse a path id; an id that is not even shaped like one cannot resolve.
fn parse_id(id: &str) -> Result<OrderId> {
    OrderId::parse(id).map_err(|_| AppError::NotFound("Order".to_owned()))
}

/// List all orders with customer and product references expanded.
async fn list(State(state): State<AppState>) -> Result<Json<Vec<OrderView>>> {
    let orders = OrderRepository::new(state.pool()).list().await?;
    let views = resolve_orders(state.pool(), orders).await?;
    Ok(Json(views))
}

/// Create a new order with status `Pending`.
///
/// The response is the stored record with references unexpanded, exactly as
/// persisted.
async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderPayload>,
) -> Result<(StatusCode, Json<Order>)> {
    let new = payload.validate()?;
    let order = OrderRepository::new(state.pool()).insert(new).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Fetch an order by id with references expanded.
async fn get_one(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<OrderView>> {
    let id = parse_id(&id)?;
    let order = OrderRepository::new(state.pool())
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Order".to_owned()))?;
    let view = resolve_order(state.pool(), order).await?;
    Ok(Json(view))
}

/// Replace an order's line items, customer, and total.
///
/// The typical client recomputes the total from edited quantities at edit
/// time; whatever it submits is stored. Last write wins on concurrent edits.
async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateOrderPayload>,
) -> Result<Json<OrderView>> {
    let id = parse_id(&id)?;
    let update = payload.validate()?;
    let order = OrderRepository::new(state.pool())
        .replace(&id, update)
        .await?
        .ok_or_else(|| AppError::NotFound("Order".to_owned()))?;
    let view = resolve_order(state.pool(), order).await?;
    Ok(Json(view))
}

/// Delete an order unconditionally by id.
async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let id = parse_id(&id)?;
    let deleted = OrderRepository::new(state.pool()).delete(&id).await?;
    if deleted {
        Ok(Json(DeleteResponse {
            message: "Order deleted successfully",
        }))
    } else {
        Err(AppError::NotFound("Order".to_owned()))
    }
}
