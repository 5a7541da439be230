//! Order model and its denormalized read views.
//!
//! An order embeds references to its customer and products, not copies. The
//! stored record keeps bare ids; the read views expand each reference into
//! the partial display data the original projections exposed (customer name
//! only; product name and price only). A reference whose target was deleted
//! stays [`Reference::Unresolved`] instead of failing the read.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use storeroom_core::{CustomerId, LineItem, OrderId, OrderStatus, ProductId, Reference};

/// A stored order record, references unexpanded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    #[serde(rename = "products")]
    pub items: Vec<LineItem>,
    /// Client-submitted total, stored verbatim. Never recomputed from
    /// current product prices.
    pub total: Decimal,
    /// Client-generated display string ("ORDER-1").
    #[serde(rename = "orderId")]
    pub display_id: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Field set for creating an order. Status is always `Pending` on insert.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_id: CustomerId,
    pub items: Vec<LineItem>,
    pub total: Decimal,
    pub display_id: String,
}

/// Full replacement of an order's mutable fields. Status, display id, and
/// creation time are untouched by updates.
#[derive(Debug, Clone)]
pub struct OrderUpdate {
    pub customer_id: CustomerId,
    pub items: Vec<LineItem>,
    pub total: Decimal,
}

/// Customer display data exposed on expanded orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerSummary {
    pub id: CustomerId,
    pub name: String,
}

/// Product display data exposed on expanded orders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
}

/// A line item with its product reference expanded where possible.
#[derive(Debug, Clone, Serialize)]
pub struct LineItemView {
    #[serde(rename = "productId")]
    pub product: Reference<ProductId, ProductSummary>,
    pub quantity: u32,
}

/// An order with customer and product references expanded where possible.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: OrderId,
    #[serde(rename = "customerId")]
    pub customer: Reference<CustomerId, CustomerSummary>,
    pub products: Vec<LineItemView>,
    pub total: Decimal,
    #[serde(rename = "orderId")]
    pub display_id: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}
