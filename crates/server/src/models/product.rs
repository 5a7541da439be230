//! Product model.
//!
//! There is no stock or quantity field; inventory is not modeled.

use rust_decimal::Decimal;
use serde::Serialize;

use storeroom_core::ProductId;

/// A stored product record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub model: String,
    pub description: String,
    /// Image URL, stored as an opaque string.
    pub image: String,
}

/// Field set for creating or fully replacing a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub model: String,
    pub description: String,
    pub image: String,
}
