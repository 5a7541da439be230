//! Order line items.

use serde::{Deserialize, Serialize};

use super::ProductId;

/// A single (product, quantity) pair within an order.
///
/// This is both the embedded document persisted inside an order and the
/// element of a checkout payload. The product is held by reference; name and
/// price are read fresh from the product store at display time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Reference to the ordered product.
    pub product_id: ProductId,
    /// Number of units ordered.
    pub quantity: u32,
}

impl LineItem {
    /// Create a new line item.
    #[must_use]
    pub const fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_is_camel_case() {
        let item = LineItem::new(
            ProductId::parse("65226e1bb4d19cde3b85a001").unwrap(),
            2,
        );
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "productId": "65226e1bb4d19cde3b85a001",
                "quantity": 2,
            })
        );
    }
}
