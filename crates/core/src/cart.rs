//! The client-held cart aggregator.
//!
//! A cart is an explicit, serializable value object: an ordered sequence of
//! line items, unique by product id, mutated through the functions below and
//! flushed into an [`OrderDraft`] on checkout. It is never persisted
//! server-side; dropping it discards the session's cart entirely.
//!
//! The total is a pure function of the current items and is recomputed on
//! demand; at the expected cart sizes there is nothing to memoize.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CustomerId, LineItem, ProductId};

/// One cart entry: a product reference plus the display data captured when
/// the product was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Reference to the product.
    pub product_id: ProductId,
    /// Product name at the time it was added.
    pub name: String,
    /// Unit price at the time it was added.
    pub unit_price: Decimal,
    /// Number of units.
    pub quantity: u32,
}

/// The cart: an ordered sequence of [`CartItem`]s, unique by product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add `quantity` units of a product.
    ///
    /// If the product is already in the cart its quantity is incremented and
    /// the first-seen name and unit price are kept; otherwise a new item is
    /// appended. Quantity is not bounded or checked here; the cart records
    /// what the caller asked for.
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
    ) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity += quantity;
        } else {
            self.items.push(CartItem {
                product_id,
                name: name.into(),
                unit_price,
                quantity,
            });
        }
    }

    /// Replace the quantity of the matching item. No-op when the product is
    /// not in the cart.
    pub fn edit_item(&mut self, product_id: &ProductId, new_quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| &i.product_id == product_id) {
            item.quantity = new_quantity;
        }
    }

    /// Drop the matching item. No-op when the product is not in the cart.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.items.retain(|i| &i.product_id != product_id);
    }

    /// Sum of `unit_price * quantity` over all items.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(|i| i.unit_price * Decimal::from(i.quantity))
            .sum()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The current items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Consume the cart into an order draft for submission.
    ///
    /// The total is computed here, from the prices captured when items were
    /// added - the server stores it verbatim and never reconciles it against
    /// current product prices.
    #[must_use]
    pub fn checkout(self, customer_id: CustomerId, display_id: impl Into<String>) -> OrderDraft {
        let total = self.total();
        OrderDraft {
            customer_id,
            items: self
                .items
                .into_iter()
                .map(|i| LineItem::new(i.product_id, i.quantity))
                .collect(),
            total,
            display_id: display_id.into(),
        }
    }
}

/// The payload a checked-out cart submits as an order-creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    /// The purchasing customer.
    pub customer_id: CustomerId,
    /// The cart's (product, quantity) pairs.
    #[serde(rename = "products")]
    pub items: Vec<LineItem>,
    /// Client-computed total, stored by the server as submitted.
    pub total: Decimal,
    /// Client-generated display id for the order.
    #[serde(rename = "orderId")]
    pub display_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn pid(hex: &str) -> ProductId {
        ProductId::parse(hex).unwrap()
    }

    fn sample_ids() -> (ProductId, ProductId, ProductId) {
        (
            pid("65226e1bb4d19cde3b85a001"),
            pid("65226e1bb4d19cde3b85a002"),
            pid("65226e1bb4d19cde3b85a003"),
        )
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let (a, b, _) = sample_ids();
        let mut cart = Cart::new();
        cart.add_item(a, "Keyboard", d("20.00"), 2);
        cart.add_item(b, "Mouse", d("9.50"), 3);
        assert_eq!(cart.total(), d("68.50"));
    }

    #[test]
    fn total_is_invariant_to_insertion_order() {
        let (a, b, c) = sample_ids();

        let mut forward = Cart::new();
        forward.add_item(a.clone(), "A", d("1.25"), 1);
        forward.add_item(b.clone(), "B", d("2.50"), 2);
        forward.add_item(c.clone(), "C", d("10.00"), 3);

        let mut reverse = Cart::new();
        reverse.add_item(c, "C", d("10.00"), 3);
        reverse.add_item(b, "B", d("2.50"), 2);
        reverse.add_item(a, "A", d("1.25"), 1);

        assert_eq!(forward.total(), reverse.total());
    }

    #[test]
    fn add_then_remove_restores_prior_total() {
        let (a, b, _) = sample_ids();
        let mut cart = Cart::new();
        cart.add_item(a, "Keyboard", d("20.00"), 1);
        let before = cart.total();

        cart.add_item(b.clone(), "Mouse", d("9.50"), 4);
        cart.remove_item(&b);

        assert_eq!(cart.total(), before);
    }

    #[test]
    fn adding_existing_product_increments_quantity() {
        let (a, _, _) = sample_ids();
        let mut cart = Cart::new();
        cart.add_item(a.clone(), "Keyboard", d("20.00"), 1);
        cart.add_item(a, "Keyboard", d("20.00"), 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.total(), d("60.00"));
    }

    #[test]
    fn edit_item_replaces_quantity() {
        let (a, b, _) = sample_ids();
        let mut cart = Cart::new();
        cart.add_item(a.clone(), "Keyboard", d("20.00"), 5);

        cart.edit_item(&a, 1);
        assert_eq!(cart.total(), d("20.00"));

        // Editing an absent product is a no-op.
        cart.edit_item(&b, 10);
        assert_eq!(cart.total(), d("20.00"));
    }

    #[test]
    fn checkout_flushes_items_and_total() {
        let (a, b, _) = sample_ids();
        let customer = CustomerId::parse("507f1f77bcf86cd799439011").unwrap();

        let mut cart = Cart::new();
        cart.add_item(a.clone(), "Keyboard", d("20.00"), 2);
        cart.add_item(b.clone(), "Mouse", d("9.50"), 1);

        let draft = cart.checkout(customer.clone(), "ORDER-1");
        assert_eq!(draft.customer_id, customer);
        assert_eq!(draft.display_id, "ORDER-1");
        assert_eq!(draft.total, d("49.50"));
        assert_eq!(
            draft.items,
            vec![LineItem::new(a, 2), LineItem::new(b, 1)]
        );
    }

    #[test]
    fn draft_wire_shape_matches_order_create_contract() {
        let (a, _, _) = sample_ids();
        let customer = CustomerId::parse("507f1f77bcf86cd799439011").unwrap();

        let mut cart = Cart::new();
        cart.add_item(a, "Keyboard", d("20.00"), 2);
        let json = serde_json::to_value(cart.checkout(customer, "ORDER-1")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "customerId": "507f1f77bcf86cd799439011",
                "products": [
                    { "productId": "65226e1bb4d19cde3b85a001", "quantity": 2 }
                ],
                "total": "40.00",
                "orderId": "ORDER-1",
            })
        );
    }
}
