//! Reference resolver: expands an order's stored identifiers into the
//! partial display views the read endpoints return.
//!
//! Each reference is looked up independently, matching the original
//! per-reference expansion semantics. A missing target never fails the
//! request; the reference simply stays unresolved and the caller decides how
//! to render it.

use sqlx::SqlitePool;

use storeroom_core::Reference;

use crate::db::{CustomerRepository, ProductRepository, RepositoryError};
use crate::models::{CustomerSummary, LineItemView, Order, OrderView, ProductSummary};

/// Expand one order's customer and product references.
///
/// # Errors
///
/// Returns `RepositoryError` only for store failures; missing references are
/// not errors.
pub async fn resolve_order(pool: &SqlitePool, order: Order) -> Result<OrderView, RepositoryError> {
    let customers = CustomerRepository::new(pool);
    let products = ProductRepository::new(pool);

    let customer = customers.get(&order.customer_id).await?.map(|c| CustomerSummary {
        id: c.id,
        name: c.name,
    });
    let customer = Reference::from_lookup(order.customer_id, customer);

    let mut items = Vec::with_capacity(order.items.len());
    for item in order.items {
        let product = products.get(&item.product_id).await?.map(|p| ProductSummary {
            id: p.id,
            name: p.name,
            price: p.price,
        });
        items.push(LineItemView {
            product: Reference::from_lookup(item.product_id, product),
            quantity: item.quantity,
        });
    }

    Ok(OrderView {
        id: order.id,
        customer,
        products: items,
        total: order.total,
        display_id: order.display_id,
        status: order.status,
        created_at: order.created_at,
    })
}

/// Expand a batch of orders, preserving their order.
///
/// # Errors
///
/// Returns `RepositoryError` if any underlying lookup fails.
pub async fn resolve_orders(
    pool: &SqlitePool,
    orders: Vec<Order>,
) -> Result<Vec<OrderView>, RepositoryError> {
    let mut views = Vec::with_capacity(orders.len());
    for order in orders {
        views.push(resolve_order(pool, order).await?);
    }
    Ok(views)
}
