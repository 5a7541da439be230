//! Order repository for database operations.
//!
//! Line items are embedded in the order row as a JSON array, so creating,
//! replacing, and deleting an order are each a single atomic row write.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::SqlitePool;

use storeroom_core::{CustomerId, LineItem, OrderId, OrderStatus};

use super::RepositoryError;
use crate::models::{NewOrder, Order, OrderUpdate};

/// Raw order row as stored.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: String,
    customer_id: String,
    line_items: String,
    total: String,
    display_id: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let id = OrderId::parse(&row.id).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid order id in database: {e}"))
        })?;
        let customer_id = CustomerId::parse(&row.customer_id).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid customer id in database: {e}"))
        })?;
        let items: Vec<LineItem> = serde_json::from_str(&row.line_items).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid line items in database: {e}"))
        })?;
        let total = row.total.parse::<Decimal>().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid total in database: {e}"))
        })?;
        let status = row.status.parse::<OrderStatus>().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid status in database: {e}"))
        })?;

        Ok(Self {
            id,
            customer_id,
            items,
            total,
            display_id: row.display_id,
            status,
            created_at: row.created_at,
        })
    }
}

/// Serialize line items into the embedded JSON document.
fn encode_items(items: &[LineItem]) -> Result<String, RepositoryError> {
    serde_json::to_string(items)
        .map_err(|e| RepositoryError::DataCorruption(format!("unserializable line items: {e}")))
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` if a stored value no longer parses.
    pub async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            "SELECT id, customer_id, line_items, total, display_id, status, created_at
             FROM orders
             ORDER BY created_at DESC",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Order::try_from).collect()
    }

    /// Get an order by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            "SELECT id, customer_id, line_items, total, display_id, status, created_at
             FROM orders
             WHERE id = ?",
        )
        .bind(id.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(Order::try_from).transpose()
    }

    /// Insert a new order with status `Pending` and return the stored record.
    ///
    /// The submitted total is stored verbatim; it is never reconciled
    /// against current product prices. Neither the customer nor the products
    /// are checked for existence.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, new: NewOrder) -> Result<Order, RepositoryError> {
        let id = OrderId::generate();
        let status = OrderStatus::default();
        let now = Utc::now();
        let line_items = encode_items(&new.items)?;

        sqlx::query(
            "INSERT INTO orders (id, customer_id, line_items, total, display_id, status, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id.as_str())
        .bind(new.customer_id.as_str())
        .bind(line_items)
        .bind(new.total.to_string())
        .bind(&new.display_id)
        .bind(status.to_string())
        .bind(now)
        .execute(self.pool)
        .await?;

        Ok(Order {
            id,
            customer_id: new.customer_id,
            items: new.items,
            total: new.total,
            display_id: new.display_id,
            status,
            created_at: now,
        })
    }

    /// Replace an order's line items, customer, and total.
    ///
    /// Status, display id, and creation time are untouched. Last write wins;
    /// there is no concurrency token. Returns `None` when the id does not
    /// resolve to a stored order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn replace(
        &self,
        id: &OrderId,
        update: OrderUpdate,
    ) -> Result<Option<Order>, RepositoryError> {
        let line_items = encode_items(&update.items)?;

        let row = sqlx::query_as::<_, OrderRow>(
            "UPDATE orders
             SET customer_id = ?, line_items = ?, total = ?
             WHERE id = ?
             RETURNING id, customer_id, line_items, total, display_id, status, created_at",
        )
        .bind(update.customer_id.as_str())
        .bind(line_items)
        .bind(update.total.to_string())
        .bind(id.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(Order::try_from).transpose()
    }

    /// Delete an order by id. Returns whether a row was deleted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: &OrderId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id.as_str())
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
