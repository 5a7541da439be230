//! Customer repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use storeroom_core::{CustomerId, Email};

use super::RepositoryError;
use crate::models::{Customer, NewCustomer};

/// Raw customer row as stored.
#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: String,
    name: String,
    email: String,
    address: String,
    phone_number: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = RepositoryError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let id = CustomerId::parse(&row.id).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid customer id in database: {e}"))
        })?;
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id,
            name: row.name,
            email,
            address: row.address,
            phone_number: row.phone_number,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Repository for customer database operations.
pub struct CustomerRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all customers.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` if a stored value no longer parses.
    pub async fn list(&self) -> Result<Vec<Customer>, RepositoryError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, name, email, address, phone_number, created_at, updated_at
             FROM customers
             ORDER BY created_at",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Customer::try_from).collect()
    }

    /// Get a customer by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: &CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, name, email, address, phone_number, created_at, updated_at
             FROM customers
             WHERE id = ?",
        )
        .bind(id.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(Customer::try_from).transpose()
    }

    /// Insert a new customer and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is already taken,
    /// or `RepositoryError::Database` for other failures.
    pub async fn insert(&self, new: NewCustomer) -> Result<Customer, RepositoryError> {
        let id = CustomerId::generate();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO customers (id, name, email, address, phone_number, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id.as_str())
        .bind(&new.name)
        .bind(new.email.as_str())
        .bind(&new.address)
        .bind(&new.phone_number)
        .bind(now)
        .bind(now)
        .execute(self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        Ok(Customer {
            id,
            name: new.name,
            email: new.email,
            address: new.address,
            phone_number: new.phone_number,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace all mutable fields of a customer, refreshing `updated_at`.
    ///
    /// Returns `None` when the id does not resolve to a stored customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the new email collides with
    /// another customer, or `RepositoryError::Database` for other failures.
    pub async fn replace(
        &self,
        id: &CustomerId,
        new: NewCustomer,
    ) -> Result<Option<Customer>, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "UPDATE customers
             SET name = ?, email = ?, address = ?, phone_number = ?, updated_at = ?
             WHERE id = ?
             RETURNING id, name, email, address, phone_number, created_at, updated_at",
        )
        .bind(&new.name)
        .bind(new.email.as_str())
        .bind(&new.address)
        .bind(&new.phone_number)
        .bind(Utc::now())
        .bind(id.as_str())
        .fetch_optional(self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        row.map(Customer::try_from).transpose()
    }

    /// Delete a customer by id. Returns whether a row was deleted.
    ///
    /// Orders referencing the customer are untouched; their references
    /// resolve as missing from then on.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: &CustomerId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id.as_str())
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
