//! Product repository for database operations.

use rust_decimal::Decimal;
use sqlx::SqlitePool;

use storeroom_core::ProductId;

use super::RepositoryError;
use crate::models::{NewProduct, Product};

/// Raw product row as stored. Price is kept as its canonical decimal string.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: String,
    name: String,
    price: String,
    category: String,
    model: String,
    description: String,
    image: String,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let id = ProductId::parse(&row.id).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid product id in database: {e}"))
        })?;
        let price = row.price.parse::<Decimal>().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid price in database: {e}"))
        })?;

        Ok(Self {
            id,
            name: row.name,
            price,
            category: row.category,
            model: row.model,
            description: row.description,
            image: row.image,
        })
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` if a stored value no longer parses.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, price, category, model, description, image
             FROM products
             ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    /// Get a product by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, price, category, model, description, image
             FROM products
             WHERE id = ?",
        )
        .bind(id.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(Product::try_from).transpose()
    }

    /// Insert a new product and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, new: NewProduct) -> Result<Product, RepositoryError> {
        let id = ProductId::generate();

        sqlx::query(
            "INSERT INTO products (id, name, price, category, model, description, image)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id.as_str())
        .bind(&new.name)
        .bind(new.price.to_string())
        .bind(&new.category)
        .bind(&new.model)
        .bind(&new.description)
        .bind(&new.image)
        .execute(self.pool)
        .await?;

        Ok(Product {
            id,
            name: new.name,
            price: new.price,
            category: new.category,
            model: new.model,
            description: new.description,
            image: new.image,
        })
    }

    /// Replace all fields of a product.
    ///
    /// Returns `None` when the id does not resolve to a stored product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn replace(
        &self,
        id: &ProductId,
        new: NewProduct,
    ) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "UPDATE products
             SET name = ?, price = ?, category = ?, model = ?, description = ?, image = ?
             WHERE id = ?
             RETURNING id, name, price, category, model, description, image",
        )
        .bind(&new.name)
        .bind(new.price.to_string())
        .bind(&new.category)
        .bind(&new.model)
        .bind(&new.description)
        .bind(&new.image)
        .bind(id.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(Product::try_from).transpose()
    }

    /// Delete a product by id. Returns whether a row was deleted.
    ///
    /// Orders referencing the product are untouched; their line items
    /// resolve as missing from then on.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: &ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.as_str())
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
