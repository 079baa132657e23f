//! Product repository for the storefront (read-only).
//!
//! The catalog is maintained by the admin service; the storefront only
//! lists and resolves products.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use sushiya_core::{ProductCategory, ProductCode};

use super::RepositoryError;
use crate::models::Product;

/// Row shape shared with the admin product repository.
#[derive(sqlx::FromRow)]
pub(crate) struct ProductRow {
    pub code: ProductCode,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub available: bool,
    pub image: String,
    pub is_promotion: bool,
    pub promotional_price: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let category: ProductCategory = row.category.parse().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid category in database: {e}"))
        })?;

        Ok(Self {
            code: row.code,
            name: row.name,
            description: row.description,
            price: row.price,
            category,
            available: row.available,
            image: row.image,
            is_promotion: row.is_promotion,
            promotional_price: row.promotional_price,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const SELECT_COLUMNS: &str = "code, name, description, price, category, available, image, \
     is_promotion, promotional_price, created_at, updated_at";

/// Repository for product reads.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List available products, optionally filtered by category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `DataCorruption` if a stored category is not a known value.
    pub async fn list_available(
        &self,
        category: Option<ProductCategory>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = match category {
            Some(category) => {
                let sql = format!(
                    "SELECT {SELECT_COLUMNS} FROM product \
                     WHERE available = TRUE AND category = $1 ORDER BY name"
                );
                sqlx::query_as(&sql)
                    .bind(category.to_string())
                    .fetch_all(self.pool)
                    .await?
            }
            None => {
                let sql = format!(
                    "SELECT {SELECT_COLUMNS} FROM product WHERE available = TRUE ORDER BY name"
                );
                sqlx::query_as(&sql).fetch_all(self.pool).await?
            }
        };

        rows.into_iter().map(Product::try_from).collect()
    }

    /// Get a product by its code.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_code(
        &self,
        code: &ProductCode,
    ) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM product WHERE code = $1");
        let row: Option<ProductRow> = sqlx::query_as(&sql)
            .bind(code)
            .fetch_optional(self.pool)
            .await?;

        row.map(Product::try_from).transpose()
    }
}
