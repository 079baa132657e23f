//! Product repository for the back-office (full CRUD).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use sushiya_core::{ProductCategory, ProductCode};

use super::RepositoryError;
use crate::models::{Product, ProductInput};

#[derive(sqlx::FromRow)]
struct ProductRow {
    code: ProductCode,
    name: String,
    description: String,
    price: Decimal,
    category: String,
    available: bool,
    image: String,
    is_promotion: bool,
    promotional_price: Option<Decimal>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
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

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all products, available or not, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM product ORDER BY created_at DESC");
        let rows: Vec<ProductRow> = sqlx::query_as(&sql).fetch_all(self.pool).await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    /// Get a product by its code.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_code(&self, code: &ProductCode) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM product WHERE code = $1");
        let row: Option<ProductRow> = sqlx::query_as(&sql)
            .bind(code)
            .fetch_optional(self.pool)
            .await?;

        row.map(Product::try_from).transpose()
    }

    /// Create a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &ProductInput) -> Result<Product, RepositoryError> {
        let code = ProductCode::generate();
        let sql = format!(
            "INSERT INTO product \
             (code, name, description, price, category, available, image, is_promotion, promotional_price) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {SELECT_COLUMNS}"
        );
        let row: ProductRow = sqlx::query_as(&sql)
            .bind(&code)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.category.to_string())
            .bind(input.available)
            .bind(&input.image)
            .bind(input.is_promotion)
            .bind(input.promotional_price)
            .fetch_one(self.pool)
            .await?;

        Product::try_from(row)
    }

    /// Replace a product's fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    pub async fn update(
        &self,
        code: &ProductCode,
        input: &ProductInput,
    ) -> Result<Product, RepositoryError> {
        let sql = format!(
            "UPDATE product SET name = $1, description = $2, price = $3, category = $4, \
             available = $5, image = $6, is_promotion = $7, promotional_price = $8, \
             updated_at = NOW() \
             WHERE code = $9 \
             RETURNING {SELECT_COLUMNS}"
        );
        let row: Option<ProductRow> = sqlx::query_as(&sql)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.category.to_string())
            .bind(input.available)
            .bind(&input.image)
            .bind(input.is_promotion)
            .bind(input.promotional_price)
            .bind(code)
            .fetch_optional(self.pool)
            .await?;

        row.ok_or(RepositoryError::NotFound)
            .and_then(Product::try_from)
    }

    /// Toggle a product's availability.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    pub async fn set_availability(
        &self,
        code: &ProductCode,
        available: bool,
    ) -> Result<(), RepositoryError> {
        let result =
            sqlx::query("UPDATE product SET available = $1, updated_at = NOW() WHERE code = $2")
                .bind(available)
                .bind(code)
                .execute(self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Update pricing, including the promotion flag and price.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    pub async fn set_pricing(
        &self,
        code: &ProductCode,
        price: Decimal,
        is_promotion: bool,
        promotional_price: Option<Decimal>,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE product SET price = $1, is_promotion = $2, promotional_price = $3, \
             updated_at = NOW() WHERE code = $4",
        )
        .bind(price)
        .bind(is_promotion)
        .bind(promotional_price)
        .bind(code)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete a product. Orders keep their own snapshot of name and price,
    /// so deletion never rewrites history.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    pub async fn delete(&self, code: &ProductCode) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM product WHERE code = $1")
            .bind(code)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
