//! Customer repository for the back-office.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;

use sushiya_core::{Address, CustomerCode};

use super::RepositoryError;
use crate::models::Customer;

#[derive(sqlx::FromRow)]
struct CustomerRow {
    code: CustomerCode,
    name: String,
    email: Option<String>,
    phone: String,
    addresses: Json<Vec<Address>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            code: row.code,
            name: row.name,
            email: row.email,
            phone: row.phone,
            addresses: row.addresses.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const SELECT_COLUMNS: &str = "code, name, email, phone, addresses, created_at, updated_at";

/// Repository for customer database operations.
pub struct CustomerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all customers, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM customer ORDER BY created_at DESC");
        let rows: Vec<CustomerRow> = sqlx::query_as(&sql).fetch_all(self.pool).await?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    /// Get a customer by their code.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_code(
        &self,
        code: &CustomerCode,
    ) -> Result<Option<Customer>, RepositoryError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM customer WHERE code = $1");
        let row: Option<CustomerRow> = sqlx::query_as(&sql)
            .bind(code)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.map(Customer::from))
    }

    /// Update a customer's contact details.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the customer doesn't exist,
    /// `RepositoryError::Conflict` if the new email or phone is taken.
    pub async fn update_contact(
        &self,
        code: &CustomerCode,
        name: &str,
        email: Option<&str>,
        phone: &str,
    ) -> Result<Customer, RepositoryError> {
        let sql = format!(
            "UPDATE customer SET name = $1, email = $2, phone = $3, updated_at = NOW() \
             WHERE code = $4 \
             RETURNING {SELECT_COLUMNS}"
        );
        let row: Option<CustomerRow> = sqlx::query_as(&sql)
            .bind(name)
            .bind(email)
            .bind(phone)
            .bind(code)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.is_unique_violation()
                {
                    return RepositoryError::Conflict(
                        "email or phone already registered".to_string(),
                    );
                }
                RepositoryError::Database(e)
            })?;

        row.map(Customer::from).ok_or(RepositoryError::NotFound)
    }

    /// Delete a customer account. Their orders are unaffected; orders only
    /// hold contact snapshots, not references.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the customer doesn't exist.
    pub async fn delete(&self, code: &CustomerCode) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM customer WHERE code = $1")
            .bind(code)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
