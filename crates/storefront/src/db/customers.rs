//! Customer repository for registration, login, and saved addresses.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;

use sushiya_core::{Address, AddressId, CustomerCode};

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

    /// Get a customer by email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<Customer>, RepositoryError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM customer WHERE email = $1");
        let row: Option<CustomerRow> = sqlx::query_as(&sql)
            .bind(email)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.map(Customer::from))
    }

    /// Get a customer by phone.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_phone(&self, phone: &str) -> Result<Option<Customer>, RepositoryError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM customer WHERE phone = $1");
        let row: Option<CustomerRow> = sqlx::query_as(&sql)
            .bind(phone)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.map(Customer::from))
    }

    /// Get a customer and their password hash by email, for login.
    ///
    /// Returns `None` if the customer doesn't exist or has no password set
    /// (phone-only registrations).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_auth_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(Customer, String)>, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct AuthRow {
            #[sqlx(flatten)]
            customer: CustomerRow,
            password_hash: Option<String>,
        }

        let sql = format!("SELECT {SELECT_COLUMNS}, password_hash FROM customer WHERE email = $1");
        let row: Option<AuthRow> = sqlx::query_as(&sql)
            .bind(email)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.and_then(|r| {
            let hash = r.password_hash?;
            Some((Customer::from(r.customer), hash))
        }))
    }

    /// Create a new customer.
    ///
    /// The initial saved-address list contains only the registration
    /// address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email or phone is
    /// already registered, `RepositoryError::Database` otherwise.
    pub async fn create(
        &self,
        name: &str,
        email: Option<&str>,
        phone: &str,
        password_hash: Option<&str>,
        address: Address,
    ) -> Result<Customer, RepositoryError> {
        let code = CustomerCode::generate();
        let sql = format!(
            "INSERT INTO customer (code, name, email, phone, password_hash, addresses) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {SELECT_COLUMNS}"
        );
        let row: CustomerRow = sqlx::query_as(&sql)
            .bind(&code)
            .bind(name)
            .bind(email)
            .bind(phone)
            .bind(password_hash)
            .bind(Json(vec![address]))
            .fetch_one(self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.is_unique_violation()
                {
                    let field = match db_err.constraint() {
                        Some(c) if c.contains("phone") => "phone",
                        _ => "email",
                    };
                    return RepositoryError::Conflict(format!("{field} already registered"));
                }
                RepositoryError::Database(e)
            })?;

        Ok(Customer::from(row))
    }

    /// Replace a customer's password hash.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the customer doesn't exist.
    pub async fn set_password_hash(
        &self,
        code: &CustomerCode,
        password_hash: &str,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE customer SET password_hash = $1, updated_at = NOW() WHERE code = $2",
        )
        .bind(password_hash)
        .bind(code)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Append a saved address to a customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the customer doesn't exist.
    pub async fn add_address(
        &self,
        code: &CustomerCode,
        address: Address,
    ) -> Result<Address, RepositoryError> {
        let result = sqlx::query(
            "UPDATE customer \
             SET addresses = addresses || $1::jsonb, updated_at = NOW() \
             WHERE code = $2",
        )
        .bind(Json(&address))
        .bind(code)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(address)
    }

    /// Remove a saved address by its stable id.
    ///
    /// Removal is by id, not by list position: concurrent edits that
    /// reorder the list cannot make this target the wrong entry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the customer doesn't exist
    /// or no saved address carries the id.
    pub async fn remove_address(
        &self,
        code: &CustomerCode,
        address_id: AddressId,
    ) -> Result<(), RepositoryError> {
        let customer = self
            .get_by_code(code)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let remaining: Vec<Address> = customer
            .addresses
            .iter()
            .filter(|a| a.id != address_id)
            .cloned()
            .collect();
        if remaining.len() == customer.addresses.len() {
            return Err(RepositoryError::NotFound);
        }

        sqlx::query("UPDATE customer SET addresses = $1, updated_at = NOW() WHERE code = $2")
            .bind(Json(remaining))
            .bind(code)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
