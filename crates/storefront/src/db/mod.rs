//! Database operations for the storefront.
//!
//! # Tables
//!
//! The storefront and admin services share one `PostgreSQL` database.
//! Every entity is addressed by an application-level short-code column
//! (`code`), never by the serial primary key. Document-shaped fields
//! (order line items, saved addresses, the neighborhood fee table) are
//! stored as JSONB.
//!
//! - `product` - Menu catalog
//! - `customer` - Registered customers (addresses JSONB)
//! - `store_config` - Singleton configuration row
//! - `orders` - Orders (line items JSONB)
//! - `session` - Tower-sessions storage
//!
//! # Migrations
//!
//! Migrations live in `crates/storefront/migrations/` and run via:
//! ```bash
//! cargo run -p sushiya-cli -- migrate
//! ```

pub mod customers;
pub mod orders;
pub mod products;
pub mod store_config;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use customers::CustomerRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use store_config::StoreConfigRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., duplicate email or phone).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// The pool is constructed once by the composition root and injected into
/// `AppState`; nothing else opens connections.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
