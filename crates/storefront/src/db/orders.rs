//! Order persistence for checkout.
//!
//! The storefront only creates orders; listing and lifecycle management
//! live in the back-office.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::types::Json;

use sushiya_core::{OrderCode, OrderItem, OrderStatus, PaymentMethod};

use super::RepositoryError;
use crate::models::{NewOrder, Order};

#[derive(sqlx::FromRow)]
struct OrderRow {
    code: OrderCode,
    customer_name: String,
    customer_phone: String,
    customer_address: String,
    items: Json<Vec<OrderItem>>,
    total: Decimal,
    payment_method: String,
    change_for: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let payment_method: PaymentMethod = row.payment_method.parse().map_err(|_| {
            RepositoryError::DataCorruption(format!(
                "order {} has unknown payment method {:?}",
                row.code, row.payment_method
            ))
        })?;
        let status: OrderStatus = row.status.parse().map_err(|_| {
            RepositoryError::DataCorruption(format!(
                "order {} has unknown status {:?}",
                row.code, row.status
            ))
        })?;

        Ok(Self {
            code: row.code,
            customer_name: row.customer_name,
            customer_phone: row.customer_phone,
            customer_address: row.customer_address,
            items: row.items.0,
            total: row.total,
            payment_method,
            change_for: row.change_for,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const SELECT_COLUMNS: &str = "code, customer_name, customer_phone, customer_address, items, \
                              total, payment_method, change_for, status, created_at, updated_at";

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new order in `PENDING` status and return it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, new_order: &NewOrder) -> Result<Order, RepositoryError> {
        let code = OrderCode::generate();
        let sql = format!(
            "INSERT INTO orders (code, customer_name, customer_phone, customer_address, \
             items, total, payment_method, change_for, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {SELECT_COLUMNS}"
        );
        let row: OrderRow = sqlx::query_as(&sql)
            .bind(&code)
            .bind(&new_order.customer_name)
            .bind(&new_order.customer_phone)
            .bind(&new_order.customer_address)
            .bind(Json(&new_order.items))
            .bind(new_order.total)
            .bind(new_order.payment_method.to_string())
            .bind(new_order.change_for.as_deref())
            .bind(OrderStatus::Pending.to_string())
            .fetch_one(self.pool)
            .await?;

        Order::try_from(row)
    }

    /// Get an order by its code.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_code(&self, code: &OrderCode) -> Result<Option<Order>, RepositoryError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM orders WHERE code = $1");
        let row: Option<OrderRow> = sqlx::query_as(&sql)
            .bind(code)
            .fetch_optional(self.pool)
            .await?;

        row.map(Order::try_from).transpose()
    }
}
