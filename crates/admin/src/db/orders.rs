//! Order repository for the back-office: windowed listing, lifecycle
//! transitions, manual entry, and hard deletion.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::types::Json;

use sushiya_core::business_day::{OrderWindow, business_day_cutoff};
use sushiya_core::reports::RevenuePoint;
use sushiya_core::{OrderCode, OrderItem, OrderStatus, PaymentMethod};

use super::RepositoryError;
use crate::models::{NewManualOrder, Order};

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

    /// List orders in a business-day window, newest first.
    ///
    /// The business day rolls over at 06:00 America/Sao_Paulo, so a 02:00
    /// order still belongs to the evening before. Archived orders only
    /// show up under [`OrderWindow::All`].
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, window: OrderWindow) -> Result<Vec<Order>, RepositoryError> {
        let cutoff = business_day_cutoff(Utc::now());

        let rows: Vec<OrderRow> = match window {
            OrderWindow::Current => {
                let sql = format!(
                    "SELECT {SELECT_COLUMNS} FROM orders \
                     WHERE created_at >= $1 AND status <> 'ARCHIVED' \
                     ORDER BY created_at DESC"
                );
                sqlx::query_as(&sql).bind(cutoff).fetch_all(self.pool).await?
            }
            OrderWindow::Previous => {
                let sql = format!(
                    "SELECT {SELECT_COLUMNS} FROM orders \
                     WHERE created_at < $1 AND status <> 'ARCHIVED' \
                     ORDER BY created_at DESC"
                );
                sqlx::query_as(&sql).bind(cutoff).fetch_all(self.pool).await?
            }
            OrderWindow::All => {
                let sql =
                    format!("SELECT {SELECT_COLUMNS} FROM orders ORDER BY created_at DESC");
                sqlx::query_as(&sql).fetch_all(self.pool).await?
            }
        };

        rows.into_iter().map(Order::try_from).collect()
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

    /// Record a manually entered order (phone or walk-in) in `PENDING`
    /// status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create_manual(&self, input: &NewManualOrder) -> Result<Order, RepositoryError> {
        let code = OrderCode::generate();
        let change_for = match input.payment_method {
            PaymentMethod::Cash => input.change_for.as_deref(),
            _ => None,
        };
        let sql = format!(
            "INSERT INTO orders (code, customer_name, customer_phone, customer_address, \
             items, total, payment_method, change_for, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {SELECT_COLUMNS}"
        );
        let row: OrderRow = sqlx::query_as(&sql)
            .bind(&code)
            .bind(&input.customer_name)
            .bind(&input.customer_phone)
            .bind(&input.customer_address)
            .bind(Json(&input.items))
            .bind(input.total)
            .bind(input.payment_method.to_string())
            .bind(change_for)
            .bind(OrderStatus::Pending.to_string())
            .fetch_one(self.pool)
            .await?;

        Order::try_from(row)
    }

    /// Move an order to a new status, enforcing the lifecycle rules.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the order doesn't exist and
    /// `RepositoryError::InvalidTransition` if the move is not allowed.
    pub async fn update_status(
        &self,
        code: &OrderCode,
        new_status: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let order = self
            .get_by_code(code)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        if !order.status.can_transition_to(new_status) {
            return Err(RepositoryError::InvalidTransition(format!(
                "{} -> {new_status}",
                order.status
            )));
        }

        let sql = format!(
            "UPDATE orders SET status = $1, updated_at = NOW() WHERE code = $2 \
             RETURNING {SELECT_COLUMNS}"
        );
        let row: OrderRow = sqlx::query_as(&sql)
            .bind(new_status.to_string())
            .bind(code)
            .fetch_one(self.pool)
            .await?;

        Order::try_from(row)
    }

    /// Hard-delete an order. Intended for erroneous manual entries;
    /// fulfilled orders should be archived instead.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the order doesn't exist.
    pub async fn delete(&self, code: &OrderCode) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM orders WHERE code = $1")
            .bind(code)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// All non-cancelled orders as (timestamp, total) points for the
    /// financial report. Bucketing happens in application code.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn revenue_points(&self) -> Result<Vec<RevenuePoint>, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct PointRow {
            created_at: DateTime<Utc>,
            total: Decimal,
        }

        let rows: Vec<PointRow> =
            sqlx::query_as("SELECT created_at, total FROM orders WHERE status <> 'CANCELLED'")
                .fetch_all(self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|row| RevenuePoint {
                created_at: row.created_at,
                total: row.total,
            })
            .collect())
    }
}
