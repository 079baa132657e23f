//! Order model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use sushiya_core::{OrderCode, OrderItem, OrderStatus, PaymentMethod};

/// A persisted order.
///
/// `total` and `items` are immutable after creation; only the status may
/// change, via admin-driven transitions.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub code: OrderCode,
    pub customer_name: String,
    pub customer_phone: String,
    /// Free-text delivery address line (`street, number - complement - neighborhood`).
    pub customer_address: String,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub payment_method: PaymentMethod,
    /// Amount the customer will pay with, for cash orders needing change.
    pub change_for: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The fields needed to persist a new order. The order code is assigned
/// by the repository at insert time.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub payment_method: PaymentMethod,
    pub change_for: Option<String>,
}
