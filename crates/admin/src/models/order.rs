//! Order model and manual-entry input.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use sushiya_core::{OrderCode, OrderItem, OrderStatus, PaymentMethod};

/// An order as stored, with line items snapshotted at purchase time.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub code: OrderCode,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub payment_method: PaymentMethod,
    pub change_for: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A manually entered order (phone or walk-in), priced by the operator.
#[derive(Debug, Deserialize)]
pub struct NewManualOrder {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub change_for: Option<String>,
}
