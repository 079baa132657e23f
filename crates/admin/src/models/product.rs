//! Product catalog model, as managed by the back-office.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use sushiya_core::{ProductCategory, ProductCode};

/// A menu product. Unlike the storefront, the back-office sees
/// unavailable products too.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub code: ProductCode,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: ProductCategory,
    pub available: bool,
    pub image: String,
    pub is_promotion: bool,
    pub promotional_price: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating or fully updating a product.
#[derive(Debug, Deserialize)]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub category: ProductCategory,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub is_promotion: bool,
    #[serde(default)]
    pub promotional_price: Option<Decimal>,
}

const fn default_available() -> bool {
    true
}
