//! Product catalog model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use sushiya_core::{ProductCategory, ProductCode, pricing};

/// A menu product.
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

impl Product {
    /// The price this product is sold at right now: the promotional price
    /// when flagged and lower than the list price.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        pricing::effective_price(self.price, self.is_promotion, self.promotional_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price_cents: i64, is_promotion: bool, promo_cents: Option<i64>) -> Product {
        Product {
            code: ProductCode::new("abc123def"),
            name: "Hot Roll".to_string(),
            description: String::new(),
            price: Decimal::new(price_cents, 2),
            category: ProductCategory::Roll,
            available: true,
            image: "/placeholder-sushi.jpg".to_string(),
            is_promotion,
            promotional_price: promo_cents.map(|c| Decimal::new(c, 2)),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn effective_price_prefers_lower_promotional_price() {
        assert_eq!(
            product(3_250, true, Some(2_890)).effective_price(),
            Decimal::new(2_890, 2)
        );
        assert_eq!(
            product(3_250, false, Some(2_890)).effective_price(),
            Decimal::new(3_250, 2)
        );
        assert_eq!(
            product(3_250, true, Some(9_900)).effective_price(),
            Decimal::new(3_250, 2)
        );
    }
}
