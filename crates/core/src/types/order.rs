//! Order line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::code::ProductCode;

/// A single line item on an order.
///
/// The name and unit price are snapshots captured at order time and are
/// intentionally decoupled from the live product record: editing or
/// deleting a product never alters historical orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_code: ProductCode,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl OrderItem {
    /// Line total: unit price × quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_total_multiplies_price_by_quantity() {
        let item = OrderItem {
            product_code: ProductCode::new("abc"),
            name: "Combo Salmão".to_string(),
            quantity: 3,
            unit_price: Decimal::new(4_590, 2),
        };
        assert_eq!(item.line_total(), Decimal::new(13_770, 2));
    }
}
