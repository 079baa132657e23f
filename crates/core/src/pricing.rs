//! Cart subtotal and checkout total computation.
//!
//! The total is computed exactly once, at order submission, and stored on
//! the order record. Status transitions never recompute it.

use rust_decimal::Decimal;

use crate::fees::FeeResolution;
use crate::types::OrderItem;

/// The price a product is actually sold at: the promotional price when the
/// promotion flag is set and the promotional price undercuts the list
/// price, otherwise the list price.
#[must_use]
pub fn effective_price(
    price: Decimal,
    is_promotion: bool,
    promotional_price: Option<Decimal>,
) -> Decimal {
    match promotional_price {
        Some(promo) if is_promotion && promo < price => promo,
        _ => price,
    }
}

/// Sum of line totals across the cart.
#[must_use]
pub fn subtotal(items: &[OrderItem]) -> Decimal {
    items.iter().map(OrderItem::line_total).sum()
}

/// The derived amounts for a checkout submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutTotals {
    pub subtotal: Decimal,
    pub fee: FeeResolution,
    /// `subtotal + effective fee`. Immutable once persisted on the order.
    pub total: Decimal,
}

/// Combine the cart subtotal with the resolved delivery fee.
///
/// An unresolved fee ([`FeeResolution::ToNegotiate`]) contributes zero;
/// callers decide whether to prompt the customer before proceeding.
#[must_use]
pub fn checkout_totals(items: &[OrderItem], fee: FeeResolution) -> CheckoutTotals {
    let subtotal = subtotal(items);
    CheckoutTotals {
        subtotal,
        fee,
        total: subtotal + fee.effective_fee(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductCode;

    fn item(name: &str, quantity: u32, unit_price_cents: i64) -> OrderItem {
        OrderItem {
            product_code: ProductCode::new("test-code"),
            name: name.to_string(),
            quantity,
            unit_price: Decimal::new(unit_price_cents, 2),
        }
    }

    #[test]
    fn worked_example_from_the_menu() {
        // 2x 45.90 + 1x 32.50, Belem Novo fee 5 => subtotal 124.30, total 129.30
        let items = vec![item("Combo Salmão", 2, 4_590), item("Hot Roll", 1, 3_250)];
        let totals = checkout_totals(&items, FeeResolution::Flat(Decimal::from(5)));

        assert_eq!(totals.subtotal, Decimal::new(12_430, 2));
        assert_eq!(totals.total, Decimal::new(12_930, 2));
    }

    #[test]
    fn unresolved_fee_contributes_zero() {
        let items = vec![item("Temaki", 1, 2_800)];
        let totals = checkout_totals(&items, FeeResolution::ToNegotiate);

        assert_eq!(totals.subtotal, Decimal::new(2_800, 2));
        assert_eq!(totals.total, Decimal::new(2_800, 2));
        assert!(totals.fee.is_negotiated());
    }

    #[test]
    fn empty_cart_has_zero_totals() {
        let totals = checkout_totals(&[], FeeResolution::Flat(Decimal::from(10)));
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::from(10));
    }

    #[test]
    fn promotional_price_wins_only_when_flagged_and_lower() {
        let list = Decimal::new(3_250, 2);
        let promo = Decimal::new(2_890, 2);

        assert_eq!(effective_price(list, true, Some(promo)), promo);
        // Flag off: list price.
        assert_eq!(effective_price(list, false, Some(promo)), list);
        // Promo higher than list: list price.
        let high = Decimal::new(3_990, 2);
        assert_eq!(effective_price(list, true, Some(high)), list);
        assert_eq!(effective_price(list, true, None), list);
    }
}
