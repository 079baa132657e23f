//! Checkout orchestration.
//!
//! Prices are always computed server-side from the catalog; client-sent
//! quantities are the only part of the cart that is trusted. The order is
//! persisted best-effort: a database failure is logged but never blocks
//! handing the customer their WhatsApp link, since the conversation with
//! the store is the channel that actually fulfills the order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use sushiya_core::fees::FeeResolution;
use sushiya_core::pricing::{CheckoutTotals, checkout_totals};
use sushiya_core::{Address, OrderCode, OrderItem, PaymentMethod, ProductCode, format_brl};

use crate::db::{OrderRepository, ProductRepository, RepositoryError};
use crate::models::{NewOrder, StoreConfig};
use crate::state::AppState;

/// Errors that reject a checkout outright.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Cart is empty or an item has a zero quantity.
    #[error("invalid cart: {0}")]
    InvalidCart(String),

    /// A cart item references an unknown or unavailable product.
    #[error("product unavailable: {0}")]
    ProductUnavailable(ProductCode),

    /// Delivery details are incomplete.
    #[error("invalid delivery details: {0}")]
    InvalidDelivery(String),

    /// The neighborhood has no flat fee and the client has not confirmed
    /// a negotiated delivery.
    #[error("delivery fee must be negotiated for this neighborhood")]
    FeeNegotiationRequired,

    /// Catalog lookup failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// One cart line as sent by the client.
#[derive(Debug, Deserialize)]
pub struct CartLine {
    pub product_code: ProductCode,
    pub quantity: u32,
}

/// Delivery address fields from the checkout form.
#[derive(Debug, Deserialize)]
pub struct DeliveryDetails {
    pub neighborhood: String,
    pub street: String,
    pub number: String,
    #[serde(default)]
    pub complement: Option<String>,
}

/// Checkout request body.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub customer_name: String,
    pub customer_phone: String,
    pub delivery: DeliveryDetails,
    pub items: Vec<CartLine>,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub change_for: Option<String>,
    /// Client acknowledgement that an unmapped neighborhood means the fee
    /// is settled over WhatsApp.
    #[serde(default)]
    pub accept_negotiated_fee: bool,
}

/// Checkout outcome returned to the client.
#[derive(Debug, Serialize)]
pub struct CheckoutOutcome {
    pub order_code: OrderCode,
    /// Whether the order record made it into the database. The WhatsApp
    /// link is valid either way.
    pub persisted: bool,
    pub subtotal: Decimal,
    pub delivery_fee: Option<Decimal>,
    pub total: Decimal,
    pub whatsapp_url: String,
}

/// Run the whole checkout: validate, price, persist, and build the
/// WhatsApp hand-off link.
///
/// # Errors
///
/// Returns `CheckoutError` for rejected carts; repository failures during
/// persistence are swallowed (see module docs), only catalog reads fail
/// the request.
pub async fn process_checkout(
    state: &AppState,
    request: CheckoutRequest,
) -> Result<CheckoutOutcome, CheckoutError> {
    validate_request(&request)?;

    let store_config = state.store_config().await;

    let items = load_items(state, &request.items).await?;
    let fee = store_config
        .neighborhood_fees
        .resolve(&request.delivery.neighborhood);
    if fee.is_negotiated() && !request.accept_negotiated_fee {
        return Err(CheckoutError::FeeNegotiationRequired);
    }

    let totals = checkout_totals(&items, fee);

    let change_for = match request.payment_method {
        PaymentMethod::Cash => request.change_for.clone().filter(|c| !c.trim().is_empty()),
        _ => None,
    };
    let new_order = NewOrder {
        customer_name: request.customer_name.trim().to_string(),
        customer_phone: request.customer_phone.trim().to_string(),
        customer_address: format_address(&request.delivery),
        items,
        total: totals.total,
        payment_method: request.payment_method,
        change_for,
    };

    let (order_code, persisted) = persist_best_effort(state, &new_order).await;

    let message = compose_order_summary(&store_config, &order_code, &new_order, &totals);
    let whatsapp_url = whatsapp_link(&store_config.whatsapp_number, &message);

    Ok(CheckoutOutcome {
        order_code,
        persisted,
        subtotal: totals.subtotal,
        delivery_fee: match totals.fee {
            FeeResolution::Flat(fee) => Some(fee),
            FeeResolution::ToNegotiate => None,
        },
        total: totals.total,
        whatsapp_url,
    })
}

fn validate_request(request: &CheckoutRequest) -> Result<(), CheckoutError> {
    if request.items.is_empty() {
        return Err(CheckoutError::InvalidCart("cart is empty".to_string()));
    }
    if request.items.iter().any(|line| line.quantity == 0) {
        return Err(CheckoutError::InvalidCart(
            "item quantity must be at least 1".to_string(),
        ));
    }
    if request.customer_name.trim().is_empty() {
        return Err(CheckoutError::InvalidDelivery("name is required".to_string()));
    }
    if request.customer_phone.trim().is_empty() {
        return Err(CheckoutError::InvalidDelivery(
            "phone is required".to_string(),
        ));
    }
    let delivery = &request.delivery;
    if delivery.neighborhood.trim().is_empty()
        || delivery.street.trim().is_empty()
        || delivery.number.trim().is_empty()
    {
        return Err(CheckoutError::InvalidDelivery(
            "neighborhood, street, and number are required".to_string(),
        ));
    }
    Ok(())
}

/// Resolve cart lines against the catalog, snapshotting names and
/// effective prices into order items.
async fn load_items(
    state: &AppState,
    lines: &[CartLine],
) -> Result<Vec<OrderItem>, CheckoutError> {
    let products = ProductRepository::new(state.pool());

    let mut items = Vec::with_capacity(lines.len());
    for line in lines {
        let product = products
            .get_by_code(&line.product_code)
            .await?
            .filter(|p| p.available)
            .ok_or_else(|| CheckoutError::ProductUnavailable(line.product_code.clone()))?;

        items.push(OrderItem {
            product_code: product.code.clone(),
            name: product.name.clone(),
            quantity: line.quantity,
            unit_price: product.effective_price(),
        });
    }

    Ok(items)
}

/// Persist the order, falling back to a generated code when the database
/// is down so the WhatsApp message still carries an order reference.
async fn persist_best_effort(state: &AppState, new_order: &NewOrder) -> (OrderCode, bool) {
    match OrderRepository::new(state.pool()).create(new_order).await {
        Ok(order) => (order.code, true),
        Err(err) => {
            let fallback = OrderCode::generate();
            warn!(
                error = %err,
                order_persisted = false,
                order_code = %fallback,
                "failed to persist order, continuing with WhatsApp hand-off"
            );
            (fallback, false)
        }
    }
}

/// Single-line address for the order record and the WhatsApp summary:
/// `street, number - complement - neighborhood` (complement skipped when
/// blank).
fn format_address(delivery: &DeliveryDetails) -> String {
    let address = Address::new(
        delivery.neighborhood.trim().to_string(),
        delivery.street.trim().to_string(),
        delivery.number.trim().to_string(),
        delivery.complement.as_deref().map(|c| c.trim().to_string()),
    );
    match &address.complement {
        Some(complement) => format!(
            "{} - {complement} - {}",
            address.street_line(),
            address.neighborhood
        ),
        None => format!("{} - {}", address.street_line(), address.neighborhood),
    }
}

/// Build the plain-text order summary sent to the store over WhatsApp.
#[must_use]
pub fn compose_order_summary(
    store_config: &StoreConfig,
    order_code: &OrderCode,
    order: &NewOrder,
    totals: &CheckoutTotals,
) -> String {
    let mut message = String::new();

    message.push_str(&format!(
        "🍣 *NOVO PEDIDO - {}*\n",
        store_config.store_name.to_uppercase()
    ));
    message.push_str(&format!("🆔 *Pedido:* #{order_code}\n\n"));

    message.push_str(&format!("👤 *Cliente:* {}\n", order.customer_name));
    message.push_str(&format!("📱 *Telefone:* {}\n\n", order.customer_phone));

    message.push_str("📍 *ENTREGA*\n");
    message.push_str(&format!("{}\n\n", order.customer_address));

    message.push_str("🛒 *RESUMO DO PEDIDO*\n");
    for item in &order.items {
        message.push_str(&format!(
            "{}x {} ({})\n",
            item.quantity,
            item.name,
            format_brl(item.unit_price)
        ));
    }

    message.push_str(&format!("\n💰 *Subtotal:* {}\n", format_brl(totals.subtotal)));
    let fee_line = match totals.fee {
        FeeResolution::Flat(fee) => format_brl(fee),
        FeeResolution::ToNegotiate => "A Combinar".to_string(),
    };
    message.push_str(&format!("🛵 *Entrega:* {fee_line}\n"));
    message.push_str(&format!("💰 *TOTAL:* {}\n", format_brl(totals.total)));
    message.push_str(&format!(
        "💳 *PAGAMENTO:* {}\n",
        order.payment_method.summary_label()
    ));
    if order.payment_method == PaymentMethod::Cash
        && let Some(change_for) = &order.change_for
    {
        message.push_str(&format!("💱 *Troco para:* R$ {change_for}\n"));
    }

    message.push_str("\n✅ Aguardo confirmação!");

    message
}

/// Build the `wa.me` deep link carrying the summary as a prefilled text.
#[must_use]
pub fn whatsapp_link(whatsapp_number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{whatsapp_number}?text={}",
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order(fee: FeeResolution) -> (NewOrder, CheckoutTotals, StoreConfig) {
        let items = vec![
            OrderItem {
                product_code: ProductCode::from("abc123def".to_string()),
                name: "Temaki Salmão".to_string(),
                quantity: 2,
                unit_price: Decimal::new(4_590, 2),
            },
            OrderItem {
                product_code: ProductCode::from("ghi456jkl".to_string()),
                name: "Combo Festa".to_string(),
                quantity: 1,
                unit_price: Decimal::new(3_250, 2),
            },
        ];
        let totals = checkout_totals(&items, fee);
        let order = NewOrder {
            customer_name: "Ana Souza".to_string(),
            customer_phone: "51999887766".to_string(),
            customer_address: "Rua das Flores, 100 - casa - Belem Novo".to_string(),
            items,
            total: totals.total,
            payment_method: PaymentMethod::Cash,
            change_for: Some("200".to_string()),
        };
        (order, totals, StoreConfig::default())
    }

    #[test]
    fn summary_contains_all_sections() {
        let (order, totals, config) = sample_order(FeeResolution::Flat(Decimal::from(5)));
        let code = OrderCode::from("A1B2C3D4E".to_string());
        let message = compose_order_summary(&config, &code, &order, &totals);

        assert!(message.starts_with("🍣 *NOVO PEDIDO - SUSHIYA*"));
        assert!(message.contains("🆔 *Pedido:* #A1B2C3D4E"));
        assert!(message.contains("👤 *Cliente:* Ana Souza"));
        assert!(message.contains("2x Temaki Salmão (R$ 45,90)"));
        assert!(message.contains("💰 *Subtotal:* R$ 124,30"));
        assert!(message.contains("🛵 *Entrega:* R$ 5,00"));
        assert!(message.contains("💰 *TOTAL:* R$ 129,30"));
        assert!(message.contains("💳 *PAGAMENTO:* DINHEIRO"));
        assert!(message.contains("💱 *Troco para:* R$ 200"));
        assert!(message.ends_with("✅ Aguardo confirmação!"));
    }

    #[test]
    fn negotiated_fee_prints_a_combinar() {
        let (order, totals, config) = sample_order(FeeResolution::ToNegotiate);
        let code = OrderCode::from("A1B2C3D4E".to_string());
        let message = compose_order_summary(&config, &code, &order, &totals);

        assert!(message.contains("🛵 *Entrega:* A Combinar"));
        // A negotiated fee is excluded from the total, not zeroed in.
        assert!(message.contains("💰 *TOTAL:* R$ 124,30"));
    }

    #[test]
    fn zero_fee_prints_as_money_not_a_combinar() {
        let (order, totals, config) = sample_order(FeeResolution::Flat(Decimal::ZERO));
        let code = OrderCode::from("A1B2C3D4E".to_string());
        let message = compose_order_summary(&config, &code, &order, &totals);

        assert!(message.contains("🛵 *Entrega:* R$ 0,00"));
    }

    #[test]
    fn change_line_omitted_for_non_cash() {
        let (mut order, totals, config) = sample_order(FeeResolution::Flat(Decimal::from(5)));
        order.payment_method = PaymentMethod::Pix;
        let code = OrderCode::from("A1B2C3D4E".to_string());
        let message = compose_order_summary(&config, &code, &order, &totals);

        assert!(message.contains("💳 *PAGAMENTO:* PIX"));
        assert!(!message.contains("Troco para"));
    }

    #[test]
    fn address_line_includes_complement_when_present() {
        let delivery = DeliveryDetails {
            neighborhood: "Belem Novo".to_string(),
            street: " Rua das Flores ".to_string(),
            number: "123".to_string(),
            complement: Some("Apto 42".to_string()),
        };
        assert_eq!(
            format_address(&delivery),
            "Rua das Flores, 123 - Apto 42 - Belem Novo"
        );
    }

    #[test]
    fn address_line_skips_blank_complement() {
        let delivery = DeliveryDetails {
            neighborhood: "Lami".to_string(),
            street: "Rua A".to_string(),
            number: "1".to_string(),
            complement: Some("   ".to_string()),
        };
        assert_eq!(format_address(&delivery), "Rua A, 1 - Lami");
    }

    #[test]
    fn whatsapp_link_is_url_encoded() {
        let url = whatsapp_link("5551999999999", "🍣 *NOVO PEDIDO*");
        assert!(url.starts_with("https://wa.me/5551999999999?text="));
        assert!(!url.contains('*'));
        assert!(!url.contains(' '));
    }
}
