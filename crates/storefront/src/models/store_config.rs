//! Store configuration singleton.

use rust_decimal::Decimal;
use serde::Serialize;

use sushiya_core::fees::FeeTable;

/// Default outbound WhatsApp number used before the store is configured.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "5551999999999";

/// Default flat delivery fee for the settings form.
pub const DEFAULT_DELIVERY_FEE: i64 = 10;

/// The singleton store configuration, as seen by the storefront.
///
/// The admin password hash lives in the same database row but is only
/// read by the admin service; it is deliberately absent here.
#[derive(Debug, Clone, Serialize)]
pub struct StoreConfig {
    pub store_name: String,
    pub whatsapp_number: String,
    pub default_delivery_fee: Decimal,
    pub pix_key: Option<String>,
    pub neighborhood_fees: FeeTable,
}

impl Default for StoreConfig {
    /// Defaults used when the config row is missing or the database is
    /// unreachable (fail open: the storefront keeps serving).
    fn default() -> Self {
        Self {
            store_name: "Sushiya".to_string(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            default_delivery_fee: Decimal::from(DEFAULT_DELIVERY_FEE),
            pix_key: None,
            neighborhood_fees: FeeTable::default_fees(),
        }
    }
}
