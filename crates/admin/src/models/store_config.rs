//! Store configuration as managed by the back-office.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use sushiya_core::fees::FeeTable;

/// The store configuration row, minus the admin credential.
#[derive(Debug, Clone, Serialize)]
pub struct StoreConfig {
    pub store_name: String,
    pub whatsapp_number: String,
    pub default_delivery_fee: Decimal,
    pub pix_key: Option<String>,
    pub neighborhood_fees: FeeTable,
}

/// Fields accepted when updating store settings.
#[derive(Debug, Deserialize)]
pub struct StoreSettingsInput {
    pub store_name: String,
    pub whatsapp_number: String,
    pub default_delivery_fee: Decimal,
    #[serde(default)]
    pub pix_key: Option<String>,
    pub neighborhood_fees: FeeTable,
}
