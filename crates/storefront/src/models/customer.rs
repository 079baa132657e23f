//! Customer account model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use sushiya_core::{Address, CustomerCode};

/// A registered customer.
///
/// The password hash never leaves the repository layer; this model is safe
/// to serialize in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub code: CustomerCode,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    /// Ordered saved-address list; the first entry is the default.
    pub addresses: Vec<Address>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// The customer's default delivery address, when one is saved.
    #[must_use]
    pub fn default_address(&self) -> Option<&Address> {
        self.addresses.first()
    }
}
