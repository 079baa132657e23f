//! Session data stored for logged-in customers.

use serde::{Deserialize, Serialize};

use sushiya_core::CustomerCode;

/// Keys used in the tower-sessions store.
pub mod session_keys {
    /// The logged-in customer, if any.
    pub const CURRENT_CUSTOMER: &str = "current_customer";
}

/// The logged-in customer as stored in the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentCustomer {
    pub code: CustomerCode,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

impl From<&crate::models::Customer> for CurrentCustomer {
    fn from(customer: &crate::models::Customer) -> Self {
        Self {
            code: customer.code.clone(),
            name: customer.name.clone(),
            phone: customer.phone.clone(),
            email: customer.email.clone(),
        }
    }
}
