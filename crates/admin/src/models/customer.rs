//! Customer model as seen by the back-office.

use chrono::{DateTime, Utc};
use serde::Serialize;

use sushiya_core::{Address, CustomerCode};

/// A registered customer. The password hash never leaves the repository
/// layer.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub code: CustomerCode,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub addresses: Vec<Address>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
