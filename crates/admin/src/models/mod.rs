//! Domain models for the back-office.

pub mod customer;
pub mod order;
pub mod product;
pub mod session;
pub mod store_config;

pub use customer::Customer;
pub use order::{NewManualOrder, Order};
pub use product::{Product, ProductInput};
pub use session::{CurrentAdmin, session_keys};
pub use store_config::{StoreConfig, StoreSettingsInput};
