//! Domain models for the storefront.

pub mod customer;
pub mod order;
pub mod product;
pub mod session;
pub mod store_config;

pub use customer::Customer;
pub use order::{NewOrder, Order};
pub use product::Product;
pub use session::{CurrentCustomer, session_keys};
pub use store_config::StoreConfig;
