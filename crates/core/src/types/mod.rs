//! Core types for Sushiya.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod address;
pub mod code;
pub mod money;
pub mod order;
pub mod status;

pub use address::{Address, AddressId};
pub use code::{CustomerCode, OrderCode, ProductCode};
pub use money::format_brl;
pub use order::OrderItem;
pub use status::{OrderStatus, PaymentMethod, ProductCategory};
