//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Customer authentication (register, login, recovery)
//! - `checkout` - Cart validation, pricing, persistence, WhatsApp hand-off
//! - `viacep` - Postal-code lookup proxy

pub mod auth;
pub mod checkout;
pub mod viacep;
