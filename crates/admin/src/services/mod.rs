//! Business logic services for the back-office.
//!
//! # Services
//!
//! - `auth` - Store password verification and rotation
//! - `settings` - Settings normalization (WhatsApp number)

pub mod auth;
pub mod settings;
