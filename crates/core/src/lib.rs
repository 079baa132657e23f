//! Sushiya Core - Shared domain types and computation layer.
//!
//! This crate provides the types and pure business logic used across all
//! Sushiya components:
//! - `storefront` - Public-facing ordering site
//! - `admin` - Internal back-office panel
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure computation - no I/O, no
//! database access, no HTTP clients. This keeps it lightweight and allows
//! it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe codes, money, and statuses
//! - [`fees`] - Neighborhood delivery fee table and resolution
//! - [`pricing`] - Cart subtotal and checkout total computation
//! - [`reports`] - Financial revenue/count bucketing by period
//! - [`business_day`] - 06:00 local business-day cutoff windowing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod business_day;
pub mod fees;
pub mod pricing;
pub mod reports;
pub mod types;

pub use types::*;
