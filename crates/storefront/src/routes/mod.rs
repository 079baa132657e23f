//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Liveness check
//! GET  /health/ready            - Readiness check (pings the database)
//!
//! # Catalog
//! GET  /menu                    - Available products, optional ?category=
//! GET  /store                   - Public store info (name, pix key, fee table)
//!
//! # Checkout
//! POST /checkout                - Place an order, returns the WhatsApp link
//!
//! # CEP
//! GET  /cep/{cep}               - Postal-code lookup (ViaCEP proxy)
//!
//! # Auth
//! POST /auth/register           - Create an account
//! POST /auth/login              - Login
//! POST /auth/logout             - Logout
//! POST /auth/recover/verify     - Check email+phone before reset
//! POST /auth/recover/reset      - Set a new password
//!
//! # Account (requires auth)
//! GET  /account                 - Current customer profile
//! POST /account/addresses       - Add a saved address
//! DELETE /account/addresses/{id} - Remove a saved address
//! ```

pub mod account;
pub mod auth;
pub mod cep;
pub mod checkout;
pub mod health;
pub mod menu;
pub mod store;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/recover/verify", post(auth::recover_verify))
        .route("/recover/reset", post(auth::recover_reset))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    use axum::routing::delete;

    Router::new()
        .route("/", get(account::profile))
        .route("/addresses", post(account::create_address))
        .route("/addresses/{id}", delete(account::delete_address))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::ready))
        .route("/menu", get(menu::index))
        .route("/store", get(store::show))
        .route("/checkout", post(checkout::create))
        .route("/cep/{cep}", get(cep::lookup))
        .nest("/auth", auth_routes())
        .nest("/account", account_routes())
}
