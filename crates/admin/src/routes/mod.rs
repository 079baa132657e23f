//! HTTP route handlers for the back-office.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Liveness check
//! GET  /health/ready               - Readiness check (pings the database)
//!
//! # Auth
//! POST /auth/login                 - Store password login
//! POST /auth/logout                - Logout
//! POST /auth/password              - Change the store password
//!
//! # Products
//! GET  /products                   - All products, available or not
//! POST /products                   - Create a product
//! GET  /products/{code}            - Product detail
//! PUT  /products/{code}            - Replace product fields
//! DELETE /products/{code}          - Delete a product
//! POST /products/{code}/availability - Toggle availability
//! POST /products/{code}/pricing    - Update price and promotion
//!
//! # Customers
//! GET  /customers                  - All customers
//! GET  /customers/{code}           - Customer detail
//! PUT  /customers/{code}           - Update contact details
//! DELETE /customers/{code}         - Delete a customer
//!
//! # Orders
//! GET  /orders?window=current      - Orders in a business-day window
//! POST /orders                     - Manual order entry
//! GET  /orders/{code}              - Order detail
//! POST /orders/{code}/status       - Lifecycle transition
//! DELETE /orders/{code}            - Hard delete (erroneous entries)
//!
//! # Reports & Settings
//! GET  /financials?period=week     - Revenue report
//! GET  /settings                   - Store settings
//! PUT  /settings                   - Update store settings
//! ```

pub mod auth;
pub mod customers;
pub mod financials;
pub mod health;
pub mod orders;
pub mod products;
pub mod settings;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/password", post(auth::change_password))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route(
            "/{code}",
            get(products::show)
                .put(products::update)
                .delete(products::delete),
        )
        .route("/{code}/availability", post(products::set_availability))
        .route("/{code}/pricing", post(products::set_pricing))
}

/// Create the customer routes router.
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(customers::index))
        .route(
            "/{code}",
            get(customers::show)
                .put(customers::update)
                .delete(customers::delete),
        )
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index).post(orders::create_manual))
        .route("/{code}", get(orders::show).delete(orders::delete))
        .route("/{code}/status", post(orders::update_status))
}

/// Create all routes for the back-office.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::ready))
        .nest("/auth", auth_routes())
        .nest("/products", product_routes())
        .nest("/customers", customer_routes())
        .nest("/orders", order_routes())
        .route("/financials", get(financials::show))
        .route(
            "/settings",
            get(settings::show).put(settings::update),
        )
}
