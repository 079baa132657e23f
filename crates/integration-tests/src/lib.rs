//! Integration tests for Sushiya.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and apply migrations
//! sushiya-cli migrate && sushiya-cli seed
//!
//! # Start both servers
//! cargo run -p sushiya-storefront &
//! cargo run -p sushiya-admin &
//!
//! # Run the ignored server tests
//! cargo test -p sushiya-integration-tests -- --ignored
//! ```
//!
//! Server tests are `#[ignore]`d so the default test run stays green
//! without infrastructure. Base URLs and credentials come from the
//! environment:
//!
//! - `STOREFRONT_BASE_URL` (default `http://localhost:3000`)
//! - `ADMIN_BASE_URL` (default `http://localhost:3001`)
//! - `ADMIN_TEST_PASSWORD` (store password provisioned via the CLI)
//! - `TEST_DATABASE_URL` (for direct database assertions)

use reqwest::Client;

/// Base URL for the storefront API.
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Base URL for the back-office API.
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// HTTP client with a cookie store, so sessions survive across requests.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Log in to the back-office using `ADMIN_TEST_PASSWORD`.
///
/// # Panics
///
/// Panics if the variable is unset or the login request fails.
pub async fn admin_login(client: &Client) {
    let password =
        std::env::var("ADMIN_TEST_PASSWORD").expect("ADMIN_TEST_PASSWORD must be set for admin tests");
    let base_url = admin_base_url();

    let resp = client
        .post(format!("{base_url}/auth/login"))
        .json(&serde_json::json!({ "password": password }))
        .send()
        .await
        .expect("Failed to send login request");

    assert!(
        resp.status().is_success(),
        "admin login failed: {}",
        resp.status()
    );
}
