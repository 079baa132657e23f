//! Integration tests for the storefront catalog endpoints.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations and seed data applied
//! - The storefront server running (cargo run -p sushiya-storefront)
//!
//! Run with: cargo test -p sushiya-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::Value;

use sushiya_integration_tests::{client, storefront_base_url};

// ============================================================================
// Health Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_health_endpoint() {
    let resp = client()
        .get(format!("{}/health", storefront_base_url()))
        .send()
        .await
        .expect("Failed to reach health endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running storefront server and database"]
async fn test_readiness_probes_database() {
    let resp = client()
        .get(format!("{}/health/ready", storefront_base_url()))
        .send()
        .await
        .expect("Failed to reach readiness endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
}

// ============================================================================
// Menu Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server and seed data"]
async fn test_menu_lists_available_products() {
    let resp = client()
        .get(format!("{}/menu", storefront_base_url()))
        .send()
        .await
        .expect("Failed to get menu");

    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<Value> = resp.json().await.expect("Failed to parse menu");
    assert!(!products.is_empty(), "seeded menu should not be empty");

    for product in &products {
        assert_eq!(product["available"], true, "menu must hide unavailable products");
        assert!(product["name"].is_string());
        assert!(product["price"].is_string(), "prices serialize as strings");
    }
}

#[tokio::test]
#[ignore = "Requires running storefront server and seed data"]
async fn test_menu_category_filter() {
    let resp = client()
        .get(format!("{}/menu?category=bebida", storefront_base_url()))
        .send()
        .await
        .expect("Failed to get filtered menu");

    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<Value> = resp.json().await.expect("Failed to parse menu");

    for product in &products {
        assert_eq!(product["category"], "bebida");
    }
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_menu_rejects_unknown_category() {
    let resp = client()
        .get(format!("{}/menu?category=pizza", storefront_base_url()))
        .send()
        .await
        .expect("Failed to get menu");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Store Config Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server and seed data"]
async fn test_store_config_exposes_fee_table() {
    let resp = client()
        .get(format!("{}/store", storefront_base_url()))
        .send()
        .await
        .expect("Failed to get store config");

    assert_eq!(resp.status(), StatusCode::OK);
    let config: Value = resp.json().await.expect("Failed to parse store config");

    assert!(config["store_name"].is_string());
    assert!(config["neighborhood_fees"].is_array());
    // Admin credentials must never leak through the public surface.
    assert!(config.get("admin_password_hash").is_none());
}

// ============================================================================
// Postal Code Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_cep_rejects_malformed_input() {
    let resp = client()
        .get(format!("{}/cep/123", storefront_base_url()))
        .send()
        .await
        .expect("Failed to reach cep endpoint");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running storefront server and ViaCEP access"]
async fn test_cep_resolves_known_address() {
    // Praça da Sé, São Paulo. Stable enough for a smoke test.
    let resp = client()
        .get(format!("{}/cep/01001-000", storefront_base_url()))
        .send()
        .await
        .expect("Failed to reach cep endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
    let address: Value = resp.json().await.expect("Failed to parse address");
    assert_eq!(address["localidade"], "São Paulo");
}
