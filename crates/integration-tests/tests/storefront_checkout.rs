//! Integration tests for the checkout flow.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations and seed data applied
//! - The storefront server running (cargo run -p sushiya-storefront)
//!
//! Run with: cargo test -p sushiya-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use sushiya_integration_tests::{client, storefront_base_url};

/// Fetch the first available product from the live menu.
async fn first_menu_product(client: &Client) -> Value {
    let resp = client
        .get(format!("{}/menu", storefront_base_url()))
        .send()
        .await
        .expect("Failed to get menu");
    let products: Vec<Value> = resp.json().await.expect("Failed to parse menu");
    products.into_iter().next().expect("seeded menu should not be empty")
}

fn checkout_body(product_code: &Value, neighborhood: &str) -> Value {
    json!({
        "customer_name": "Cliente Teste",
        "customer_phone": "51999990000",
        "delivery": {
            "neighborhood": neighborhood,
            "street": "Rua das Flores",
            "number": "123",
            "complement": "Apto 42"
        },
        "items": [{ "product_code": product_code, "quantity": 2 }],
        "payment_method": "pix"
    })
}

// ============================================================================
// Validation Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_checkout_rejects_empty_cart() {
    let body = json!({
        "customer_name": "Cliente Teste",
        "customer_phone": "51999990000",
        "delivery": {
            "neighborhood": "Hipica",
            "street": "Rua das Flores",
            "number": "123"
        },
        "items": [],
        "payment_method": "pix"
    });

    let resp = client()
        .post(format!("{}/checkout", storefront_base_url()))
        .json(&body)
        .send()
        .await
        .expect("Failed to post checkout");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running storefront server and seed data"]
async fn test_checkout_requires_fee_acknowledgement_for_unmapped_neighborhood() {
    let client = client();
    let product = first_menu_product(&client).await;

    let body = checkout_body(&product["code"], "Bairro Desconhecido");
    let resp = client
        .post(format!("{}/checkout", storefront_base_url()))
        .json(&body)
        .send()
        .await
        .expect("Failed to post checkout");

    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

// ============================================================================
// Order Placement Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server and seed data"]
async fn test_checkout_returns_whatsapp_link() {
    let client = client();
    let product = first_menu_product(&client).await;

    let body = checkout_body(&product["code"], "Hipica");
    let resp = client
        .post(format!("{}/checkout", storefront_base_url()))
        .json(&body)
        .send()
        .await
        .expect("Failed to post checkout");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let outcome: Value = resp.json().await.expect("Failed to parse checkout outcome");

    let url = outcome["whatsapp_url"].as_str().expect("whatsapp_url missing");
    assert!(url.starts_with("https://wa.me/"), "unexpected url: {url}");
    assert!(url.contains("text="), "link should carry the order summary");

    assert!(outcome["order_code"].is_string());
    assert!(outcome["persisted"].is_boolean());
    assert!(outcome["subtotal"].is_string());
    assert!(outcome["total"].is_string());
}

#[tokio::test]
#[ignore = "Requires running storefront server and seed data"]
async fn test_checkout_negotiated_fee_excluded_from_total() {
    let client = client();
    let product = first_menu_product(&client).await;

    let mut body = checkout_body(&product["code"], "Bairro Desconhecido");
    body["accept_negotiated_fee"] = json!(true);

    let resp = client
        .post(format!("{}/checkout", storefront_base_url()))
        .json(&body)
        .send()
        .await
        .expect("Failed to post checkout");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let outcome: Value = resp.json().await.expect("Failed to parse checkout outcome");

    assert!(outcome["delivery_fee"].is_null());
    assert_eq!(outcome["subtotal"], outcome["total"]);
}
