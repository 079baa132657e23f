//! Integration tests for the back-office API.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - A store password provisioned (sushiya-cli admin set-password)
//! - The admin server running (cargo run -p sushiya-admin)
//! - `ADMIN_TEST_PASSWORD` set to the provisioned password
//!
//! Run with: cargo test -p sushiya-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

use sushiya_integration_tests::{admin_base_url, admin_login, client};

/// Create a throwaway product and return its code.
async fn create_test_product(client: &Client) -> String {
    let tag = Uuid::new_v4().simple().to_string();
    let resp = client
        .post(format!("{}/products", admin_base_url()))
        .json(&json!({
            "name": format!("Combo Teste {tag}"),
            "description": "Criado pelos testes de integração",
            "price": "39.90",
            "category": "combo"
        }))
        .send()
        .await
        .expect("Failed to create test product");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let product: Value = resp.json().await.expect("Failed to parse product");
    product["code"].as_str().expect("product code missing").to_string()
}

async fn delete_test_product(client: &Client, code: &str) {
    let _ = client
        .delete(format!("{}/products/{code}", admin_base_url()))
        .send()
        .await;
}

// ============================================================================
// Authentication Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_routes_require_session() {
    let client = client();
    let base_url = admin_base_url();

    for path in ["/products", "/customers", "/orders", "/financials", "/settings"] {
        let resp = client
            .get(format!("{base_url}{path}"))
            .send()
            .await
            .expect("Failed to reach admin route");
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "unprotected: {path}");
    }
}

#[tokio::test]
#[ignore = "Requires running admin server with a provisioned password"]
async fn test_login_with_wrong_password_is_unauthorized() {
    let resp = client()
        .post(format!("{}/auth/login", admin_base_url()))
        .json(&json!({ "password": "definitivamente-errada" }))
        .send()
        .await
        .expect("Failed to login");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running admin server with a provisioned password"]
async fn test_logout_closes_session() {
    let client = client();
    admin_login(&client).await;

    let resp = client
        .post(format!("{}/auth/logout", admin_base_url()))
        .send()
        .await
        .expect("Failed to logout");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{}/products", admin_base_url()))
        .send()
        .await
        .expect("Failed to reach products");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Product Management Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server with a provisioned password"]
async fn test_product_lifecycle() {
    let client = client();
    admin_login(&client).await;
    let base_url = admin_base_url();

    let code = create_test_product(&client).await;

    // Toggle it off; the catalog listing still shows it.
    let resp = client
        .post(format!("{base_url}/products/{code}/availability"))
        .json(&json!({ "available": false }))
        .send()
        .await
        .expect("Failed to toggle availability");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base_url}/products/{code}"))
        .send()
        .await
        .expect("Failed to get product");
    let product: Value = resp.json().await.expect("Failed to parse product");
    assert_eq!(product["available"], false);

    // Put it on promotion.
    let resp = client
        .post(format!("{base_url}/products/{code}/pricing"))
        .json(&json!({
            "price": "39.90",
            "is_promotion": true,
            "promotional_price": "29.90"
        }))
        .send()
        .await
        .expect("Failed to update pricing");
    assert_eq!(resp.status(), StatusCode::OK);
    let product: Value = resp.json().await.expect("Failed to parse product");
    assert_eq!(product["promotional_price"], "29.90");

    delete_test_product(&client, &code).await;

    let resp = client
        .get(format!("{base_url}/products/{code}"))
        .send()
        .await
        .expect("Failed to get product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running admin server with a provisioned password"]
async fn test_product_rejects_negative_price() {
    let client = client();
    admin_login(&client).await;

    let resp = client
        .post(format!("{}/products", admin_base_url()))
        .json(&json!({
            "name": "Combo Inválido",
            "price": "-1.00",
            "category": "combo"
        }))
        .send()
        .await
        .expect("Failed to post product");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Order Lifecycle Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server with a provisioned password"]
async fn test_manual_order_and_status_transitions() {
    let client = client();
    admin_login(&client).await;
    let base_url = admin_base_url();

    let resp = client
        .post(format!("{base_url}/orders"))
        .json(&json!({
            "customer_name": "Pedido Balcão",
            "customer_phone": "51988887777",
            "customer_address": "Retirada no balcão",
            "items": [{
                "product_code": "prod_balcao",
                "name": "Combo Sushi",
                "quantity": 1,
                "unit_price": "45.90"
            }],
            "total": "45.90",
            "payment_method": "dinheiro",
            "change_for": "50.00"
        }))
        .send()
        .await
        .expect("Failed to create manual order");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let order: Value = resp.json().await.expect("Failed to parse order");
    let code = order["code"].as_str().expect("order code missing");
    assert_eq!(order["status"], "PENDING");

    // Walk the happy path.
    for status in ["PREPARING", "DELIVERY", "COMPLETED", "ARCHIVED"] {
        let resp = client
            .post(format!("{base_url}/orders/{code}/status"))
            .json(&json!({ "status": status }))
            .send()
            .await
            .expect("Failed to update status");
        assert_eq!(resp.status(), StatusCode::OK, "transition to {status}");
    }

    // Archived is terminal.
    let resp = client
        .post(format!("{base_url}/orders/{code}/status"))
        .json(&json!({ "status": "PENDING" }))
        .send()
        .await
        .expect("Failed to update status");
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let _ = client
        .delete(format!("{base_url}/orders/{code}"))
        .send()
        .await;
}

#[tokio::test]
#[ignore = "Requires running admin server with a provisioned password"]
async fn test_order_windows_exclude_archived_from_current() {
    let client = client();
    admin_login(&client).await;
    let base_url = admin_base_url();

    let resp = client
        .get(format!("{base_url}/orders?window=current"))
        .send()
        .await
        .expect("Failed to list orders");
    assert_eq!(resp.status(), StatusCode::OK);

    let orders: Vec<Value> = resp.json().await.expect("Failed to parse orders");
    for order in &orders {
        assert_ne!(order["status"], "ARCHIVED");
    }
}

// ============================================================================
// Reports & Settings Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server with a provisioned password"]
async fn test_financials_report_shape() {
    let client = client();
    admin_login(&client).await;

    let resp = client
        .get(format!("{}/financials?period=week", admin_base_url()))
        .send()
        .await
        .expect("Failed to get financials");
    assert_eq!(resp.status(), StatusCode::OK);

    let report: Value = resp.json().await.expect("Failed to parse report");
    assert!(report["total_revenue"].is_string());
    assert!(report["total_orders"].is_number());
    assert!(report["series"].is_array());
}

#[tokio::test]
#[ignore = "Requires running admin server with a provisioned password and seed data"]
async fn test_settings_normalize_whatsapp_number() {
    let client = client();
    admin_login(&client).await;
    let base_url = admin_base_url();

    let resp = client
        .get(format!("{base_url}/settings"))
        .send()
        .await
        .expect("Failed to get settings");
    assert_eq!(resp.status(), StatusCode::OK);
    let mut settings: Value = resp.json().await.expect("Failed to parse settings");

    // A formatted local number should be stored digits-only, country-prefixed.
    settings["whatsapp_number"] = json!("(51) 99999-9999");
    let resp = client
        .put(format!("{base_url}/settings"))
        .json(&settings)
        .send()
        .await
        .expect("Failed to update settings");
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Value = resp.json().await.expect("Failed to parse settings");
    assert_eq!(updated["whatsapp_number"], "5551999999999");
}
