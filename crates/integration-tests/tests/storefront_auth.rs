//! Integration tests for customer accounts and sessions.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The storefront server running (cargo run -p sushiya-storefront)
//!
//! Run with: cargo test -p sushiya-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use sushiya_integration_tests::{client, storefront_base_url};

/// Registration body with a unique email and phone per run.
fn registration_body() -> Value {
    let tag = Uuid::new_v4().simple().to_string();
    json!({
        "name": "Cliente Teste",
        "email": format!("teste-{tag}@example.com"),
        "phone": format!("519{}", &tag[..8]),
        "password": "segredo123",
        "neighborhood": "Hipica",
        "street": "Rua das Flores",
        "number": "123"
    })
}

// ============================================================================
// Registration & Login Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server and database"]
async fn test_register_login_logout_flow() {
    let client = client();
    let base_url = storefront_base_url();
    let body = registration_body();

    let resp = client
        .post(format!("{base_url}/auth/register"))
        .json(&body)
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Registration opens a session; the profile should be reachable.
    let resp = client
        .get(format!("{base_url}/account"))
        .send()
        .await
        .expect("Failed to get account");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .post(format!("{base_url}/auth/logout"))
        .send()
        .await
        .expect("Failed to logout");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base_url}/account"))
        .send()
        .await
        .expect("Failed to get account");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Log back in with the same credentials.
    let resp = client
        .post(format!("{base_url}/auth/login"))
        .json(&json!({ "email": body["email"], "password": body["password"] }))
        .send()
        .await
        .expect("Failed to login");
    assert_eq!(resp.status(), StatusCode::OK);

    let parsed: Value = resp.json().await.expect("Failed to parse login response");
    assert_eq!(parsed["customer"]["email"], body["email"]);
}

#[tokio::test]
#[ignore = "Requires running storefront server and database"]
async fn test_duplicate_registration_conflicts() {
    let client = client();
    let base_url = storefront_base_url();
    let body = registration_body();

    let resp = client
        .post(format!("{base_url}/auth/register"))
        .json(&body)
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = client
        .post(format!("{base_url}/auth/register"))
        .json(&body)
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_login_with_wrong_password_is_unauthorized() {
    let resp = client()
        .post(format!("{}/auth/login", storefront_base_url()))
        .json(&json!({ "email": "ninguem@example.com", "password": "errada" }))
        .send()
        .await
        .expect("Failed to login");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Password Recovery Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server and database"]
async fn test_recovery_requires_matching_email_and_phone() {
    let client = client();
    let base_url = storefront_base_url();
    let body = registration_body();

    let resp = client
        .post(format!("{base_url}/auth/register"))
        .json(&body)
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Mismatched phone must not verify.
    let resp = client
        .post(format!("{base_url}/auth/recover/verify"))
        .json(&json!({ "email": body["email"], "phone": "51900000000" }))
        .send()
        .await
        .expect("Failed to verify recovery");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = client
        .post(format!("{base_url}/auth/recover/reset"))
        .json(&json!({
            "email": body["email"],
            "phone": body["phone"],
            "new_password": "novasenha123"
        }))
        .send()
        .await
        .expect("Failed to reset password");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .post(format!("{base_url}/auth/login"))
        .json(&json!({ "email": body["email"], "password": "novasenha123" }))
        .send()
        .await
        .expect("Failed to login");
    assert_eq!(resp.status(), StatusCode::OK);
}
