//! Authentication route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_sessions::Session;

use sushiya_core::Address;

use crate::error::{AppError, Result, clear_sentry_user, set_sentry_user};
use crate::middleware::{clear_current_customer, set_current_customer};
use crate::models::CurrentCustomer;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub neighborhood: String,
    pub street: String,
    pub number: String,
    #[serde(default)]
    pub complement: Option<String>,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Recovery verification request body.
#[derive(Debug, Deserialize)]
pub struct RecoverVerifyRequest {
    pub email: String,
    pub phone: String,
}

/// Password reset request body.
#[derive(Debug, Deserialize)]
pub struct RecoverResetRequest {
    pub email: String,
    pub phone: String,
    pub new_password: String,
}

/// Authenticated customer response.
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub customer: CurrentCustomer,
}

/// Create a new customer account and log them in.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>)> {
    let address = Address::new(
        request.neighborhood,
        request.street,
        request.number,
        request.complement,
    );

    let customer = AuthService::new(state.pool())
        .register(
            &request.name,
            &request.email,
            &request.phone,
            &request.password,
            address,
        )
        .await?;

    let current = CurrentCustomer::from(&customer);
    set_current_customer(&session, &current)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    set_sentry_user(&current.code, current.email.as_deref());

    Ok((StatusCode::CREATED, Json(CustomerResponse { customer: current })))
}

/// Login with email and password.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<LoginRequest>,
) -> Result<Json<CustomerResponse>> {
    let customer = AuthService::new(state.pool())
        .login(&request.email, &request.password)
        .await?;

    // Rotate the session id on privilege change
    session
        .cycle_id()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let current = CurrentCustomer::from(&customer);
    set_current_customer(&session, &current)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    set_sentry_user(&current.code, current.email.as_deref());

    Ok(Json(CustomerResponse { customer: current }))
}

/// Logout the current customer.
pub async fn logout(session: Session) -> Result<Json<Value>> {
    clear_current_customer(&session)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    clear_sentry_user();

    Ok(Json(json!({ "status": "logged_out" })))
}

/// Verify recovery details before allowing a password reset.
pub async fn recover_verify(
    State(state): State<AppState>,
    Json(request): Json<RecoverVerifyRequest>,
) -> Result<Json<Value>> {
    AuthService::new(state.pool())
        .verify_recovery(&request.email, &request.phone)
        .await?;

    Ok(Json(json!({ "status": "verified" })))
}

/// Complete recovery by setting a new password.
pub async fn recover_reset(
    State(state): State<AppState>,
    Json(request): Json<RecoverResetRequest>,
) -> Result<Json<Value>> {
    AuthService::new(state.pool())
        .reset_password(&request.email, &request.phone, &request.new_password)
        .await?;

    Ok(Json(json!({ "status": "password_reset" })))
}
