//! Back-office authentication handlers.

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::middleware::{RequireAdminAuth, clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::services::auth::AdminAuthService;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Password change request body.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Login with the store password.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Value>> {
    AdminAuthService::new(state.pool())
        .login(&request.password)
        .await?;

    // Rotate the session id on privilege change
    session
        .cycle_id()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let admin = CurrentAdmin {
        logged_in_at: chrono::Utc::now(),
    };
    set_current_admin(&session, &admin)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(json!({ "status": "logged_in" })))
}

/// Logout the current operator.
pub async fn logout(session: Session) -> Result<Json<Value>> {
    clear_current_admin(&session)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(json!({ "status": "logged_out" })))
}

/// Change the store password; requires the current one.
pub async fn change_password(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<Json<Value>> {
    AdminAuthService::new(state.pool())
        .change_password(&request.current_password, &request.new_password)
        .await?;

    Ok(Json(json!({ "status": "password_changed" })))
}
