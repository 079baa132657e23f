//! Store settings handlers.

use axum::{Json, extract::State};
use rust_decimal::Decimal;

use crate::db::SettingsRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::{StoreConfig, StoreSettingsInput};
use crate::services::settings::normalize_whatsapp_number;
use crate::state::AppState;

/// Current store settings.
pub async fn show(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Result<Json<StoreConfig>> {
    let config = SettingsRepository::new(state.pool()).get().await?;

    Ok(Json(config))
}

/// Update store settings. The WhatsApp number is normalized to the
/// digits-only international form `wa.me` links expect.
pub async fn update(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Json(mut input): Json<StoreSettingsInput>,
) -> Result<Json<StoreConfig>> {
    if input.store_name.trim().is_empty() {
        return Err(AppError::BadRequest("store name is required".to_string()));
    }
    if input.default_delivery_fee < Decimal::ZERO {
        return Err(AppError::BadRequest(
            "default delivery fee must not be negative".to_string(),
        ));
    }

    input.whatsapp_number = normalize_whatsapp_number(&input.whatsapp_number);
    if input.whatsapp_number.is_empty() {
        return Err(AppError::BadRequest(
            "whatsapp number is required".to_string(),
        ));
    }

    let config = SettingsRepository::new(state.pool()).update(&input).await?;

    Ok(Json(config))
}
