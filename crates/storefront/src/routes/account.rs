//! Account route handlers (require authentication).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use sushiya_core::{Address, AddressId};

use crate::db::CustomerRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::Customer;
use crate::state::AppState;

/// New saved-address request body.
#[derive(Debug, Deserialize)]
pub struct NewAddressRequest {
    pub neighborhood: String,
    pub street: String,
    pub number: String,
    #[serde(default)]
    pub complement: Option<String>,
}

/// Current customer profile, including saved addresses.
pub async fn profile(
    State(state): State<AppState>,
    RequireAuth(current): RequireAuth,
) -> Result<Json<Customer>> {
    let customer = CustomerRepository::new(state.pool())
        .get_by_code(&current.code)
        .await?
        .ok_or_else(|| AppError::NotFound("account no longer exists".to_string()))?;

    Ok(Json(customer))
}

/// Add a saved address to the current customer.
pub async fn create_address(
    State(state): State<AppState>,
    RequireAuth(current): RequireAuth,
    Json(request): Json<NewAddressRequest>,
) -> Result<(StatusCode, Json<Address>)> {
    if request.neighborhood.trim().is_empty()
        || request.street.trim().is_empty()
        || request.number.trim().is_empty()
    {
        return Err(AppError::BadRequest(
            "neighborhood, street, and number are required".to_string(),
        ));
    }

    let address = Address::new(
        request.neighborhood,
        request.street,
        request.number,
        request.complement,
    );
    let saved = CustomerRepository::new(state.pool())
        .add_address(&current.code, address)
        .await?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// Remove a saved address by id.
pub async fn delete_address(
    State(state): State<AppState>,
    RequireAuth(current): RequireAuth,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>> {
    CustomerRepository::new(state.pool())
        .remove_address(&current.code, AddressId::from(id))
        .await?;

    Ok(Json(json!({ "status": "deleted" })))
}
