//! Customer management handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use sushiya_core::CustomerCode;

use crate::db::CustomerRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::Customer;
use crate::state::AppState;

/// Contact update request body.
#[derive(Debug, Deserialize)]
pub struct UpdateCustomerRequest {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub phone: String,
}

/// List all customers.
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Result<Json<Vec<Customer>>> {
    let customers = CustomerRepository::new(state.pool()).list_all().await?;

    Ok(Json(customers))
}

/// Customer detail.
pub async fn show(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(code): Path<CustomerCode>,
) -> Result<Json<Customer>> {
    let customer = CustomerRepository::new(state.pool())
        .get_by_code(&code)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer {code}")))?;

    Ok(Json(customer))
}

/// Update a customer's contact details.
pub async fn update(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(code): Path<CustomerCode>,
    Json(request): Json<UpdateCustomerRequest>,
) -> Result<Json<Customer>> {
    if request.name.trim().is_empty() || request.phone.trim().is_empty() {
        return Err(AppError::BadRequest(
            "name and phone are required".to_string(),
        ));
    }

    let customer = CustomerRepository::new(state.pool())
        .update_contact(
            &code,
            request.name.trim(),
            request.email.as_deref().map(str::trim),
            request.phone.trim(),
        )
        .await?;

    Ok(Json(customer))
}

/// Delete a customer account.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(code): Path<CustomerCode>,
) -> Result<Json<Value>> {
    CustomerRepository::new(state.pool()).delete(&code).await?;

    Ok(Json(json!({ "status": "deleted" })))
}
