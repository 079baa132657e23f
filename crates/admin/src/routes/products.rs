//! Product management handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};

use sushiya_core::ProductCode;

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::{Product, ProductInput};
use crate::state::AppState;

/// Availability toggle request body.
#[derive(Debug, Deserialize)]
pub struct AvailabilityRequest {
    pub available: bool,
}

/// Pricing update request body.
#[derive(Debug, Deserialize)]
pub struct PricingRequest {
    pub price: Decimal,
    #[serde(default)]
    pub is_promotion: bool,
    #[serde(default)]
    pub promotional_price: Option<Decimal>,
}

fn validate_input(input: &ProductInput) -> Result<()> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }
    if input.price < Decimal::ZERO {
        return Err(AppError::BadRequest("price must not be negative".to_string()));
    }
    if let Some(promo) = input.promotional_price
        && promo < Decimal::ZERO
    {
        return Err(AppError::BadRequest(
            "promotional price must not be negative".to_string(),
        ));
    }
    Ok(())
}

/// List all products, available or not.
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list_all().await?;

    Ok(Json(products))
}

/// Product detail.
pub async fn show(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(code): Path<ProductCode>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.pool())
        .get_by_code(&code)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {code}")))?;

    Ok(Json(product))
}

/// Create a product.
pub async fn create(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Json(input): Json<ProductInput>,
) -> Result<(StatusCode, Json<Product>)> {
    validate_input(&input)?;

    let product = ProductRepository::new(state.pool()).create(&input).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace a product's fields.
pub async fn update(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(code): Path<ProductCode>,
    Json(input): Json<ProductInput>,
) -> Result<Json<Product>> {
    validate_input(&input)?;

    let product = ProductRepository::new(state.pool())
        .update(&code, &input)
        .await?;

    Ok(Json(product))
}

/// Toggle a product's availability.
pub async fn set_availability(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(code): Path<ProductCode>,
    Json(request): Json<AvailabilityRequest>,
) -> Result<Json<Value>> {
    ProductRepository::new(state.pool())
        .set_availability(&code, request.available)
        .await?;

    Ok(Json(json!({ "status": "updated" })))
}

/// Update a product's price and promotion.
pub async fn set_pricing(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(code): Path<ProductCode>,
    Json(request): Json<PricingRequest>,
) -> Result<Json<Value>> {
    if request.price < Decimal::ZERO {
        return Err(AppError::BadRequest("price must not be negative".to_string()));
    }

    ProductRepository::new(state.pool())
        .set_pricing(
            &code,
            request.price,
            request.is_promotion,
            request.promotional_price,
        )
        .await?;

    Ok(Json(json!({ "status": "updated" })))
}

/// Delete a product.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(code): Path<ProductCode>,
) -> Result<Json<Value>> {
    ProductRepository::new(state.pool()).delete(&code).await?;

    Ok(Json(json!({ "status": "deleted" })))
}
