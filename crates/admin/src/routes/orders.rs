//! Order management handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};

use sushiya_core::business_day::OrderWindow;
use sushiya_core::{OrderCode, OrderStatus};

use crate::db::OrderRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::{NewManualOrder, Order};
use crate::state::AppState;

/// Query parameters for the order listing.
#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    #[serde(default)]
    pub window: OrderWindow,
}

/// Status transition request body.
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: OrderStatus,
}

/// List orders in a business-day window.
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Query(query): Query<OrdersQuery>,
) -> Result<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.pool()).list(query.window).await?;

    Ok(Json(orders))
}

/// Order detail.
pub async fn show(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(code): Path<OrderCode>,
) -> Result<Json<Order>> {
    let order = OrderRepository::new(state.pool())
        .get_by_code(&code)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {code}")))?;

    Ok(Json(order))
}

/// Record a manually entered order (phone or walk-in).
pub async fn create_manual(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Json(input): Json<NewManualOrder>,
) -> Result<(StatusCode, Json<Order>)> {
    if input.customer_name.trim().is_empty() {
        return Err(AppError::BadRequest("customer name is required".to_string()));
    }
    if input.items.is_empty() {
        return Err(AppError::BadRequest("at least one item is required".to_string()));
    }
    if input.total < Decimal::ZERO {
        return Err(AppError::BadRequest("total must not be negative".to_string()));
    }

    let order = OrderRepository::new(state.pool())
        .create_manual(&input)
        .await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// Move an order through its lifecycle.
pub async fn update_status(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(code): Path<OrderCode>,
    Json(request): Json<StatusRequest>,
) -> Result<Json<Order>> {
    let order = OrderRepository::new(state.pool())
        .update_status(&code, request.status)
        .await?;

    Ok(Json(order))
}

/// Hard-delete an order.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(code): Path<OrderCode>,
) -> Result<Json<Value>> {
    OrderRepository::new(state.pool()).delete(&code).await?;

    Ok(Json(json!({ "status": "deleted" })))
}
