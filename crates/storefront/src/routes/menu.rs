//! Menu catalog handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use sushiya_core::ProductCategory;

use crate::db::ProductRepository;
use crate::error::Result;
use crate::models::Product;
use crate::state::AppState;

/// Query parameters for the menu listing.
#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub category: Option<ProductCategory>,
}

/// List available products, optionally filtered by category.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool())
        .list_available(query.category)
        .await?;

    Ok(Json(products))
}
