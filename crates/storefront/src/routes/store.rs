//! Public store information handler.

use axum::{Json, extract::State};

use crate::models::StoreConfig;
use crate::state::AppState;

/// Public store info: name, contact number, pix key, and the neighborhood
/// fee table the checkout form uses to preview delivery costs.
pub async fn show(State(state): State<AppState>) -> Json<StoreConfig> {
    Json(state.store_config().await)
}
