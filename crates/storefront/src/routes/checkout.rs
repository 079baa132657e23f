//! Checkout handler.

use axum::{Json, extract::State, http::StatusCode};

use crate::error::AppError;
use crate::services::checkout::{CheckoutError, CheckoutOutcome, CheckoutRequest, process_checkout};
use crate::state::AppState;

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::InvalidCart(msg) | CheckoutError::InvalidDelivery(msg) => {
                Self::BadRequest(msg)
            }
            CheckoutError::ProductUnavailable(code) => {
                Self::BadRequest(format!("product {code} is unavailable"))
            }
            CheckoutError::FeeNegotiationRequired => Self::Conflict(
                "delivery fee for this neighborhood must be negotiated; \
                 confirm with accept_negotiated_fee"
                    .to_string(),
            ),
            CheckoutError::Repository(err) => Self::Database(err),
        }
    }
}

/// Place an order and return the WhatsApp hand-off link.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<CheckoutOutcome>), AppError> {
    let outcome = process_checkout(&state, request).await?;

    Ok((StatusCode::CREATED, Json(outcome)))
}
