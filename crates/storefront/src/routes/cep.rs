//! CEP lookup handler.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::error::Result;
use crate::services::viacep::{CepAddress, ViaCepClient};
use crate::state::AppState;

/// Look up a postal code via the ViaCEP proxy.
pub async fn lookup(
    State(state): State<AppState>,
    Path(cep): Path<String>,
) -> Result<Json<CepAddress>> {
    let address = ViaCepClient::new(state.http_client().clone())
        .lookup(&cep)
        .await?;

    Ok(Json(address))
}
