//! Financial report handler.

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Utc;
use serde::Deserialize;

use sushiya_core::reports::{FinancialReport, Period, financial_report};

use crate::db::OrderRepository;
use crate::error::Result;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Query parameters for the financial report.
#[derive(Debug, Deserialize)]
pub struct FinancialsQuery {
    #[serde(default)]
    pub period: Period,
}

/// Revenue report over the requested period, bucketed for charting.
///
/// Cancelled orders never count; archived ones still do, archival is a
/// listing concern, not a revenue one.
pub async fn show(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Query(query): Query<FinancialsQuery>,
) -> Result<Json<FinancialReport>> {
    let points = OrderRepository::new(state.pool()).revenue_points().await?;
    let report = financial_report(query.period, &points, Utc::now());

    Ok(Json(report))
}
