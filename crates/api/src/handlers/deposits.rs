use axum::extract::{Json, Query, State};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use walletdesk_core::services::deposit_service::DepositService;
use walletdesk_core::AppState;
use walletdesk_primitives::error::ApiError;
use walletdesk_primitives::models::deposit_dto::{DepositSummary, DepositsResponse};

#[derive(Debug, Deserialize, IntoParams)]
pub struct DepositListQuery {
    /// Maximum number of rows, newest first.
    pub limit: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/deposits",
    params(DepositListQuery),
    responses(
        (status = 200, description = "Settled deposits, newest first", body = DepositsResponse),
    ),
    tag = "Deposits"
)]
pub async fn get_deposits(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DepositListQuery>,
) -> Result<Json<DepositsResponse>, ApiError> {
    let response = DepositService::recent_deposits(&state, query.limit).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/deposits/summary",
    responses(
        (status = 200, description = "Deposit totals for the dashboard", body = DepositSummary),
    ),
    tag = "Deposits"
)]
pub async fn get_deposit_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DepositSummary>, ApiError> {
    let summary = DepositService::summary(&state).await?;
    Ok(Json(summary))
}
