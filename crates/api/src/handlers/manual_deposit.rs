use axum::extract::{Json, State};
use std::sync::Arc;
use tracing::error;
use validator::Validate;
use walletdesk_core::services::settlement_service::SettlementService;
use walletdesk_core::AppState;
use walletdesk_primitives::error::ApiError;
use walletdesk_primitives::models::settlement_dto::{ManualDepositRequest, SettlementResponse};

#[utoipa::path(
    post,
    path = "/api/deposits/manual",
    request_body = ManualDepositRequest,
    responses(
        (status = 200, description = "Deposit settled", body = SettlementResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Reference already settled"),
        (status = 502, description = "Gateway rejected the transfer"),
        (status = 504, description = "Gateway outcome unknown, nothing recorded"),
    ),
    tag = "Settlement"
)]
pub async fn manual_deposit(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ManualDepositRequest>,
) -> Result<Json<SettlementResponse>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let response = SettlementService::manual_deposit(&state, req).await?;
    Ok(Json(response))
}
