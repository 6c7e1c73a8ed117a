use axum::extract::{Json, Path, State};
use std::sync::Arc;
use uuid::Uuid;
use walletdesk_core::services::settlement_service::SettlementService;
use walletdesk_core::AppState;
use walletdesk_primitives::error::ApiError;
use walletdesk_primitives::models::settlement_dto::SettlementResponse;

#[utoipa::path(
    post,
    path = "/api/transactions/{transaction_id}/approve",
    params(("transaction_id" = Uuid, Path, description = "Pending transaction id")),
    responses(
        (status = 200, description = "Transfer accepted, funds deposited", body = SettlementResponse),
        (status = 404, description = "Transaction or user not found"),
        (status = 409, description = "Transaction already being settled"),
        (status = 502, description = "Gateway rejected the transfer"),
        (status = 504, description = "Gateway outcome unknown, transaction still pending"),
    ),
    tag = "Settlement"
)]
pub async fn approve_transaction(
    State(state): State<Arc<AppState>>,
    Path(transaction_id): Path<Uuid>,
) -> Result<Json<SettlementResponse>, ApiError> {
    let response = SettlementService::approve(&state, transaction_id).await?;
    Ok(Json(response))
}
