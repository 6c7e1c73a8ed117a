use axum::extract::{Json, Path, State};
use std::sync::Arc;
use uuid::Uuid;
use walletdesk_core::services::settlement_service::SettlementService;
use walletdesk_core::AppState;
use walletdesk_primitives::error::ApiError;
use walletdesk_primitives::models::settlement_dto::SettlementResponse;

#[utoipa::path(
    post,
    path = "/api/transactions/{transaction_id}/reject",
    params(("transaction_id" = Uuid, Path, description = "Pending transaction id")),
    responses(
        (status = 200, description = "Transaction removed", body = SettlementResponse),
        (status = 404, description = "Transaction not found"),
        (status = 409, description = "Transaction is mid-settlement"),
    ),
    tag = "Settlement"
)]
pub async fn reject_transaction(
    State(state): State<Arc<AppState>>,
    Path(transaction_id): Path<Uuid>,
) -> Result<Json<SettlementResponse>, ApiError> {
    let response = SettlementService::reject(&state, transaction_id).await?;
    Ok(Json(response))
}
