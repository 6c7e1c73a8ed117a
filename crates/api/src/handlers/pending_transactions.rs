use axum::extract::{Json, State};
use http::StatusCode;
use std::sync::Arc;
use tracing::error;
use validator::Validate;
use walletdesk_core::services::transaction_service::TransactionService;
use walletdesk_core::AppState;
use walletdesk_primitives::error::ApiError;
use walletdesk_primitives::models::settlement_dto::CreatePendingTransactionRequest;
use walletdesk_primitives::models::transaction_dto::{
    PendingTransactionDto, PendingTransactionsResponse,
};

#[utoipa::path(
    get,
    path = "/api/transactions",
    responses(
        (status = 200, description = "All unresolved deposit requests", body = PendingTransactionsResponse),
    ),
    tag = "Transactions"
)]
pub async fn get_pending_transactions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PendingTransactionsResponse>, ApiError> {
    let response = TransactionService::list_pending(&state).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/transactions",
    request_body = CreatePendingTransactionRequest,
    responses(
        (status = 201, description = "Deposit request recorded", body = PendingTransactionDto),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Reference already in use"),
    ),
    tag = "Transactions"
)]
pub async fn create_pending_transaction(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePendingTransactionRequest>,
) -> Result<(StatusCode, Json<PendingTransactionDto>), ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let created = TransactionService::create_pending(&state, req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
