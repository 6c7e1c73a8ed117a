use tracing::info;

use crate::app_state::AppState;
use crate::repositories::pending_transaction_repository::PendingTransactionRepository;
use crate::repositories::user_repository::UserRepository;
use walletdesk_primitives::{
    error::ApiError,
    models::{
        enum_types::{SettlementState, TransactionKind},
        pending_transaction::NewPendingTransaction,
        settlement_dto::CreatePendingTransactionRequest,
        transaction_dto::{PendingTransactionDto, PendingTransactionsResponse},
    },
};

pub struct TransactionService;

impl TransactionService {
    pub async fn list_pending(state: &AppState) -> Result<PendingTransactionsResponse, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let transactions = PendingTransactionRepository::list_all(&mut conn)?;

        Ok(PendingTransactionsResponse {
            transactions: transactions
                .into_iter()
                .map(PendingTransactionDto::from)
                .collect(),
        })
    }

    /// Intake of a new deposit request. The reference id doubles as the
    /// idempotency key toward the gateway, so duplicates are refused.
    pub async fn create_pending(
        state: &AppState,
        req: CreatePendingTransactionRequest,
    ) -> Result<PendingTransactionDto, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        if UserRepository::find_by_username(&mut conn, &req.username)?.is_none() {
            return Err(ApiError::NotFound(format!(
                "User {} not found",
                req.username
            )));
        }

        let created = PendingTransactionRepository::create(
            &mut conn,
            NewPendingTransaction {
                username: &req.username,
                reference: &req.reference_id,
                kind: TransactionKind::Deposit,
                amount: req.amount,
                txn_state: SettlementState::Pending,
            },
        )?
        .ok_or_else(|| {
            ApiError::Conflict(format!(
                "Reference {} is already in use",
                req.reference_id
            ))
        })?;

        info!(
            reference = %created.reference,
            username = %created.username,
            amount = created.amount,
            "pending deposit recorded"
        );

        Ok(PendingTransactionDto::from(created))
    }
}
