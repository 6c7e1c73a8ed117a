use crate::models::entities::enum_types::{SettlementState, TransactionKind};
use crate::models::entities::pending_transaction::PendingTransaction;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PendingTransactionDto {
    pub id: Uuid,
    pub username: String,
    pub reference: String,
    pub kind: TransactionKind,
    pub amount: i64,
    pub txn_state: SettlementState,
    pub created_at: DateTime<Utc>,
}

impl From<PendingTransaction> for PendingTransactionDto {
    fn from(tx: PendingTransaction) -> Self {
        Self {
            id: tx.id,
            username: tx.username,
            reference: tx.reference,
            kind: tx.kind,
            amount: tx.amount,
            txn_state: tx.txn_state,
            created_at: tx.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PendingTransactionsResponse {
    pub transactions: Vec<PendingTransactionDto>,
}
