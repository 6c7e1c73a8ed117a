use crate::models::entities::deposit::Deposit;
use crate::models::entities::enum_types::SettlementState;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DepositDto {
    pub id: Uuid,
    pub order_id: String,
    pub username: String,
    pub amount: i64,
    pub status: SettlementState,
    pub created_at: DateTime<Utc>,
}

impl From<Deposit> for DepositDto {
    fn from(deposit: Deposit) -> Self {
        Self {
            id: deposit.id,
            order_id: deposit.order_id,
            username: deposit.username,
            amount: deposit.amount,
            status: deposit.status,
            created_at: deposit.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DepositsResponse {
    pub deposits: Vec<DepositDto>,
}

/// Aggregate backing the dashboard cards.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DepositSummary {
    pub total_amount: i64,
    pub count: i64,
}
