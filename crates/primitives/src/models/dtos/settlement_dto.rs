use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Operator-initiated deposit outside of any pending transaction. The
/// reference id is the idempotency key toward the gateway; a rejected or
/// ambiguous attempt leaves no trace and the operator retries with a
/// fresh one.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ManualDepositRequest {
    #[validate(length(min = 1))]
    pub username: String,

    /// Amount in minor units (e.g. cents).
    #[validate(range(min = 1))]
    pub amount: i64,

    #[validate(length(min = 1))]
    pub reference_id: String,

    /// Pre-computed signature override. Absent means the service signs
    /// the request itself.
    pub signature: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePendingTransactionRequest {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub reference_id: String,

    /// Amount in minor units.
    #[validate(range(min = 1))]
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SettlementResponse {
    pub message: String,

    /// Present after a successful settlement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_balance: Option<i64>,
}
