use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Lifecycle of a deposit request. `Pending` is the only non-terminal
/// state; `Processing` marks a row claimed by an in-flight settlement and
/// must never outlive it. `Successful` and `Failed` are terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, EnumString, ToSchema,
)]
#[ExistingTypePath = "crate::schema::sql_types::SettlementState"]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum SettlementState {
    Pending,
    Processing,
    Successful,
    Failed,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, EnumString, ToSchema,
)]
#[ExistingTypePath = "crate::schema::sql_types::TransactionKind"]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
}

impl TransactionKind {
    /// The `type` query parameter value the transfer gateway expects.
    pub fn wire_code(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "0",
        }
    }
}
