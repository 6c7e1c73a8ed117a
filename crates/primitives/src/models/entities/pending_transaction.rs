use crate::models::entities::enum_types::{SettlementState, TransactionKind};
use chrono::{DateTime, Utc};
use diesel::{Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// An unresolved deposit request. Resolution removes the row: a
/// successful settlement moves it into the deposits ledger, a rejection
/// or definitive gateway failure simply deletes it.
#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::pending_transactions)]
pub struct PendingTransaction {
    pub id: Uuid,
    pub username: String,
    pub reference: String,
    pub kind: TransactionKind,
    pub amount: i64,
    pub txn_state: SettlementState,
    /// Set while a settlement holds the claim on this row.
    pub claimed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::pending_transactions)]
pub struct NewPendingTransaction<'a> {
    pub username: &'a str,
    pub reference: &'a str,
    pub kind: TransactionKind,
    pub amount: i64,
    pub txn_state: SettlementState,
}
