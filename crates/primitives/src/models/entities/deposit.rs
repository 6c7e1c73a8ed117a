use crate::models::entities::enum_types::SettlementState;
use chrono::{DateTime, Utc};
use diesel::{Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// Immutable record of a settled, successful deposit. `order_id` carries
/// the resolved reference id and is unique across the ledger.
#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::deposits)]
pub struct Deposit {
    pub id: Uuid,
    pub order_id: String,
    pub username: String,
    pub amount: i64,
    pub status: SettlementState,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::deposits)]
pub struct NewDeposit<'a> {
    pub order_id: &'a str,
    pub username: &'a str,
    pub amount: i64,
    pub status: SettlementState,
    pub created_at: DateTime<Utc>,
}
