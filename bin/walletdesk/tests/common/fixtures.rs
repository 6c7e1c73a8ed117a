#![allow(dead_code)]

use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;
use walletdesk_primitives::models::deposit::Deposit;
use walletdesk_primitives::models::enum_types::{SettlementState, TransactionKind};
use walletdesk_primitives::models::pending_transaction::{
    NewPendingTransaction, PendingTransaction,
};
use walletdesk_primitives::models::user::NewUser;
use walletdesk_primitives::schema::{deposits, pending_transactions, users};

pub fn insert_user(conn: &mut PgConnection, username: &str, credential: Option<&str>, balance: i64) {
    diesel::insert_into(users::table)
        .values(NewUser {
            username,
            gateway_password: credential,
            wallet_balance: balance,
        })
        .execute(conn)
        .expect("failed to insert test user");
}

pub fn insert_pending(
    conn: &mut PgConnection,
    username: &str,
    reference: &str,
    amount: i64,
) -> PendingTransaction {
    diesel::insert_into(pending_transactions::table)
        .values(NewPendingTransaction {
            username,
            reference,
            kind: TransactionKind::Deposit,
            amount,
            txn_state: SettlementState::Pending,
        })
        .get_result::<PendingTransaction>(conn)
        .expect("failed to insert test pending transaction")
}

pub fn insert_deposit(conn: &mut PgConnection, username: &str, order_id: &str, amount: i64) {
    diesel::insert_into(deposits::table)
        .values((
            deposits::order_id.eq(order_id),
            deposits::username.eq(username),
            deposits::amount.eq(amount),
            deposits::status.eq(SettlementState::Successful),
            deposits::created_at.eq(Utc::now()),
        ))
        .execute(conn)
        .expect("failed to insert test deposit");
}

pub fn wallet_balance(conn: &mut PgConnection, username: &str) -> i64 {
    users::table
        .filter(users::username.eq(username))
        .select(users::wallet_balance)
        .first::<i64>(conn)
        .expect("user missing")
}

pub fn pending_by_id(conn: &mut PgConnection, id: Uuid) -> Option<PendingTransaction> {
    pending_transactions::table
        .find(id)
        .first::<PendingTransaction>(conn)
        .optional()
        .expect("query failed")
}

pub fn deposits_with_order(conn: &mut PgConnection, order_id: &str) -> Vec<Deposit> {
    deposits::table
        .filter(deposits::order_id.eq(order_id))
        .load::<Deposit>(conn)
        .expect("query failed")
}
