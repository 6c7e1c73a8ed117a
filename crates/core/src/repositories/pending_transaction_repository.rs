use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;
use walletdesk_primitives::error::ApiError;
use walletdesk_primitives::models::enum_types::SettlementState;
use walletdesk_primitives::models::pending_transaction::{
    NewPendingTransaction, PendingTransaction,
};
use walletdesk_primitives::schema::pending_transactions;

pub struct PendingTransactionRepository;

impl PendingTransactionRepository {
    pub fn find_by_id(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<Option<PendingTransaction>, ApiError> {
        pending_transactions::table
            .find(id)
            .first::<PendingTransaction>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn list_all(conn: &mut PgConnection) -> Result<Vec<PendingTransaction>, ApiError> {
        pending_transactions::table
            .order(pending_transactions::created_at.desc())
            .load::<PendingTransaction>(conn)
            .map_err(ApiError::from)
    }

    /// Returns `None` when the reference is already taken.
    pub fn create(
        conn: &mut PgConnection,
        new_tx: NewPendingTransaction<'_>,
    ) -> Result<Option<PendingTransaction>, ApiError> {
        diesel::insert_into(pending_transactions::table)
            .values(&new_tx)
            .on_conflict(pending_transactions::reference)
            .do_nothing()
            .get_result::<PendingTransaction>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    /// Atomic claim: flips exactly one `pending` row to `processing` and
    /// returns it. A second caller gets `None` and must not proceed, so
    /// the gateway is never called twice for one pending record.
    pub fn claim(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<Option<PendingTransaction>, ApiError> {
        diesel::update(
            pending_transactions::table
                .find(id)
                .filter(pending_transactions::txn_state.eq(SettlementState::Pending)),
        )
        .set((
            pending_transactions::txn_state.eq(SettlementState::Processing),
            pending_transactions::claimed_at.eq(Some(Utc::now())),
        ))
        .get_result::<PendingTransaction>(conn)
        .optional()
        .map_err(ApiError::from)
    }

    /// Puts a claimed row back into the pending set, keeping its
    /// reference so a retry reuses the same idempotency key.
    pub fn release(conn: &mut PgConnection, id: Uuid) -> Result<usize, ApiError> {
        diesel::update(
            pending_transactions::table
                .find(id)
                .filter(pending_transactions::txn_state.eq(SettlementState::Processing)),
        )
        .set((
            pending_transactions::txn_state.eq(SettlementState::Pending),
            pending_transactions::claimed_at.eq(None::<DateTime<Utc>>),
        ))
        .execute(conn)
        .map_err(ApiError::from)
    }

    /// Unconditional removal, used inside the settlement transaction
    /// once the row's fate is decided.
    pub fn delete(conn: &mut PgConnection, id: Uuid) -> Result<usize, ApiError> {
        diesel::delete(pending_transactions::table.find(id))
            .execute(conn)
            .map_err(ApiError::from)
    }

    /// Removal gated on the row still being unclaimed (reject path).
    pub fn delete_if_pending(conn: &mut PgConnection, id: Uuid) -> Result<usize, ApiError> {
        diesel::delete(
            pending_transactions::table
                .find(id)
                .filter(pending_transactions::txn_state.eq(SettlementState::Pending)),
        )
        .execute(conn)
        .map_err(ApiError::from)
    }

    /// Releases claims older than the cutoff. Covers a process that died
    /// between claiming and finishing a settlement.
    pub fn release_stale(
        conn: &mut PgConnection,
        cutoff: DateTime<Utc>,
    ) -> Result<usize, ApiError> {
        diesel::update(
            pending_transactions::table
                .filter(pending_transactions::txn_state.eq(SettlementState::Processing))
                .filter(pending_transactions::claimed_at.lt(cutoff)),
        )
        .set((
            pending_transactions::txn_state.eq(SettlementState::Pending),
            pending_transactions::claimed_at.eq(None::<DateTime<Utc>>),
        ))
        .execute(conn)
        .map_err(ApiError::from)
    }
}
