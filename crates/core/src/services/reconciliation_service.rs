use chrono::{Duration, Utc};
use diesel::prelude::*;
use serde_json::json;
use tracing::warn;

use crate::repositories::pending_transaction_repository::PendingTransactionRepository;
use crate::services::audit_service::AuditService;
use walletdesk_primitives::error::ApiError;
use walletdesk_primitives::schema::{deposits, pending_transactions};

/// Repairs the two kinds of drift a crashed or raced settlement can
/// leave behind: claims stuck in `processing`, and pending rows whose
/// reference already landed in the deposits ledger.
pub struct ReconciliationService;

impl ReconciliationService {
    pub fn release_stale_claims(
        conn: &mut PgConnection,
        stale_after_secs: u64,
    ) -> Result<usize, ApiError> {
        let cutoff = Utc::now() - Duration::seconds(stale_after_secs as i64);
        let released = PendingTransactionRepository::release_stale(conn, cutoff)?;

        if released > 0 {
            warn!(released, "released stale settlement claims back to pending");
            let _ = AuditService::record(
                conn,
                "reconcile.claims_released",
                "pending_transactions",
                "-",
                json!({ "released": released }),
            );
        }

        Ok(released)
    }

    /// A pending row whose reference already exists in the deposits
    /// ledger is settled; only its removal went missing. Dropping it is
    /// safe and prevents a later approve from double-charging the
    /// gateway.
    pub fn remove_settled_pending(conn: &mut PgConnection) -> Result<usize, ApiError> {
        let removed = diesel::delete(
            pending_transactions::table.filter(
                pending_transactions::reference.eq_any(deposits::table.select(deposits::order_id)),
            ),
        )
        .execute(conn)?;

        if removed > 0 {
            warn!(removed, "removed pending rows already present in the deposit ledger");
            let _ = AuditService::record(
                conn,
                "reconcile.settled_pending_removed",
                "pending_transactions",
                "-",
                json!({ "removed": removed }),
            );
        }

        Ok(removed)
    }
}
