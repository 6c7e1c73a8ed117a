use diesel::PgConnection;
use serde_json::Value;
use walletdesk_primitives::error::ApiError;
use walletdesk_primitives::models::audit_log::NewAuditLog;

use crate::repositories::audit_repository::AuditRepository;

/// Best-effort settlement audit trail. Callers ignore failures; the
/// audit log must never block a settlement.
pub struct AuditService;

impl AuditService {
    pub fn record(
        conn: &mut PgConnection,
        event_type: &str,
        target_type: &str,
        target_id: &str,
        metadata: Value,
    ) -> Result<(), ApiError> {
        AuditRepository::insert(
            conn,
            NewAuditLog {
                event_type,
                target_type: Some(target_type),
                target_id: Some(target_id),
                metadata,
            },
        )
    }
}
