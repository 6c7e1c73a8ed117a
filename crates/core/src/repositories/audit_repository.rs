use diesel::prelude::*;
use walletdesk_primitives::error::ApiError;
use walletdesk_primitives::models::audit_log::NewAuditLog;
use walletdesk_primitives::schema::audit_logs;

pub struct AuditRepository;

impl AuditRepository {
    pub fn insert(conn: &mut PgConnection, entry: NewAuditLog<'_>) -> Result<(), ApiError> {
        diesel::insert_into(audit_logs::table)
            .values(&entry)
            .execute(conn)?;
        Ok(())
    }
}
