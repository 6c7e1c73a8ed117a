use diesel::prelude::*;
use diesel::sql_types::{BigInt, Text};
use walletdesk_primitives::error::ApiError;
use walletdesk_primitives::models::deposit::{Deposit, NewDeposit};
use walletdesk_primitives::schema::deposits;

#[derive(QueryableByName)]
struct SummaryRow {
    #[diesel(sql_type = BigInt)]
    total: i64,
    #[diesel(sql_type = BigInt)]
    count: i64,
}

#[derive(QueryableByName)]
struct TotalRow {
    #[diesel(sql_type = BigInt)]
    total: i64,
}

pub struct DepositRepository;

impl DepositRepository {
    /// Append-only insert keyed by `order_id`. Returns 0 when the
    /// reference was already settled, so callers can refuse a duplicate
    /// instead of double-crediting.
    pub fn insert(conn: &mut PgConnection, deposit: NewDeposit<'_>) -> Result<usize, ApiError> {
        diesel::insert_into(deposits::table)
            .values(&deposit)
            .on_conflict(deposits::order_id)
            .do_nothing()
            .execute(conn)
            .map_err(ApiError::from)
    }

    pub fn exists_by_order_id(conn: &mut PgConnection, order_id: &str) -> Result<bool, ApiError> {
        let found = deposits::table
            .filter(deposits::order_id.eq(order_id))
            .select(deposits::id)
            .first::<uuid::Uuid>(conn)
            .optional()?;
        Ok(found.is_some())
    }

    pub fn list_recent(conn: &mut PgConnection, limit: i64) -> Result<Vec<Deposit>, ApiError> {
        deposits::table
            .order(deposits::created_at.desc())
            .limit(limit)
            .load::<Deposit>(conn)
            .map_err(ApiError::from)
    }

    // SUM(int8) comes back as NUMERIC, hence the raw query with a cast.
    pub fn summary(conn: &mut PgConnection) -> Result<(i64, i64), ApiError> {
        let row = diesel::sql_query(
            "SELECT COALESCE(SUM(amount), 0)::BIGINT AS total, COUNT(*) AS count FROM deposits",
        )
        .get_result::<SummaryRow>(conn)?;
        Ok((row.total, row.count))
    }

    pub fn total_for_user(conn: &mut PgConnection, username: &str) -> Result<i64, ApiError> {
        let row = diesel::sql_query(
            "SELECT COALESCE(SUM(amount), 0)::BIGINT AS total FROM deposits WHERE username = $1",
        )
        .bind::<Text, _>(username)
        .get_result::<TotalRow>(conn)?;
        Ok(row.total)
    }
}
