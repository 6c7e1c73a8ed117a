use diesel::prelude::*;
use walletdesk_primitives::error::ApiError;
use walletdesk_primitives::models::user::User;
use walletdesk_primitives::schema::users;

pub struct UserRepository;

impl UserRepository {
    pub fn find_by_username(
        conn: &mut PgConnection,
        username: &str,
    ) -> Result<Option<User>, ApiError> {
        users::table
            .filter(users::username.eq(username))
            .first::<User>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn list_all(conn: &mut PgConnection) -> Result<Vec<User>, ApiError> {
        users::table
            .order(users::username.asc())
            .load::<User>(conn)
            .map_err(ApiError::from)
    }

    /// Atomic balance increment. The only writer of `wallet_balance` in
    /// this system; returns the post-increment balance.
    pub fn credit_balance(
        conn: &mut PgConnection,
        username: &str,
        amount: i64,
    ) -> Result<i64, ApiError> {
        diesel::update(users::table.filter(users::username.eq(username)))
            .set(users::wallet_balance.eq(users::wallet_balance + amount))
            .returning(users::wallet_balance)
            .get_result::<i64>(conn)
            .optional()?
            .ok_or_else(|| ApiError::NotFound(format!("User {} not found", username)))
    }
}
