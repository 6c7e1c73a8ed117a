use tracing::error;

use crate::app_state::AppState;
use crate::repositories::user_repository::UserRepository;
use walletdesk_primitives::{
    error::ApiError,
    models::user_dto::{UserDto, UsersResponse},
};

pub struct UserService;

impl UserService {
    pub async fn list_users(state: &AppState) -> Result<UsersResponse, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("users.list: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let users = UserRepository::list_all(&mut conn)?;

        Ok(UsersResponse {
            users: users.into_iter().map(UserDto::from).collect(),
        })
    }

    pub async fn get_user(state: &AppState, username: &str) -> Result<UserDto, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("users.get: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        UserRepository::find_by_username(&mut conn, username)?
            .map(UserDto::from)
            .ok_or_else(|| ApiError::NotFound(format!("User {} not found", username)))
    }
}
