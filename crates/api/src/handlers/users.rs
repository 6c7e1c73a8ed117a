use axum::extract::{Json, Path, State};
use std::sync::Arc;
use walletdesk_core::services::user_service::UserService;
use walletdesk_core::AppState;
use walletdesk_primitives::error::ApiError;
use walletdesk_primitives::models::user_dto::{UserDto, UsersResponse};

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All wallet holders", body = UsersResponse),
    ),
    tag = "Users"
)]
pub async fn get_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<UsersResponse>, ApiError> {
    let response = UserService::list_users(&state).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/users/{username}",
    params(("username" = String, Path, description = "Wallet holder username")),
    responses(
        (status = 200, description = "User details", body = UserDto),
        (status = 404, description = "User not found"),
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<UserDto>, ApiError> {
    let user = UserService::get_user(&state, &username).await?;
    Ok(Json(user))
}
