use crate::app_state::AppState;
use crate::repositories::deposit_repository::DepositRepository;
use walletdesk_primitives::{
    error::ApiError,
    models::deposit_dto::{DepositDto, DepositSummary, DepositsResponse},
};

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 500;

pub struct DepositService;

impl DepositService {
    pub async fn recent_deposits(
        state: &AppState,
        limit: Option<i64>,
    ) -> Result<DepositsResponse, ApiError> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let deposits = DepositRepository::list_recent(&mut conn, limit)?;

        Ok(DepositsResponse {
            deposits: deposits.into_iter().map(DepositDto::from).collect(),
        })
    }

    pub async fn summary(state: &AppState) -> Result<DepositSummary, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let (total_amount, count) = DepositRepository::summary(&mut conn)?;

        Ok(DepositSummary {
            total_amount,
            count,
        })
    }
}
