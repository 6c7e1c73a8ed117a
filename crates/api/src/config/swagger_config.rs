use utoipa::OpenApi;
use walletdesk_primitives::models::deposit_dto::{DepositDto, DepositSummary, DepositsResponse};
use walletdesk_primitives::models::enum_types::{SettlementState, TransactionKind};
use walletdesk_primitives::models::settlement_dto::{
    CreatePendingTransactionRequest, ManualDepositRequest, SettlementResponse,
};
use walletdesk_primitives::models::system_dto::HealthStatus;
use walletdesk_primitives::models::transaction_dto::{
    PendingTransactionDto, PendingTransactionsResponse,
};
use walletdesk_primitives::models::user_dto::{UserDto, UsersResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::users::get_users,
        crate::handlers::users::get_user,
        crate::handlers::pending_transactions::get_pending_transactions,
        crate::handlers::pending_transactions::create_pending_transaction,
        crate::handlers::approve::approve_transaction,
        crate::handlers::reject::reject_transaction,
        crate::handlers::manual_deposit::manual_deposit,
        crate::handlers::deposits::get_deposits,
        crate::handlers::deposits::get_deposit_summary,
    ),
    components(schemas(
        HealthStatus,
        UserDto,
        UsersResponse,
        PendingTransactionDto,
        PendingTransactionsResponse,
        CreatePendingTransactionRequest,
        ManualDepositRequest,
        SettlementResponse,
        DepositDto,
        DepositsResponse,
        DepositSummary,
        SettlementState,
        TransactionKind,
    )),
    tags(
        (name = "Settlement", description = "Approve, reject and manually settle deposits"),
        (name = "Transactions", description = "Pending deposit requests"),
        (name = "Users", description = "Wallet holders"),
        (name = "Deposits", description = "Settled deposit ledger"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;
