pub mod app_state;
pub mod dtos;
pub mod entities;

pub use app_state::{app_config, gateway_details};
pub use dtos::{deposit_dto, settlement_dto, system_dto, transaction_dto, user_dto};
pub use entities::{audit_log, deposit, enum_types, pending_transaction, user};

pub use app_state::app_config::AppConfig;
pub use app_state::gateway_details::GatewayInfo;
pub use dtos::deposit_dto::{DepositDto, DepositSummary, DepositsResponse};
pub use dtos::settlement_dto::{
    CreatePendingTransactionRequest, ManualDepositRequest, SettlementResponse,
};
pub use dtos::system_dto::HealthStatus;
pub use dtos::transaction_dto::{PendingTransactionDto, PendingTransactionsResponse};
pub use dtos::user_dto::{UserDto, UsersResponse};
pub use entities::audit_log::{AuditLog, NewAuditLog};
pub use entities::deposit::{Deposit, NewDeposit};
pub use entities::enum_types::{SettlementState, TransactionKind};
pub use entities::pending_transaction::{NewPendingTransaction, PendingTransaction};
pub use entities::user::{NewUser, User};
