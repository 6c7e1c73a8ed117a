pub mod audit_service;
pub mod deposit_service;
pub mod reconciliation_service;
pub mod settlement_service;
pub mod transaction_service;
pub mod user_service;
