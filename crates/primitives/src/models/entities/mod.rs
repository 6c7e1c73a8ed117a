pub mod audit_log;
pub mod deposit;
pub mod enum_types;
pub mod pending_transaction;
pub mod user;
