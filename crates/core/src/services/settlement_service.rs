use crate::app_state::AppState;
use crate::clients::transfer_gateway::{
    GatewayReply, TransferGatewayClient, TransferOutcome, TransferRequest,
};
use crate::repositories::deposit_repository::DepositRepository;
use crate::repositories::pending_transaction_repository::PendingTransactionRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::audit_service::AuditService;
use crate::signature::{transfer_signature, wire_amount, SignatureFields};
use chrono::Utc;
use diesel::prelude::*;
use secrecy::ExposeSecret;
use serde_json::json;
use std::time::Duration;
use tracing::{error, info, warn};
use uuid::Uuid;
use walletdesk_primitives::{
    error::ApiError,
    models::{
        deposit::NewDeposit,
        enum_types::{SettlementState, TransactionKind},
        settlement_dto::{ManualDepositRequest, SettlementResponse},
        user::User,
    },
};

pub struct SettlementService;

impl SettlementService {
    /// Settles a pending deposit through the transfer gateway.
    ///
    /// The row is claimed before the gateway call so a concurrent approve
    /// of the same id cannot trigger a second transfer. Outcomes:
    /// accepted -> deposit + balance credit + removal in one transaction;
    /// unknown -> claim released, nothing mutated; rejected -> removal,
    /// no balance change.
    pub async fn approve(
        state: &AppState,
        transaction_id: Uuid,
    ) -> Result<SettlementResponse, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let Some(tx) = PendingTransactionRepository::claim(&mut conn, transaction_id)? else {
            return match PendingTransactionRepository::find_by_id(&mut conn, transaction_id)? {
                Some(_) => Err(ApiError::Conflict(format!(
                    "Transaction {} is already being settled",
                    transaction_id
                ))),
                None => Err(ApiError::NotFound(format!(
                    "Pending transaction {} not found",
                    transaction_id
                ))),
            };
        };

        let user = match Self::lookup_signer(&mut conn, &tx.username) {
            Ok(user) => user,
            Err(e) => {
                if let Err(release_err) = PendingTransactionRepository::release(&mut conn, tx.id) {
                    error!(
                        transaction_id = %tx.id,
                        error = %release_err,
                        "failed to release claim after signer lookup failure"
                    );
                }
                return Err(e);
            }
        };
        let password = user.gateway_password.as_deref().unwrap_or_default();

        let reply = match Self::call_gateway(
            state,
            &tx.username,
            password,
            &tx.reference,
            tx.amount,
            None,
        )
        .await
        {
            Ok(reply) => reply,
            Err(e) => {
                let _ = PendingTransactionRepository::release(&mut conn, tx.id);
                return Err(e);
            }
        };

        match reply.outcome() {
            TransferOutcome::Accepted => {
                let settled = conn.transaction::<_, ApiError, _>(|conn| {
                    let inserted = DepositRepository::insert(
                        conn,
                        NewDeposit {
                            order_id: &tx.reference,
                            username: &tx.username,
                            amount: tx.amount,
                            status: SettlementState::Successful,
                            created_at: tx.created_at,
                        },
                    )?;
                    if inserted == 0 {
                        return Err(ApiError::Conflict(format!(
                            "Reference {} already has a settled deposit",
                            tx.reference
                        )));
                    }
                    PendingTransactionRepository::delete(conn, tx.id)?;
                    UserRepository::credit_balance(conn, &tx.username, tx.amount)
                });

                match settled {
                    Ok(new_balance) => {
                        info!(
                            reference = %tx.reference,
                            username = %tx.username,
                            amount = tx.amount,
                            "transaction approved and funds deposited"
                        );
                        let _ = AuditService::record(
                            &mut conn,
                            "settlement.approved",
                            "transaction",
                            &tx.id.to_string(),
                            json!({
                                "reference": tx.reference,
                                "username": tx.username,
                                "amount": tx.amount,
                                "new_balance": new_balance,
                            }),
                        );
                        Ok(SettlementResponse {
                            message: "Transaction approved and funds deposited successfully"
                                .to_string(),
                            new_balance: Some(new_balance),
                        })
                    }
                    Err(e) => {
                        // Money moved upstream. The claim stays in place
                        // until an operator has looked at this.
                        error!(
                            reference = %tx.reference,
                            error = %e,
                            "gateway accepted the transfer but the settlement write failed"
                        );
                        let _ = AuditService::record(
                            &mut conn,
                            "settlement.partial",
                            "transaction",
                            &tx.id.to_string(),
                            json!({ "reference": tx.reference, "error": e.to_string() }),
                        );
                        Err(ApiError::PartialSettlement(format!(
                            "gateway accepted transfer {} but the local settlement failed: {}",
                            tx.reference, e
                        )))
                    }
                }
            }
            TransferOutcome::Unknown => {
                if let Err(release_err) = PendingTransactionRepository::release(&mut conn, tx.id) {
                    error!(
                        transaction_id = %tx.id,
                        error = %release_err,
                        "failed to release claim after ambiguous gateway reply"
                    );
                }
                warn!(
                    reference = %tx.reference,
                    code = %reply.code,
                    message = %reply.message,
                    "gateway outcome unknown, transaction left pending"
                );
                let _ = AuditService::record(
                    &mut conn,
                    "settlement.ambiguous",
                    "transaction",
                    &tx.id.to_string(),
                    json!({ "reference": tx.reference, "code": reply.code, "message": reply.message }),
                );
                Err(ApiError::AmbiguousStatus(format!(
                    "{} (code: {})",
                    reply.message, reply.code
                )))
            }
            TransferOutcome::Rejected => {
                PendingTransactionRepository::delete(&mut conn, tx.id)?;
                warn!(
                    reference = %tx.reference,
                    code = %reply.code,
                    message = %reply.message,
                    "gateway rejected the transfer, transaction failed"
                );
                let _ = AuditService::record(
                    &mut conn,
                    "settlement.failed",
                    "transaction",
                    &tx.id.to_string(),
                    json!({ "reference": tx.reference, "code": reply.code, "message": reply.message }),
                );
                Err(ApiError::Gateway {
                    code: reply.code,
                    message: reply.message,
                })
            }
        }
    }

    /// Removes a pending transaction without contacting the gateway.
    pub async fn reject(
        state: &AppState,
        transaction_id: Uuid,
    ) -> Result<SettlementResponse, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let deleted = PendingTransactionRepository::delete_if_pending(&mut conn, transaction_id)?;
        if deleted == 0 {
            return match PendingTransactionRepository::find_by_id(&mut conn, transaction_id)? {
                Some(_) => Err(ApiError::Conflict(format!(
                    "Transaction {} is being settled and cannot be rejected",
                    transaction_id
                ))),
                None => Err(ApiError::NotFound(format!(
                    "Pending transaction {} not found",
                    transaction_id
                ))),
            };
        }

        info!(transaction_id = %transaction_id, "transaction rejected by operator");
        let _ = AuditService::record(
            &mut conn,
            "settlement.rejected",
            "transaction",
            &transaction_id.to_string(),
            json!({}),
        );

        Ok(SettlementResponse {
            message: "Transaction marked as failed".to_string(),
            new_balance: None,
        })
    }

    /// Operator-triggered deposit with no pre-existing pending record.
    /// Ambiguous and rejected outcomes leave no trace; the operator
    /// retries with a fresh reference id.
    pub async fn manual_deposit(
        state: &AppState,
        req: ManualDepositRequest,
    ) -> Result<SettlementResponse, ApiError> {
        if req.amount <= 0 {
            return Err(ApiError::BadRequest("Amount must be positive".into()));
        }
        if req.username.is_empty() || req.reference_id.is_empty() {
            return Err(ApiError::BadRequest(
                "Username and reference id are required".into(),
            ));
        }

        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let user = Self::lookup_signer(&mut conn, &req.username)?;
        let password = user.gateway_password.as_deref().unwrap_or_default();

        if DepositRepository::exists_by_order_id(&mut conn, &req.reference_id)? {
            return Err(ApiError::Conflict(format!(
                "Reference {} has already been settled",
                req.reference_id
            )));
        }

        let reply = Self::call_gateway(
            state,
            &req.username,
            password,
            &req.reference_id,
            req.amount,
            req.signature.as_deref(),
        )
        .await?;

        match reply.outcome() {
            TransferOutcome::Accepted => {
                let settled = conn.transaction::<_, ApiError, _>(|conn| {
                    let inserted = DepositRepository::insert(
                        conn,
                        NewDeposit {
                            order_id: &req.reference_id,
                            username: &req.username,
                            amount: req.amount,
                            status: SettlementState::Successful,
                            created_at: Utc::now(),
                        },
                    )?;
                    if inserted == 0 {
                        return Err(ApiError::Conflict(format!(
                            "Reference {} already has a settled deposit",
                            req.reference_id
                        )));
                    }
                    UserRepository::credit_balance(conn, &req.username, req.amount)
                });

                match settled {
                    Ok(new_balance) => {
                        info!(
                            reference = %req.reference_id,
                            username = %req.username,
                            amount = req.amount,
                            "manual deposit settled"
                        );
                        let _ = AuditService::record(
                            &mut conn,
                            "settlement.manual_deposit",
                            "deposit",
                            &req.reference_id,
                            json!({
                                "username": req.username,
                                "amount": req.amount,
                                "new_balance": new_balance,
                            }),
                        );
                        Ok(SettlementResponse {
                            message: format!(
                                "Successfully deposited {} to {}'s wallet",
                                wire_amount(req.amount),
                                req.username
                            ),
                            new_balance: Some(new_balance),
                        })
                    }
                    Err(e) => {
                        error!(
                            reference = %req.reference_id,
                            error = %e,
                            "gateway accepted the transfer but the deposit write failed"
                        );
                        Err(ApiError::PartialSettlement(format!(
                            "gateway accepted transfer {} but the local settlement failed: {}",
                            req.reference_id, e
                        )))
                    }
                }
            }
            TransferOutcome::Unknown => {
                warn!(
                    reference = %req.reference_id,
                    code = %reply.code,
                    "manual deposit outcome unknown, nothing recorded"
                );
                Err(ApiError::AmbiguousStatus(format!(
                    "{} (code: {})",
                    reply.message, reply.code
                )))
            }
            TransferOutcome::Rejected => {
                warn!(
                    reference = %req.reference_id,
                    code = %reply.code,
                    message = %reply.message,
                    "manual deposit rejected by gateway"
                );
                Err(ApiError::Gateway {
                    code: reply.code,
                    message: reply.message,
                })
            }
        }
    }

    fn lookup_signer(conn: &mut PgConnection, username: &str) -> Result<User, ApiError> {
        match UserRepository::find_by_username(conn, username)? {
            Some(user) if user.gateway_password.is_some() => Ok(user),
            _ => Err(ApiError::NotFound(format!(
                "User {} not found or has no gateway credential",
                username
            ))),
        }
    }

    async fn call_gateway(
        state: &AppState,
        username: &str,
        password: &str,
        reference_id: &str,
        amount_minor: i64,
        signature_override: Option<&str>,
    ) -> Result<GatewayReply, ApiError> {
        let gateway = &state.config.gateway;
        let amount = wire_amount(amount_minor);
        let kind = TransactionKind::Deposit.wire_code();

        let computed;
        let signature = match signature_override {
            Some(signature) => signature,
            None => {
                computed = transfer_signature(
                    &SignatureFields {
                        amount: &amount,
                        operator_code: &gateway.operator_code,
                        password,
                        provider_code: &gateway.provider_code,
                        reference_id,
                        kind,
                        username,
                    },
                    gateway.secret_key.expose_secret(),
                );
                &computed
            }
        };

        let client = TransferGatewayClient::new(
            state.http_client.clone(),
            &gateway.api_url,
            Duration::from_secs(gateway.request_timeout_secs),
        )?;

        Ok(client
            .make_transfer(&TransferRequest {
                operator_code: &gateway.operator_code,
                provider_code: &gateway.provider_code,
                username,
                password,
                reference_id,
                kind,
                amount: &amount,
                signature,
            })
            .await)
    }
}
