mod common;

use common::fixtures;
use serial_test::serial;
use uuid::Uuid;
use walletdesk_core::services::settlement_service::SettlementService;
use walletdesk_primitives::error::ApiError;
use walletdesk_primitives::models::enum_types::SettlementState;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn gateway_returning(code: &str, message: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/makeTransfer.aspx"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "errCode": code,
            "errMsg": message,
        })))
        .mount(&server)
        .await;
    server
}

fn endpoint(server: &MockServer) -> String {
    format!("{}/makeTransfer.aspx", server.uri())
}

#[tokio::test]
#[serial]
async fn approve_success_credits_wallet_and_moves_transaction() {
    let gateway = gateway_returning("0", "").await;
    let Some(state) = common::try_test_app_state(&endpoint(&gateway)) else {
        return;
    };
    let mut conn = state.db.get().unwrap();

    fixtures::insert_user(&mut conn, "alice", Some("pw1"), 10_000);
    let tx = fixtures::insert_pending(&mut conn, "alice", "REF1", 5_000);

    let response = SettlementService::approve(&state, tx.id).await.unwrap();
    assert_eq!(response.new_balance, Some(15_000));

    assert_eq!(fixtures::wallet_balance(&mut conn, "alice"), 15_000);
    assert!(fixtures::pending_by_id(&mut conn, tx.id).is_none());

    let deposits = fixtures::deposits_with_order(&mut conn, "REF1");
    assert_eq!(deposits.len(), 1);
    assert_eq!(deposits[0].username, "alice");
    assert_eq!(deposits[0].amount, 5_000);
    assert_eq!(deposits[0].status, SettlementState::Successful);
    // the ledger keeps the original request timestamp
    assert_eq!(deposits[0].created_at, tx.created_at);

    let requests = gateway.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let query = requests[0].url.query().unwrap().to_string();
    let last = query.split('&').next_back().unwrap();
    assert_eq!(last, "signature=F7E17A4E7C4F0CBFE3965AD1F11578AE");
    assert!(query.contains("amount=50.00"));
    assert!(query.contains("referenceid=REF1"));
    assert!(query.contains("type=0"));
}

#[tokio::test]
#[serial]
async fn approve_ambiguous_code_leaves_everything_untouched() {
    let gateway = gateway_returning("997", "transfer in progress").await;
    let Some(state) = common::try_test_app_state(&endpoint(&gateway)) else {
        return;
    };
    let mut conn = state.db.get().unwrap();

    fixtures::insert_user(&mut conn, "alice", Some("pw1"), 10_000);
    let tx = fixtures::insert_pending(&mut conn, "alice", "REF1", 5_000);

    let err = SettlementService::approve(&state, tx.id).await.unwrap_err();
    assert!(matches!(err, ApiError::AmbiguousStatus(_)));

    assert_eq!(fixtures::wallet_balance(&mut conn, "alice"), 10_000);
    let still_pending = fixtures::pending_by_id(&mut conn, tx.id).unwrap();
    assert_eq!(still_pending.txn_state, SettlementState::Pending);
    assert!(still_pending.claimed_at.is_none());
    assert!(fixtures::deposits_with_order(&mut conn, "REF1").is_empty());
}

#[tokio::test]
#[serial]
async fn approve_with_unreachable_gateway_is_ambiguous_not_failed() {
    // Nothing listens here; the transfer outcome is unknown.
    let Some(state) = common::try_test_app_state("http://127.0.0.1:9/makeTransfer.aspx") else {
        return;
    };
    let mut conn = state.db.get().unwrap();

    fixtures::insert_user(&mut conn, "alice", Some("pw1"), 10_000);
    let tx = fixtures::insert_pending(&mut conn, "alice", "REF1", 5_000);

    let err = SettlementService::approve(&state, tx.id).await.unwrap_err();
    assert!(matches!(err, ApiError::AmbiguousStatus(_)));

    let still_pending = fixtures::pending_by_id(&mut conn, tx.id).unwrap();
    assert_eq!(still_pending.txn_state, SettlementState::Pending);
    assert_eq!(fixtures::wallet_balance(&mut conn, "alice"), 10_000);
    assert!(fixtures::deposits_with_order(&mut conn, "REF1").is_empty());
}

#[tokio::test]
#[serial]
async fn approve_definitive_failure_drops_the_transaction() {
    let gateway = gateway_returning("5", "insufficient funds").await;
    let Some(state) = common::try_test_app_state(&endpoint(&gateway)) else {
        return;
    };
    let mut conn = state.db.get().unwrap();

    fixtures::insert_user(&mut conn, "alice", Some("pw1"), 10_000);
    let tx = fixtures::insert_pending(&mut conn, "alice", "REF1", 5_000);

    let err = SettlementService::approve(&state, tx.id).await.unwrap_err();
    match err {
        ApiError::Gateway { code, message } => {
            assert_eq!(code, "5");
            assert!(message.contains("insufficient funds"));
        }
        other => panic!("expected gateway rejection, got {:?}", other),
    }

    assert_eq!(fixtures::wallet_balance(&mut conn, "alice"), 10_000);
    assert!(fixtures::pending_by_id(&mut conn, tx.id).is_none());
    assert!(fixtures::deposits_with_order(&mut conn, "REF1").is_empty());
}

#[tokio::test]
#[serial]
async fn approve_without_gateway_credential_fails_before_any_call() {
    let gateway = gateway_returning("0", "").await;
    let Some(state) = common::try_test_app_state(&endpoint(&gateway)) else {
        return;
    };
    let mut conn = state.db.get().unwrap();

    fixtures::insert_user(&mut conn, "carol", None, 2_500);
    let tx = fixtures::insert_pending(&mut conn, "carol", "REF9", 1_000);

    let err = SettlementService::approve(&state, tx.id).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    // claim was released and no request went out
    let still_pending = fixtures::pending_by_id(&mut conn, tx.id).unwrap();
    assert_eq!(still_pending.txn_state, SettlementState::Pending);
    assert!(gateway.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn approve_unknown_id_is_not_found() {
    let gateway = gateway_returning("0", "").await;
    let Some(state) = common::try_test_app_state(&endpoint(&gateway)) else {
        return;
    };

    let err = SettlementService::approve(&state, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
#[serial]
async fn concurrent_approves_settle_at_most_once() {
    let gateway = gateway_returning("0", "").await;
    let Some(state) = common::try_test_app_state(&endpoint(&gateway)) else {
        return;
    };
    let mut conn = state.db.get().unwrap();

    fixtures::insert_user(&mut conn, "alice", Some("pw1"), 10_000);
    let tx = fixtures::insert_pending(&mut conn, "alice", "REF1", 5_000);

    let (first, second) = tokio::join!(
        SettlementService::approve(&state, tx.id),
        SettlementService::approve(&state, tx.id),
    );

    let successes = [&first, &second].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one approve may win");
    for result in [first, second] {
        if let Err(err) = result {
            assert!(matches!(
                err,
                ApiError::Conflict(_) | ApiError::NotFound(_)
            ));
        }
    }

    assert_eq!(fixtures::wallet_balance(&mut conn, "alice"), 15_000);
    assert_eq!(fixtures::deposits_with_order(&mut conn, "REF1").len(), 1);
    assert_eq!(gateway.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
#[serial]
async fn reject_removes_the_transaction_without_calling_the_gateway() {
    let gateway = gateway_returning("0", "").await;
    let Some(state) = common::try_test_app_state(&endpoint(&gateway)) else {
        return;
    };
    let mut conn = state.db.get().unwrap();

    fixtures::insert_user(&mut conn, "alice", Some("pw1"), 10_000);
    let tx = fixtures::insert_pending(&mut conn, "alice", "REF1", 5_000);

    let response = SettlementService::reject(&state, tx.id).await.unwrap();
    assert!(response.new_balance.is_none());

    assert!(fixtures::pending_by_id(&mut conn, tx.id).is_none());
    assert_eq!(fixtures::wallet_balance(&mut conn, "alice"), 10_000);
    assert!(fixtures::deposits_with_order(&mut conn, "REF1").is_empty());
    assert!(gateway.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn reject_unknown_id_is_not_found() {
    let gateway = gateway_returning("0", "").await;
    let Some(state) = common::try_test_app_state(&endpoint(&gateway)) else {
        return;
    };

    let err = SettlementService::reject(&state, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}
