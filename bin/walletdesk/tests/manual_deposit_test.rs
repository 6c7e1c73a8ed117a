mod common;

use common::fixtures;
use serial_test::serial;
use walletdesk_core::services::settlement_service::SettlementService;
use walletdesk_primitives::error::ApiError;
use walletdesk_primitives::models::settlement_dto::ManualDepositRequest;
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

fn request(reference: &str, amount: i64) -> ManualDepositRequest {
    ManualDepositRequest {
        username: "alice".to_string(),
        amount,
        reference_id: reference.to_string(),
        signature: None,
    }
}

#[tokio::test]
#[serial]
async fn manual_deposit_success_creates_ledger_entry_and_credits() {
    let gateway = gateway_returning("0", "").await;
    let Some(state) = common::try_test_app_state(&endpoint(&gateway)) else {
        return;
    };
    let mut conn = state.db.get().unwrap();

    fixtures::insert_user(&mut conn, "alice", Some("pw1"), 10_000);

    let response = SettlementService::manual_deposit(&state, request("MREF1", 2_500))
        .await
        .unwrap();
    assert_eq!(response.new_balance, Some(12_500));
    assert!(response.message.contains("alice"));

    assert_eq!(fixtures::wallet_balance(&mut conn, "alice"), 12_500);
    let deposits = fixtures::deposits_with_order(&mut conn, "MREF1");
    assert_eq!(deposits.len(), 1);
    assert_eq!(deposits[0].amount, 2_500);
}

#[tokio::test]
#[serial]
async fn manual_deposit_refuses_a_settled_reference_before_calling_out() {
    let gateway = gateway_returning("0", "").await;
    let Some(state) = common::try_test_app_state(&endpoint(&gateway)) else {
        return;
    };
    let mut conn = state.db.get().unwrap();

    fixtures::insert_user(&mut conn, "alice", Some("pw1"), 10_000);
    fixtures::insert_deposit(&mut conn, "alice", "MREF1", 2_500);

    let err = SettlementService::manual_deposit(&state, request("MREF1", 2_500))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));

    assert_eq!(fixtures::wallet_balance(&mut conn, "alice"), 10_000);
    assert_eq!(fixtures::deposits_with_order(&mut conn, "MREF1").len(), 1);
    assert!(gateway.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn manual_deposit_ambiguous_outcome_records_nothing() {
    let gateway = gateway_returning("999", "timeout talking to provider").await;
    let Some(state) = common::try_test_app_state(&endpoint(&gateway)) else {
        return;
    };
    let mut conn = state.db.get().unwrap();

    fixtures::insert_user(&mut conn, "alice", Some("pw1"), 10_000);

    let err = SettlementService::manual_deposit(&state, request("MREF2", 2_500))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::AmbiguousStatus(_)));

    assert_eq!(fixtures::wallet_balance(&mut conn, "alice"), 10_000);
    assert!(fixtures::deposits_with_order(&mut conn, "MREF2").is_empty());
}

#[tokio::test]
#[serial]
async fn manual_deposit_rejection_records_nothing() {
    let gateway = gateway_returning("12", "player not found").await;
    let Some(state) = common::try_test_app_state(&endpoint(&gateway)) else {
        return;
    };
    let mut conn = state.db.get().unwrap();

    fixtures::insert_user(&mut conn, "alice", Some("pw1"), 10_000);

    let err = SettlementService::manual_deposit(&state, request("MREF3", 2_500))
        .await
        .unwrap_err();
    match err {
        ApiError::Gateway { code, message } => {
            assert_eq!(code, "12");
            assert!(message.contains("player not found"));
        }
        other => panic!("expected gateway rejection, got {:?}", other),
    }

    assert_eq!(fixtures::wallet_balance(&mut conn, "alice"), 10_000);
    assert!(fixtures::deposits_with_order(&mut conn, "MREF3").is_empty());
}

#[tokio::test]
#[serial]
async fn manual_deposit_rejects_non_positive_amounts_locally() {
    let gateway = gateway_returning("0", "").await;
    let Some(state) = common::try_test_app_state(&endpoint(&gateway)) else {
        return;
    };

    let err = SettlementService::manual_deposit(&state, request("MREF4", 0))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
    assert!(gateway.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn manual_deposit_honors_a_caller_supplied_signature() {
    let gateway = gateway_returning("0", "").await;
    let Some(state) = common::try_test_app_state(&endpoint(&gateway)) else {
        return;
    };
    let mut conn = state.db.get().unwrap();

    fixtures::insert_user(&mut conn, "alice", Some("pw1"), 10_000);

    let req = ManualDepositRequest {
        username: "alice".to_string(),
        amount: 2_500,
        reference_id: "MREF5".to_string(),
        signature: Some("CAFEBABECAFEBABECAFEBABECAFEBABE".to_string()),
    };
    SettlementService::manual_deposit(&state, req).await.unwrap();

    let requests = gateway.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let query = requests[0].url.query().unwrap().to_string();
    assert!(query.ends_with("signature=CAFEBABECAFEBABECAFEBABECAFEBABE"));
}
