//! Profile updates against a mock ingestion endpoint.

use mixpanel_api::{Operation, OperationVerb, Properties};
use serde_json::json;
use wiremock::MockServer;

use crate::common::{client_for, props, respond, single_payload, TOKEN};

#[tokio::test]
async fn test_unset_transmits_key_names() {
    let server = MockServer::start().await;
    respond(&server, "engage", "1").await;

    client_for(&server)
        .engage(
            "u1",
            Properties::new(),
            Operation::unset(props(json!({"a": 1, "b": 2}))),
        )
        .await
        .unwrap();

    let payload = single_payload(&server).await;
    let mut keys: Vec<String> = serde_json::from_value(payload["$unset"].clone()).unwrap();
    keys.sort();
    assert_eq!(keys, ["a", "b"]);
}

#[tokio::test]
async fn test_set_transmits_values() {
    let server = MockServer::start().await;
    respond(&server, "engage", "1").await;

    client_for(&server)
        .engage(
            "u1",
            props(json!({"$ip": "0"})),
            Operation::new(OperationVerb::Set, props(json!({"a": 1}))),
        )
        .await
        .unwrap();

    assert_eq!(
        single_payload(&server).await,
        json!({
            "$distinct_id": "u1",
            "$token": TOKEN,
            "$ip": "0",
            "mp_lib": "mixpanel-api-rs",
            "$set": {"a": 1}
        })
    );
}

#[tokio::test]
async fn test_empty_distinct_id_is_still_sent() {
    let server = MockServer::start().await;
    respond(&server, "engage", "1").await;

    client_for(&server)
        .engage(
            "",
            props(json!({"$distinct_id": "caller"})),
            Operation::set(Properties::new()),
        )
        .await
        .unwrap();

    assert_eq!(
        single_payload(&server).await,
        json!({
            "$distinct_id": "",
            "$token": TOKEN,
            "mp_lib": "mixpanel-api-rs",
            "$set": {}
        })
    );
}

#[tokio::test]
async fn test_engage_rejection() {
    let server = MockServer::start().await;
    respond(&server, "engage", "0\n").await;

    let err = client_for(&server)
        .engage("u1", Properties::new(), Operation::delete())
        .await
        .unwrap_err();

    assert!(err.is_api_rejection());
    assert_eq!(err.api_body(), Some("0\n"));
}
