//! Event tracking against a mock ingestion endpoint.

use mixpanel_api::track::LIBRARY_ID;
use mixpanel_api::Properties;
use serde_json::json;
use wiremock::MockServer;

use crate::common::{client_for, props, respond, single_payload, TOKEN};

#[tokio::test]
async fn test_signup_scenario_payload() {
    let server = MockServer::start().await;
    respond(&server, "track", "1").await;

    client_for(&server)
        .track("u1", "signup", Properties::new())
        .await
        .expect("track should succeed");

    assert_eq!(
        single_payload(&server).await,
        json!({
            "event": "signup",
            "properties": {"distinct_id": "u1", "token": TOKEN, "mp_lib": LIBRARY_ID}
        })
    );
}

#[tokio::test]
async fn test_caller_properties_survive_and_identity_wins() {
    let server = MockServer::start().await;
    respond(&server, "track", "1").await;

    client_for(&server)
        .track(
            "u2",
            "purchase",
            props(json!({
                "distinct_id": "someone-else",
                "token": "spoofed",
                "amount": 12.5,
                "items": ["a", "b"],
                "meta": {"coupon": true}
            })),
        )
        .await
        .unwrap();

    let payload = single_payload(&server).await;
    let properties = &payload["properties"];
    assert_eq!(properties["distinct_id"], "u2");
    assert_eq!(properties["token"], TOKEN);
    assert_eq!(properties["amount"], 12.5);
    assert_eq!(properties["items"], json!(["a", "b"]));
    assert_eq!(properties["meta"], json!({"coupon": true}));
}

#[tokio::test]
async fn test_empty_distinct_id_is_not_sent() {
    let server = MockServer::start().await;
    respond(&server, "track", "1\n").await;

    client_for(&server)
        .track("", "pageview", Properties::new())
        .await
        .unwrap();

    let payload = single_payload(&server).await;
    assert!(payload["properties"].get("distinct_id").is_none());
    assert_eq!(payload["properties"]["token"], TOKEN);
}

#[tokio::test]
async fn test_non_sentinel_bodies_fail_with_body() {
    for body in ["0", "", "error"] {
        let server = MockServer::start().await;
        respond(&server, "track", body).await;

        let err = client_for(&server)
            .track("u1", "signup", Properties::new())
            .await
            .expect_err("non-sentinel body should fail");

        assert!(err.is_api_rejection(), "body {body:?}: {err}");
        assert_eq!(err.api_body(), Some(body));
    }
}
