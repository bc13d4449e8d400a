//! Shared helpers for integration tests.

use base64::prelude::*;
use mixpanel_api::{ClientConfig, MixpanelClient, Properties};
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const TOKEN: &str = "T1";

/// A client pointed at the mock server.
pub fn client_for(server: &MockServer) -> MixpanelClient {
    MixpanelClient::with_config(TOKEN, ClientConfig::builder().with_tracing(false).build())
        .expect("client should build")
        .with_base_url(server.uri())
}

/// Mount a GET handler on `/{endpoint}` that answers with `body`.
pub async fn respond(server: &MockServer, endpoint: &str, body: &'static str) {
    Mock::given(method("GET"))
        .and(path(format!("/{endpoint}")))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Decode a `data` parameter by hand, independently of the library.
pub fn decode(data: &str) -> Value {
    let json = BASE64_STANDARD.decode(data).expect("data should be base64");
    serde_json::from_slice(&json).expect("data should be JSON")
}

/// The decoded `data` query parameter of the only request the server saw.
pub async fn single_payload(server: &MockServer) -> Value {
    let requests: Vec<Request> = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1, "expected exactly one request");

    let data = requests[0]
        .url
        .query_pairs()
        .find(|(k, _)| k == "data")
        .map(|(_, v)| v.into_owned())
        .expect("request has no data parameter");
    decode(&data)
}

/// Build a property bag from a JSON object literal.
pub fn props(value: Value) -> Properties {
    match value {
        Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}
