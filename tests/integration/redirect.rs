//! Tracked redirect URLs.

use std::collections::HashMap;

use mixpanel_api::{MixpanelClient, Properties};
use serde_json::json;
use wiremock::MockServer;

use crate::common::{client_for, decode, props, TOKEN};

#[tokio::test]
async fn test_redirect_url_is_offline() {
    let server = MockServer::start().await;

    let url = client_for(&server)
        .redirect_url(
            "u1",
            "newsletter-click",
            "https://example.com/a b?c=d&e=f",
            props(json!({"campaign": "spring"})),
        )
        .unwrap();

    assert!(url.starts_with(&format!("{}/track?", server.uri())));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());

    let parsed = url::Url::parse(&url).unwrap();
    let params: HashMap<String, String> = parsed.query_pairs().into_owned().collect();
    assert_eq!(params["redirect"], "https://example.com/a b?c=d&e=f");
    assert_eq!(
        decode(&params["data"]),
        json!({
            "event": "newsletter-click",
            "properties": {
                "campaign": "spring",
                "$distinct_id": "u1",
                "$token": TOKEN,
                "mp_lib": "mixpanel-api-rs"
            }
        })
    );
}

#[test]
fn test_redirect_url_uses_default_host() {
    let client = MixpanelClient::new(TOKEN).unwrap();
    let url = client
        .redirect_url("", "open", "https://example.com", Properties::new())
        .unwrap();

    assert!(url.starts_with("http://api.mixpanel.com/track?data="));
    assert!(url.contains("&redirect=https%3A%2F%2Fexample.com"));
}
