//! Mixpanel tracking client.
//!
//! Wraps `HttpClient` from `mp-client` with the identity and encoding rules
//! of the ingestion endpoints.
//!
//! ## Security
//!
//! - The project token is redacted in Debug output
//! - Payloads are skipped in tracing spans

use serde::Serialize;
use tracing::{debug, instrument};

use mixpanel_client::{ClientConfig, HttpClient, RequestMethod, DEFAULT_BASE_URL};

use crate::error::{Error, ErrorKind, Result};
use crate::operation::Operation;
use crate::payload::{
    encode_data, inject_identity, DistinctId, Envelope, IdentityKeys, Properties,
};

/// Environment variable holding the project token.
pub const TOKEN_ENV: &str = "MIXPANEL_TOKEN";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "MIXPANEL_API_URL";

const TRACK_ENDPOINT: &str = "track";
const ENGAGE_ENDPOINT: &str = "engage";

/// Client for the Mixpanel ingestion API.
///
/// Every operation takes its properties by value: the caller's map is moved
/// in, merged with the identity keys, and dropped once the request is done.
///
/// # Example
///
/// ```rust,ignore
/// use mixpanel_track::{MixpanelClient, Operation, Properties};
/// use serde_json::json;
///
/// let client = MixpanelClient::new("project-token")?;
///
/// let mut props = Properties::new();
/// props.insert("plan".into(), json!("pro"));
/// client.track("user-42", "signup", props).await?;
///
/// let mut values = Properties::new();
/// values.insert("$email".into(), json!("user@example.com"));
/// client.engage("user-42", Properties::new(), Operation::set(values)).await?;
/// ```
#[derive(Clone)]
pub struct MixpanelClient {
    http: HttpClient,
    token: String,
    base_url: String,
}

impl std::fmt::Debug for MixpanelClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MixpanelClient")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl MixpanelClient {
    /// Create a client for the given project token against the default API host.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(token, ClientConfig::default())
    }

    /// Create a client with custom HTTP configuration.
    pub fn with_config(token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let http = HttpClient::new(config)?;
        Ok(Self::from_http(http, token))
    }

    /// Create a client from an existing `HttpClient`.
    pub fn from_http(http: HttpClient, token: impl Into<String>) -> Self {
        Self {
            http,
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a client from `MIXPANEL_TOKEN` and, if set, `MIXPANEL_API_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token =
            lookup(TOKEN_ENV).ok_or_else(|| Error::new(ErrorKind::EnvVar(TOKEN_ENV.to_string())))?;

        let mut client = Self::new(token)?;
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            client.set_base_url(base_url);
        }
        Ok(client)
    }

    /// Point the client at a different API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.set_base_url(base_url);
        self
    }

    /// Point the client at a different API host in place.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
    }

    /// Get the project token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Get the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the underlying HTTP client.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Track an event.
    ///
    /// `distinct_id` is attached as `distinct_id` when non-empty. `token` and
    /// `mp_lib` always overwrite whatever the caller put in `properties`.
    #[instrument(skip(self, properties), fields(event = %event, distinct_id = %distinct_id))]
    pub async fn track(
        &self,
        distinct_id: &str,
        event: &str,
        mut properties: Properties,
    ) -> Result<()> {
        if event.is_empty() {
            return Err(Error::new(ErrorKind::Config("Event name missing".to_string())));
        }

        inject_identity(
            &mut properties,
            IdentityKeys::Event,
            distinct_id,
            DistinctId::IfPresent,
            &self.token,
        );
        let envelope = Envelope {
            event: event.to_string(),
            properties,
        };

        self.send(RequestMethod::Get, TRACK_ENDPOINT, &envelope).await
    }

    /// Apply a profile update.
    ///
    /// The payload is `properties` itself, with `$distinct_id`, `$token`,
    /// `mp_lib` and the operation's verb key written into it. `$distinct_id`
    /// is written even when `distinct_id` is empty.
    #[instrument(skip(self, properties, operation), fields(distinct_id = %distinct_id, verb = %operation.verb))]
    pub async fn engage(
        &self,
        distinct_id: &str,
        mut properties: Properties,
        operation: Operation,
    ) -> Result<()> {
        inject_identity(
            &mut properties,
            IdentityKeys::Profile,
            distinct_id,
            DistinctId::Always,
            &self.token,
        );
        operation.apply(&mut properties);

        self.send(RequestMethod::Get, ENGAGE_ENDPOINT, &properties).await
    }

    /// Build a URL that records `event` and then redirects to `redirect_uri`.
    ///
    /// No request is made. The result has the form
    /// `{base_url}/track?data=...&redirect=...`.
    pub fn redirect_url(
        &self,
        distinct_id: &str,
        event: &str,
        redirect_uri: &str,
        mut properties: Properties,
    ) -> Result<String> {
        inject_identity(
            &mut properties,
            IdentityKeys::Profile,
            distinct_id,
            DistinctId::IfPresent,
            &self.token,
        );
        let envelope = Envelope {
            event: event.to_string(),
            properties,
        };

        let data = encode_data(&envelope)?;
        let params = [("data", data.as_str()), ("redirect", redirect_uri)];
        let query = serde_urlencoded::to_string(&params[..])?;

        Ok(format!("{}/{}?{}", self.base_url, TRACK_ENDPOINT, query))
    }

    /// Encode `payload` as the `data` parameter and send it to `endpoint`.
    ///
    /// Succeeds only when the API answers with the success sentinel.
    pub async fn send<T: Serialize + ?Sized>(
        &self,
        method: RequestMethod,
        endpoint: &str,
        payload: &T,
    ) -> Result<()> {
        let data = encode_data(payload)?;
        debug!(endpoint, %method, encoded_len = data.len(), "Encoded payload");

        let request = self
            .http
            .request(method, &self.base_url, endpoint)?
            .param("data", data);

        self.http.send(request).await?;
        Ok(())
    }
}
