//! # mixpanel-api
//!
//! A client library for the Mixpanel tracking API.
//!
//! Events, profile updates and tracked redirect links are encoded as
//! `base64(json(payload))` and sent as a single `data` parameter; the API
//! answers `1` when it accepts a request.
//!
//! ## Security
//!
//! - The project token is redacted in Debug output
//! - Tracing spans skip the token and the payloads
//!
//! ## Crates
//!
//! - **mixpanel-client** - HTTP transport: request encoding, execution, sentinel check
//! - **mixpanel-track** - Tracking client: `track`, `engage`, `redirect_url`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mixpanel_api::{MixpanelClient, Properties};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MixpanelClient::from_env()?;
//!
//!     let mut props = Properties::new();
//!     props.insert("source".into(), json!("newsletter"));
//!     client.track("user-42", "signup", props).await?;
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "client")]
pub use mixpanel_client as client;
#[cfg(feature = "track")]
pub use mixpanel_track as track;

// Re-export commonly used types at the top level
#[cfg(feature = "client")]
pub use mixpanel_client::{ClientConfig, DEFAULT_BASE_URL};
#[cfg(feature = "track")]
pub use mixpanel_track::{MixpanelClient, Operation, OperationVerb, Properties};
