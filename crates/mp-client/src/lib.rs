//! # mp-client
//!
//! HTTP transport for the Mixpanel ingestion API.
//!
//! This crate provides the plumbing shared by every ingestion call:
//! - Request building against `{base_url}/{endpoint}`
//! - Parameters as a query string (GET) or URL-encoded form body (POST)
//! - Response handling, including the `"1"` success sentinel
//! - Request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    MixpanelClient (mp-track)                │
//! │  - Holds token + base URL                                   │
//! │  - Injects identity fields, encodes payloads                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    HttpClient                               │
//! │  - GET/POST with a single `data` parameter                  │
//! │  - Sentinel check on the response body                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use mixpanel_client::{HttpClient, RequestMethod};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mixpanel_client::Error> {
//!     let http = HttpClient::default_client()?;
//!     let request = http
//!         .request(RequestMethod::Get, "http://api.mixpanel.com", "track")?
//!         .param("data", "eyJldmVudCI6InNpZ251cCJ9");
//!
//!     http.send(request).await?;
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;

pub use client::HttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBuilder, RequestMethod};
pub use response::{check_sentinel, Response, ResponseExt, SUCCESS_SENTINEL};

/// Default Mixpanel API host.
pub const DEFAULT_BASE_URL: &str = "http://api.mixpanel.com";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("mixpanel-api/", env!("CARGO_PKG_VERSION"));
