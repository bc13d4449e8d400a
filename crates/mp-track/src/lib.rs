//! # mp-track
//!
//! Mixpanel tracking client.
//!
//! ## Features
//!
//! - **Track** - Record an event for a distinct id
//! - **Engage** - Update a user profile with `$set`, `$unset` and friends
//! - **Redirect URLs** - Build a link that records an event, then redirects
//!
//! Every payload is sent as `data=base64(json(payload))` and is accepted only
//! when the API answers `1`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use mixpanel_track::{MixpanelClient, Operation, Properties};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mixpanel_track::Error> {
//!     let client = MixpanelClient::new("project-token")?;
//!
//!     let mut props = Properties::new();
//!     props.insert("plan".into(), json!("pro"));
//!     client.track("user-42", "signup", props).await?;
//!
//!     let mut unset = Properties::new();
//!     unset.insert("trial_ends".into(), json!(null));
//!     client
//!         .engage("user-42", Properties::new(), Operation::unset(unset))
//!         .await?;
//!
//!     let link = client.redirect_url(
//!         "user-42",
//!         "email-click",
//!         "https://example.com/welcome",
//!         Properties::new(),
//!     )?;
//!     println!("{link}");
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod operation;
mod payload;

pub use client::{MixpanelClient, BASE_URL_ENV, TOKEN_ENV};
pub use error::{Error, ErrorKind, Result};
pub use operation::{Operation, OperationVerb};
pub use payload::{decode_data, encode_data, Envelope, Properties, LIBRARY_ID, LIBRARY_KEY};

pub use mixpanel_client::{ClientConfig, RequestMethod, DEFAULT_BASE_URL};
