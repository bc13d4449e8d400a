//! Property bags, the tracking envelope, and the `data` parameter encoding.
//!
//! The ingestion API takes a single `data` parameter holding
//! `base64(json(payload))`, standard alphabet with padding.

use base64::prelude::*;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::Result;

/// Arbitrary JSON metadata attached to an event or a profile.
pub type Properties = serde_json::Map<String, serde_json::Value>;

/// Library identifier sent as `mp_lib` with every payload.
pub const LIBRARY_ID: &str = "mixpanel-api-rs";

/// Property key carrying the library identifier.
pub const LIBRARY_KEY: &str = "mp_lib";

/// Payload of a tracking call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub event: String,
    pub properties: Properties,
}

/// Naming of the injected identity keys.
///
/// Events use bare names; profile updates (and tracked redirects) use the
/// `$`-prefixed variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IdentityKeys {
    Event,
    Profile,
}

impl IdentityKeys {
    fn distinct_id(self) -> &'static str {
        match self {
            IdentityKeys::Event => "distinct_id",
            IdentityKeys::Profile => "$distinct_id",
        }
    }

    fn token(self) -> &'static str {
        match self {
            IdentityKeys::Event => "token",
            IdentityKeys::Profile => "$token",
        }
    }
}

/// Whether an empty distinct id is still written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DistinctId {
    /// Skip the key when the id is empty.
    IfPresent,
    /// Always write the key, even when the id is empty.
    Always,
}

/// Overwrite the identity keys in `properties`.
///
/// With [`DistinctId::IfPresent`] an empty id writes nothing, leaving any
/// existing value under that key alone.
pub(crate) fn inject_identity(
    properties: &mut Properties,
    keys: IdentityKeys,
    distinct_id: &str,
    policy: DistinctId,
    token: &str,
) {
    if policy == DistinctId::Always || !distinct_id.is_empty() {
        properties.insert(keys.distinct_id().to_string(), distinct_id.into());
    }
    properties.insert(keys.token().to_string(), token.into());
    properties.insert(LIBRARY_KEY.to_string(), LIBRARY_ID.into());
}

/// Encode a payload as the value of the `data` parameter.
pub fn encode_data<T: Serialize + ?Sized>(payload: &T) -> Result<String> {
    let json = serde_json::to_vec(payload)?;
    Ok(BASE64_STANDARD.encode(json))
}

/// Decode a `data` parameter value back into a payload.
pub fn decode_data<T: DeserializeOwned>(data: &str) -> Result<T> {
    let json = BASE64_STANDARD.decode(data)?;
    Ok(serde_json::from_slice(&json)?)
}
