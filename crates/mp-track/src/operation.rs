//! Profile update operations for the `engage` endpoint.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{Error, ErrorKind, Result};
use crate::payload::Properties;

/// A profile mutation verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationVerb {
    /// `$set`: overwrite properties.
    Set,
    /// `$set_once`: set properties that are not already present.
    SetOnce,
    /// `$add`: increment numeric properties.
    Add,
    /// `$append`: append to list properties.
    Append,
    /// `$union`: merge into list properties without duplicates.
    Union,
    /// `$remove`: remove values from list properties.
    Remove,
    /// `$unset`: delete properties; only the key names are sent.
    Unset,
    /// `$delete`: delete the whole profile.
    Delete,
}

impl OperationVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationVerb::Set => "$set",
            OperationVerb::SetOnce => "$set_once",
            OperationVerb::Add => "$add",
            OperationVerb::Append => "$append",
            OperationVerb::Union => "$union",
            OperationVerb::Remove => "$remove",
            OperationVerb::Unset => "$unset",
            OperationVerb::Delete => "$delete",
        }
    }
}

impl fmt::Display for OperationVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationVerb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "$set" => Ok(OperationVerb::Set),
            "$set_once" => Ok(OperationVerb::SetOnce),
            "$add" => Ok(OperationVerb::Add),
            "$append" => Ok(OperationVerb::Append),
            "$union" => Ok(OperationVerb::Union),
            "$remove" => Ok(OperationVerb::Remove),
            "$unset" => Ok(OperationVerb::Unset),
            "$delete" => Ok(OperationVerb::Delete),
            other => Err(Error::new(ErrorKind::Config(format!(
                "Unknown profile operation: {other}"
            )))),
        }
    }
}

/// A profile update: a verb applied to a set of property values.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub verb: OperationVerb,
    pub values: Properties,
}

impl Operation {
    pub fn new(verb: OperationVerb, values: Properties) -> Self {
        Self { verb, values }
    }

    pub fn set(values: Properties) -> Self {
        Self::new(OperationVerb::Set, values)
    }

    pub fn set_once(values: Properties) -> Self {
        Self::new(OperationVerb::SetOnce, values)
    }

    pub fn add(values: Properties) -> Self {
        Self::new(OperationVerb::Add, values)
    }

    pub fn append(values: Properties) -> Self {
        Self::new(OperationVerb::Append, values)
    }

    pub fn union(values: Properties) -> Self {
        Self::new(OperationVerb::Union, values)
    }

    pub fn remove(values: Properties) -> Self {
        Self::new(OperationVerb::Remove, values)
    }

    /// Unset the given properties. Only the keys of `values` are transmitted.
    pub fn unset(values: Properties) -> Self {
        Self::new(OperationVerb::Unset, values)
    }

    pub fn delete() -> Self {
        Self::new(OperationVerb::Delete, Properties::new())
    }

    /// The value sent under the verb's key.
    pub fn into_value(self) -> Value {
        match self.verb {
            OperationVerb::Unset => {
                Value::Array(self.values.into_iter().map(|(k, _)| Value::String(k)).collect())
            }
            // The API ignores the value of $delete.
            OperationVerb::Delete => Value::String(String::new()),
            _ => Value::Object(self.values),
        }
    }

    /// Write this operation into a profile payload.
    pub(crate) fn apply(self, properties: &mut Properties) {
        let key = self.verb.as_str().to_string();
        properties.insert(key, self.into_value());
    }
}
