//! HTTP request building for the ingestion endpoints.
//!
//! Every Mixpanel ingestion call carries its payload as flat string
//! parameters. A GET puts them in the query string, a POST sends them as an
//! `application/x-www-form-urlencoded` body.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind, Result};

/// HTTP request method accepted by the ingestion API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestMethod {
    #[default]
    Get,
    Post,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
        }
    }

    /// The canonical upper-case method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "GET" => Ok(RequestMethod::Get),
            "POST" => Ok(RequestMethod::Post),
            other => Err(Error::new(ErrorKind::Config(format!(
                "Method not supported: {other}"
            )))),
        }
    }
}

/// Builder for ingestion requests.
#[derive(Debug)]
pub struct RequestBuilder {
    pub(crate) method: RequestMethod,
    pub(crate) url: String,
    pub(crate) params: Vec<(String, String)>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: RequestMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            params: Vec::new(),
        }
    }

    /// Add a parameter. Sent in the query string for GET, in the form body for POST.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// The request method.
    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// The target URL, without parameters.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The parameters, URL-encoded as `k=v&k2=v2`.
    pub fn encoded_params(&self) -> Result<String> {
        Ok(serde_urlencoded::to_string(&self.params)?)
    }

    /// The full URL a GET would hit (base URL plus query string, if any).
    pub fn full_url(&self) -> Result<String> {
        let enc = self.encoded_params()?;
        if enc.is_empty() {
            Ok(self.url.clone())
        } else {
            Ok(format!("{}?{}", self.url, enc))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let req = RequestBuilder::new(RequestMethod::Get, "http://api.mixpanel.com/track")
            .param("data", "eyJ9");

        assert_eq!(req.method(), RequestMethod::Get);
        assert_eq!(req.url(), "http://api.mixpanel.com/track");
        assert_eq!(req.params.len(), 1);
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("GET".parse::<RequestMethod>().unwrap(), RequestMethod::Get);
        assert_eq!("POST".parse::<RequestMethod>().unwrap(), RequestMethod::Post);

        let err = "PUT".parse::<RequestMethod>().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Config(_)));
        assert!(err.to_string().contains("Method not supported: PUT"));

        assert!("get".parse::<RequestMethod>().is_err());
    }

    #[test]
    fn test_full_url_encodes_params() {
        let req = RequestBuilder::new(RequestMethod::Get, "http://localhost/track")
            .param("data", "a+b/c=")
            .param("redirect", "https://example.com/?x=1");

        assert_eq!(
            req.full_url().unwrap(),
            "http://localhost/track?data=a%2Bb%2Fc%3D&redirect=https%3A%2F%2Fexample.com%2F%3Fx%3D1"
        );
    }

    #[test]
    fn test_full_url_without_params() {
        let req = RequestBuilder::new(RequestMethod::Get, "http://localhost/track");
        assert_eq!(req.full_url().unwrap(), "http://localhost/track");
    }
}
