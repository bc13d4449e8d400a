//! HTTP response handling and the ingestion success sentinel.

use tracing::warn;

use crate::error::{Error, ErrorKind, Result};

/// Body returned by the ingestion endpoints when a request is accepted.
pub const SUCCESS_SENTINEL: &str = "1";

/// Wrapper around an HTTP response.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        self.inner.status().is_success()
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }
}

/// Extension trait for interpreting ingestion API responses.
pub trait ResponseExt {
    /// Read the full body and fail unless it is the success sentinel.
    fn check_success_sentinel(self) -> impl std::future::Future<Output = Result<()>> + Send;
}

impl ResponseExt for Response {
    async fn check_success_sentinel(self) -> Result<()> {
        let status = self.status();
        let body = self.text().await?;
        check_sentinel(status, &body)
    }
}

/// Compare a response body against the success sentinel.
///
/// A single trailing `\n` or `\r\n` is ignored. Any other body, including an
/// empty one, is an [`ErrorKind::Api`] error carrying the raw body text.
pub fn check_sentinel(status: u16, body: &str) -> Result<()> {
    let trimmed = body
        .strip_suffix('\n')
        .map(|b| b.strip_suffix('\r').unwrap_or(b))
        .unwrap_or(body);

    if trimmed == SUCCESS_SENTINEL {
        return Ok(());
    }

    warn!(status, body = %body, "Ingestion request rejected");
    Err(Error::new(ErrorKind::Api {
        status,
        body: body.to_string(),
    }))
}
