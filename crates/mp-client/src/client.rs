//! Core HTTP client for the ingestion endpoints.

use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBuilder, RequestMethod};
use crate::response::{Response, ResponseExt};

/// HTTP client for the Mixpanel ingestion API.
///
/// One request per call; failures are returned to the caller as-is.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        builder = builder
            .gzip(config.accept_compressed)
            .deflate(config.accept_compressed);

        let inner = builder
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create a request builder for `{base_url}/{endpoint}`.
    ///
    /// Fails with a configuration error when `endpoint` is empty, and with an
    /// invalid-URL error when the joined URL does not parse.
    pub fn request(
        &self,
        method: RequestMethod,
        base_url: &str,
        endpoint: &str,
    ) -> Result<RequestBuilder> {
        let endpoint = endpoint.trim_start_matches('/');
        if endpoint.is_empty() {
            return Err(Error::new(ErrorKind::Config("Endpoint missing".to_string())));
        }

        let url = format!("{}/{}", base_url.trim_end_matches('/'), endpoint);
        url::Url::parse(&url)?;

        Ok(RequestBuilder::new(method, url))
    }

    /// Execute a request and return the raw response.
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let url = match request.method {
            RequestMethod::Get => request.full_url()?,
            RequestMethod::Post => request.url.clone(),
        };
        let mut req = self.inner.request(request.method.to_reqwest(), url);

        if request.method == RequestMethod::Post {
            req = req
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(request.encoded_params()?);
        }

        if self.config.enable_tracing {
            debug!(
                method = %request.method,
                url = %request.url,
                params = request.params.len(),
                "Sending request"
            );
        }

        let response = req.send().await?;

        if self.config.enable_tracing {
            let status = response.status().as_u16();
            let content_length = response.content_length();

            if response.status().is_success() {
                debug!(status, content_length, "Response received");
            } else {
                info!(status, content_length, "Non-success response");
            }
        }

        Ok(Response::new(response))
    }

    /// Execute a request and require the success sentinel in the response body.
    pub async fn send(&self, request: RequestBuilder) -> Result<()> {
        let response = self.execute(request).await?;
        response.check_success_sentinel().await
    }
}
