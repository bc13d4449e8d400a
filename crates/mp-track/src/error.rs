//! Error types for mp-track.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    fn client_error(&self) -> Option<&mixpanel_client::Error> {
        self.source.as_ref()?.downcast_ref::<mixpanel_client::Error>()
    }

    /// Returns true if the API answered with something other than the success sentinel.
    pub fn is_api_rejection(&self) -> bool {
        self.client_error().is_some_and(|e| e.is_api_rejection())
    }

    /// The response body of a rejected request.
    pub fn api_body(&self) -> Option<&str> {
        self.client_error()?.api_body()
    }

    /// Returns true if the request failed before a response was read.
    pub fn is_transport(&self) -> bool {
        self.client_error().is_some_and(|e| e.is_transport())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("Client error: {0}")]
    Client(String),
    #[error("Encoding error: {0}")]
    Encoding(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Environment variable not set: {0}")]
    EnvVar(String),
}

impl From<mixpanel_client::Error> for Error {
    fn from(err: mixpanel_client::Error) -> Self {
        use mixpanel_client::ErrorKind as Kind;

        let kind = match &err.kind {
            Kind::Config(msg) => ErrorKind::Config(msg.clone()),
            Kind::InvalidUrl(_) => ErrorKind::Config(err.to_string()),
            Kind::Json(_) | Kind::Serialization(_) => ErrorKind::Encoding(err.to_string()),
            _ => ErrorKind::Client(err.to_string()),
        };
        Error { kind, source: Some(Box::new(err)) }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error { kind: ErrorKind::Encoding(err.to_string()), source: Some(Box::new(err)) }
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error { kind: ErrorKind::Encoding(err.to_string()), source: Some(Box::new(err)) }
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Error { kind: ErrorKind::Encoding(err.to_string()), source: Some(Box::new(err)) }
    }
}
