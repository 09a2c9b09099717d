use thiserror::Error;

/// Failure of a single round-trip to the EchoVerse server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx status; `message` is the body's `error` field when it had one.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Server { status: u16, message: Option<String> },

    /// 2xx response whose body reported `success: false`.
    #[error("rejected: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),

    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("decode: {0}")]
    Decode(String),

    #[error("config: {0}")]
    Config(String),
}

impl ApiError {
    /// The server-supplied reason, if the server gave one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            ApiError::Rejected(message) => message.as_deref(),
            _ => None,
        }
    }

    /// True when the server answered at all, as opposed to transport or decode trouble.
    pub fn is_server_reported(&self) -> bool {
        matches!(self, ApiError::Server { .. } | ApiError::Rejected(_))
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::Config(err.to_string())
    }
}
