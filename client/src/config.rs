use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 12;
pub const DEFAULT_USER_AGENT: &str = concat!("echoverse-client/", env!("CARGO_PKG_VERSION"));

/// Where the EchoVerse server lives and how to talk to it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    /// Value of the server's `session` cookie, for authenticated calls.
    pub session_cookie: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            session_cookie: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_session(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        // constant, always parses
        Self::new(Url::parse(DEFAULT_BASE_URL).expect("valid default base url"))
    }
}
