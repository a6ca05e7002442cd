use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api/";
pub const DEFAULT_API_KEY: &str = "reqres-free-v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for the shared [`ApiClient`](super::ApiClient).
///
/// The application only ever uses [`ClientConfig::default`]; the fields are
/// public so tests can point the client at a local server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root every endpoint path is joined onto.
    pub base_url: String,
    /// Upper bound for a whole request, connect through body.
    pub timeout: Duration,
    /// Sent as `x-api-key` when present.
    pub api_key: Option<String>,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub system_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            api_key: Some(DEFAULT_API_KEY.to_string()),
            system_proxy: true,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Base URL with a guaranteed trailing slash, so `register` lands under
    /// `/api/` instead of replacing its last segment.
    pub fn normalized_base_url(&self) -> String {
        if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        }
    }
}
